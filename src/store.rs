//! In-memory store for the task list.
//!
//! This module provides the `TaskList` store that owns the ordered task
//! sequence, together with the `Action` reducer interface the UI layer
//! dispatches through. Keeping every mutation behind `apply` makes the
//! state machine testable without any rendering attached.

use crate::task::Task;

/// A state-mutating user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new task with the given text.
    Add(String),
    /// Flip the completion flag of the task with this id.
    Toggle(u64),
    /// Remove the task with this id.
    Delete(u64),
}

/// In-memory store owning the ordered task sequence.
///
/// Tasks keep their insertion order; there is no reordering operation.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty task list.
    pub fn new() -> Self {
        TaskList { tasks: Vec::new() }
    }

    /// Apply a single action, returning whether the state changed.
    ///
    /// Rejected actions (blank text, unknown ids) are silent no-ops.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Add(text) => self.add(&text).is_some(),
            Action::Toggle(id) => self.toggle(id),
            Action::Delete(id) => self.delete(id),
        }
    }

    /// Generate the next available task ID.
    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Append a new task with the trimmed text, returning its id.
    ///
    /// Whitespace-only text is rejected and the list is left unchanged.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id();
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
        });
        Some(id)
    }

    /// Flip the completion flag of the task with `id`.
    ///
    /// Unknown ids are ignored; returns whether a task was updated.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the task with `id`, preserving the order of the rest.
    ///
    /// Unknown ids are ignored; returns whether a task was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// The current ordered task sequence, for rendering.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a task by ID.
    fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        self.tasks.get_mut(idx)
    }

    /// Number of tasks in the list.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_trimmed_task() {
        let mut list = TaskList::new();
        let id = list.add("  Buy milk  ").expect("non-blank add");
        assert_eq!(list.len(), 1);
        let task = &list.tasks()[0];
        assert_eq!(task.id, id);
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = TaskList::new();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut list = TaskList::new();
        let a = list.add("one").unwrap();
        let b = list.add("two").unwrap();
        let c = list.add("three").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_toggle_flips_only_the_target() {
        let mut list = TaskList::new();
        let a = list.add("one").unwrap();
        let b = list.add("two").unwrap();
        assert!(list.toggle(a));
        assert!(list.get(a).unwrap().completed);
        assert!(!list.get(b).unwrap().completed);
    }

    #[test]
    fn test_toggle_twice_restores_the_task() {
        let mut list = TaskList::new();
        let id = list.add("one").unwrap();
        let before = list.tasks().to_vec();
        list.toggle(id);
        list.toggle(id);
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut list = TaskList::new();
        list.add("one");
        let before = list.tasks().to_vec();
        assert!(!list.toggle(999));
        assert!(!list.delete(999));
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let mut list = TaskList::new();
        list.add("one").unwrap();
        let b = list.add("two").unwrap();
        list.add("three").unwrap();
        assert!(list.delete(b));
        let texts: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["one", "three"]);
    }

    #[test]
    fn test_apply_matches_named_operations() {
        let mut list = TaskList::new();
        assert!(list.apply(Action::Add("Buy milk".into())));
        assert!(!list.apply(Action::Add("   ".into())));
        assert_eq!(list.len(), 1);
        let id = list.tasks()[0].id;
        assert!(list.apply(Action::Toggle(id)));
        assert!(list.get(id).unwrap().completed);
        assert!(list.apply(Action::Delete(id)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_toggle_add_delete_scenario() {
        let mut list = TaskList::new();
        let first = list.add("Buy milk").unwrap();
        assert_eq!(list.tasks()[0].text, "Buy milk");
        assert!(!list.tasks()[0].completed);

        list.toggle(first);
        assert!(list.get(first).unwrap().completed);

        list.add("Walk dog").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[1].text, "Walk dog");

        list.delete(first);
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].text, "Walk dog");
        assert!(!list.tasks()[0].completed);
    }
}
