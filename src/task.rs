//! Task data structure.
//!
//! This module defines the core `Task` struct that represents a single
//! to-do item.

/// A single to-do item.
///
/// The identifier is assigned by the list store at creation and never
/// changes; after that, only the completion flag is mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}
