//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task list, draft
//! input and theme, translates key events into store actions, and renders
//! the single to-do screen.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::store::{Action, TaskList};
use crate::tui::draft::Draft;
use crate::tui::theme::Mode;
use crate::tui::utils::centered_rect;

/// Which part of the screen owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Focus {
    Input,
    List,
}

/// Main application state for the terminal user interface.
///
/// Owns the task list, the draft input, the theme flag and the selection
/// cursor; every mutation goes through the store's action interface.
pub struct App {
    tasks: TaskList,
    draft: Draft,
    theme: Mode,
    focus: Focus,
    list_state: ListState,
    status_message: String,
    show_help: bool,
}

impl App {
    /// Create a new App instance, starting with an empty list.
    pub fn new(dark: bool) -> Self {
        App {
            tasks: TaskList::new(),
            draft: Draft::new(),
            theme: if dark { Mode::Dark } else { Mode::Light },
            focus: Focus::Input,
            list_state: ListState::default(),
            status_message: String::new(),
            show_help: false,
        }
    }

    /// Set a status message to display in the status bar.
    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// Id of the task under the selection cursor.
    fn selected_id(&self) -> Option<u64> {
        self.list_state
            .selected()
            .and_then(|idx| self.tasks.tasks().get(idx))
            .map(|t| t.id)
    }

    /// Keep the selection inside the list bounds after a mutation.
    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.list_state.select(None);
            return;
        }
        let last = self.tasks.len() - 1;
        match self.list_state.selected() {
            Some(idx) if idx > last => self.list_state.select(Some(last)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    /// Run a store action, then update selection and status feedback.
    fn dispatch(&mut self, action: Action) {
        // Capture the text for feedback before a delete removes it.
        let deleted_text = match action {
            Action::Delete(id) => self.tasks.get(id).map(|t| t.text.clone()),
            _ => None,
        };

        if self.tasks.apply(action.clone()) {
            match action {
                Action::Add(_) => {
                    self.draft.clear();
                    if let Some(task) = self.tasks.tasks().last() {
                        self.set_status_message(format!("Added \"{}\"", task.text));
                    }
                }
                Action::Toggle(id) => {
                    if let Some(task) = self.tasks.get(id) {
                        let msg = if task.completed {
                            format!("Completed \"{}\"", task.text)
                        } else {
                            format!("Reopened \"{}\"", task.text)
                        };
                        self.set_status_message(msg);
                    }
                }
                Action::Delete(_) => {
                    if let Some(text) = deleted_text {
                        self.set_status_message(format!("Deleted \"{}\"", text));
                    }
                }
            }
        }
        // Blank adds and unknown ids fall through silently.

        self.clamp_selection();
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.status_message.clear();

                if self.show_help {
                    self.handle_help_key(key.code);
                    return Ok(false);
                }

                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(true);
                }

                return Ok(match self.focus {
                    Focus::Input => self.handle_edit_key(key.code, key.modifiers),
                    Focus::List => self.handle_list_key(key.code, key.modifiers),
                });
            }
        }
        Ok(false)
    }

    /// Handle keyboard input while the help overlay is open.
    fn handle_help_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') | KeyCode::F(1) => {
                self.show_help = false;
            }
            _ => {}
        }
    }

    /// Handle a key while the draft input owns the keyboard.
    ///
    /// Returns true if the application should quit.
    fn handle_edit_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Enter => {
                if !self.draft.is_blank() {
                    self.dispatch(Action::Add(self.draft.text().to_string()));
                }
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.draft.insert_char(c);
            }
            KeyCode::Backspace => self.draft.backspace(),
            KeyCode::Delete => self.draft.delete(),
            KeyCode::Left => self.draft.move_left(),
            KeyCode::Right => self.draft.move_right(),
            KeyCode::Home => self.draft.move_home(),
            KeyCode::End => self.draft.move_end(),
            KeyCode::Esc | KeyCode::Tab | KeyCode::Down => {
                self.focus = Focus::List;
                self.clamp_selection();
            }
            _ => {}
        }
        false
    }

    /// Handle a key while the task list owns the keyboard.
    ///
    /// Returns true if the application should quit.
    fn handle_list_key(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                match self.list_state.selected() {
                    Some(selected) if selected > 0 => {
                        self.list_state.select(Some(selected - 1));
                    }
                    // Moving above the first row returns to the input line.
                    _ => self.focus = Focus::Input,
                }
            }
            KeyCode::Down => {
                if let Some(selected) = self.list_state.selected() {
                    if selected + 1 < self.tasks.len() {
                        self.list_state.select(Some(selected + 1));
                    }
                } else if !self.tasks.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Action::Toggle(id));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Action::Delete(id));
                }
            }
            KeyCode::Char('t') => {
                self.theme.toggle();
                self.set_status_message(format!(
                    "Switched to {}",
                    self.theme.label().to_lowercase()
                ));
            }
            KeyCode::Char('a') | KeyCode::Char('i') => {
                self.focus = Focus::Input;
            }
            KeyCode::Char('h') | KeyCode::F(1) => {
                self.show_help = true;
            }
            _ => {}
        }
        false
    }

    /// Render the title header with the theme mode indicator.
    fn render_header(&self, f: &mut Frame, area: Rect) {
        let palette = self.theme.palette();

        let header_text = vec![Line::from(vec![
            Span::styled("TO-DO LIST", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                self.theme.label(),
                Style::default()
                    .fg(palette.placeholder)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])];

        let header = Paragraph::new(header_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
            .style(Style::default().bg(palette.background).fg(palette.text))
            .alignment(Alignment::Center);

        f.render_widget(header, area);
    }

    /// Render the draft input line, with the cursor when it has focus.
    fn render_input(&self, f: &mut Frame, area: Rect) {
        let palette = self.theme.palette();

        let border_style = if self.focus == Focus::Input {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.border)
        };

        let input = if self.draft.text().is_empty() {
            Paragraph::new("Add a new task").style(
                Style::default()
                    .bg(palette.input_background)
                    .fg(palette.placeholder),
            )
        } else {
            Paragraph::new(self.draft.text()).style(
                Style::default()
                    .bg(palette.input_background)
                    .fg(palette.text),
            )
        };

        let input = input.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        f.render_widget(input, area);

        if self.focus == Focus::Input {
            let col = self
                .draft
                .cursor_column()
                .min(area.width.saturating_sub(2) as usize);
            f.set_cursor_position((area.x + col as u16 + 1, area.y + 1));
        }
    }

    /// Render one row per task: checkbox, label, and a delete affordance
    /// on the selected row.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let palette = self.theme.palette();
        let selected = self.list_state.selected();

        let items: Vec<ListItem> = self
            .tasks
            .tasks()
            .iter()
            .enumerate()
            .map(|(idx, task)| {
                let checkbox = if task.completed { "[x] " } else { "[ ] " };

                let label_style = if task.completed {
                    Style::default()
                        .fg(palette.completed)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(palette.text)
                };

                let mut spans = vec![
                    Span::styled(checkbox, Style::default().fg(palette.checkbox)),
                    Span::styled(task.text.clone(), label_style),
                ];

                if self.focus == Focus::List && selected == Some(idx) {
                    spans.push(Span::styled(
                        "  Delete",
                        Style::default()
                            .fg(palette.delete)
                            .add_modifier(Modifier::BOLD),
                    ));
                }

                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
                    .title(format!("Tasks ({})", self.tasks.len())),
            )
            .style(Style::default().bg(palette.background).fg(palette.text))
            .highlight_style(Style::default().bg(palette.accent).fg(Color::Black))
            .highlight_symbol("► ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    /// Render the key binding help overlay.
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let palette = self.theme.palette();

        let help_text = vec![
            Line::from(vec![Span::styled(
                "To-Do List Help",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Draft input:",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from("  Type          Edit the pending task text"),
            Line::from("  Enter         Add the task"),
            Line::from("  ←/→ Home/End  Move the cursor"),
            Line::from("  Esc/Tab/↓     Switch to the task list"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Task list:",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from("  ↑/↓           Move the selection"),
            Line::from("  Enter/Space   Toggle completion"),
            Line::from("  d/Delete      Delete the selected task"),
            Line::from("  a/i           Back to the draft input"),
            Line::from("  t             Switch light/night mode"),
            Line::from("  h/F1          Show this help"),
            Line::from("  q/Esc/Ctrl+C  Quit"),
        ];

        let area = centered_rect(60, 70, area);
        f.render_widget(Clear, area);

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent))
                    .title("Help - press Esc to return"),
            )
            .style(Style::default().bg(palette.background).fg(palette.text))
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }

    /// Render the status bar with feedback or context-appropriate hints.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let palette = self.theme.palette();

        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else if self.show_help {
            "Press Esc to return".to_string()
        } else {
            match self.focus {
                Focus::Input => {
                    "Type a task, Enter to add, Esc to browse the list".to_string()
                }
                Focus::List => {
                    "↑↓ select  Space toggle  d delete  a add  t theme  h help  q quit"
                        .to_string()
                }
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(palette.accent).fg(Color::Black))
            .alignment(Alignment::Left);

        f.render_widget(status, area);
    }

    /// Main render function for the single to-do screen.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title header
                Constraint::Length(3), // Draft input
                Constraint::Min(0),    // Task list
            ])
            .split(chunks[0]);

        self.render_header(f, body[0]);
        self.render_input(f, body[1]);
        self.render_task_list(f, body[2]);
        self.render_status_bar(f, chunks[1]);

        if self.show_help {
            self.render_help(f, chunks[0]);
        }
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none() -> KeyModifiers {
        KeyModifiers::empty()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_edit_key(KeyCode::Char(c), none());
        }
    }

    #[test]
    fn test_enter_adds_task_and_clears_draft() {
        let mut app = App::new(false);
        type_text(&mut app, "Buy milk");
        app.handle_edit_key(KeyCode::Enter, none());
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.tasks()[0].text, "Buy milk");
        assert!(!app.tasks.tasks()[0].completed);
        assert_eq!(app.draft.text(), "");
    }

    #[test]
    fn test_blank_enter_keeps_draft_and_list() {
        let mut app = App::new(false);
        type_text(&mut app, "   ");
        app.handle_edit_key(KeyCode::Enter, none());
        assert!(app.tasks.is_empty());
        assert_eq!(app.draft.text(), "   ");
    }

    #[test]
    fn test_space_toggles_selected_task() {
        let mut app = App::new(false);
        type_text(&mut app, "Buy milk");
        app.handle_edit_key(KeyCode::Enter, none());
        app.handle_edit_key(KeyCode::Esc, none());
        app.handle_list_key(KeyCode::Char(' '), none());
        assert!(app.tasks.tasks()[0].completed);
        app.handle_list_key(KeyCode::Char(' '), none());
        assert!(!app.tasks.tasks()[0].completed);
    }

    #[test]
    fn test_delete_key_removes_selected_task() {
        let mut app = App::new(false);
        type_text(&mut app, "one");
        app.handle_edit_key(KeyCode::Enter, none());
        type_text(&mut app, "two");
        app.handle_edit_key(KeyCode::Enter, none());
        app.handle_edit_key(KeyCode::Esc, none());
        app.handle_list_key(KeyCode::Char('d'), none());
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.tasks()[0].text, "two");
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_deleting_last_row_moves_selection_up() {
        let mut app = App::new(false);
        type_text(&mut app, "one");
        app.handle_edit_key(KeyCode::Enter, none());
        type_text(&mut app, "two");
        app.handle_edit_key(KeyCode::Enter, none());
        app.handle_edit_key(KeyCode::Esc, none());
        app.handle_list_key(KeyCode::Down, none());
        app.handle_list_key(KeyCode::Char('d'), none());
        assert_eq!(app.list_state.selected(), Some(0));
        app.handle_list_key(KeyCode::Char('d'), none());
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_theme_key_flips_mode() {
        let mut app = App::new(false);
        assert!(!app.theme.is_dark());
        app.handle_list_key(KeyCode::Char('t'), none());
        assert!(app.theme.is_dark());
        app.handle_list_key(KeyCode::Char('t'), none());
        assert!(!app.theme.is_dark());
    }

    #[test]
    fn test_dark_flag_starts_in_night_mode() {
        let app = App::new(true);
        assert!(app.theme.is_dark());
    }

    #[test]
    fn test_quit_keys_only_apply_to_the_list() {
        let mut app = App::new(false);
        assert!(app.handle_list_key(KeyCode::Char('q'), none()));
        assert!(app.handle_list_key(KeyCode::Esc, none()));
        // In edit mode 'q' is text and Esc just moves focus.
        app.focus = Focus::Input;
        assert!(!app.handle_edit_key(KeyCode::Char('q'), none()));
        assert_eq!(app.draft.text(), "q");
        assert!(!app.handle_edit_key(KeyCode::Esc, none()));
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_up_from_first_row_returns_to_input() {
        let mut app = App::new(false);
        type_text(&mut app, "one");
        app.handle_edit_key(KeyCode::Enter, none());
        app.handle_edit_key(KeyCode::Down, none());
        assert_eq!(app.focus, Focus::List);
        app.handle_list_key(KeyCode::Up, none());
        assert_eq!(app.focus, Focus::Input);
    }
}
