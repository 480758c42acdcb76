//! # todo - Single-Screen To-Do List TUI
//!
//! A minimal terminal to-do list: add tasks, tick them off, delete them, and
//! flip between light and night mode. Everything happens on one screen.
//!
//! ## Key Features
//!
//! - **One Screen**: a draft input line, the task list, and a status bar
//! - **Keyboard Driven**: type to draft, Enter to add, Space to toggle,
//!   `d` to delete, `t` to switch the theme
//! - **Light & Night Mode**: two fixed palettes, switched at any time
//! - **Memory Only**: state lives for the lifetime of the screen; nothing is
//!   written to disk
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the to-do screen
//! todo
//!
//! # Start in night mode
//! todo --dark
//!
//! # Generate shell completions
//! todo completions zsh
//! ```
//!
//! ## Installation
//!
//! ```bash
//! git clone <repository-url>
//! cd todo_list
//! cargo install --path .
//! ```
//!
//! Press `h` on the task list for the full key binding reference.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod draft;
    pub mod run;
    pub mod theme;
    pub mod utils;
}

use cli::Cli;
use cmd::*;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        Some(Commands::Ui) | None => cmd_ui(cli.dark),
    }
}
