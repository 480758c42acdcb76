//! Command implementations for the CLI interface.
//!
//! The binary has two commands: the interactive to-do screen (the default
//! when no subcommand is given) and shell completion generation.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive to-do screen (the default).
    Ui,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal user interface.
pub fn cmd_ui(dark: bool) {
    if let Err(e) = run_tui(dark) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
