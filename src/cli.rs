use clap::Parser;

use crate::cmd::Commands;

/// Single-screen to-do list for the terminal.
/// State is held in memory only; nothing is written to disk.
#[derive(Parser)]
#[command(name = "todo", version, about = "Single-screen to-do list TUI")]
pub struct Cli {
    /// Start in night mode instead of light mode.
    #[arg(long, global = true)]
    pub dark: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
