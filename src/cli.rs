//! Command-line interface for timeline_tictactoe.

use crate::games::tictactoe::DisplayOrder;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "timeline_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Initial move-list order (overrides the config file)
        #[arg(long, value_enum)]
        order: Option<DisplayOrder>,
    },

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Moves as board indices (0-8) or labels such as "center"
        #[arg(required = true, num_args = 1..)]
        moves: Vec<String>,

        /// Show the board at this history step afterwards
        #[arg(long)]
        jump: Option<usize>,

        /// Move-list order
        #[arg(long, value_enum, default_value_t = DisplayOrder::Ascending)]
        order: DisplayOrder,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
