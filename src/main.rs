//! timeline_tictactoe - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use timeline_tictactoe::cli::{Cli, Command};
use timeline_tictactoe::replay::{parse_move, replay};
use timeline_tictactoe::{DisplayOrder, GameConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, order } => run_play(config, order),
        Command::Replay {
            moves,
            jump,
            order,
            json,
        } => run_replay(moves, jump, order, json),
    }
}

/// Run the terminal UI, logging to a file so output does not corrupt the screen.
fn run_play(config_path: std::path::PathBuf, order: Option<DisplayOrder>) -> Result<()> {
    let mut config = GameConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    if let Some(order) = order {
        config = config.with_order(order);
    }

    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(config = %config_path.display(), "Starting timeline_tictactoe");
    timeline_tictactoe::tui::run(&config)
}

/// Replay moves and print the result to stdout; logs go to stderr.
#[instrument(skip(moves))]
fn run_replay(moves: Vec<String>, jump: Option<usize>, order: DisplayOrder, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let indices = moves
        .iter()
        .map(|m| parse_move(m))
        .collect::<Result<Vec<_>, _>>()?;

    let (_, report) = replay(&indices, jump, order)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
