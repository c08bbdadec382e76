//! Tic-tac-toe with move history, time-travel and a terminal UI.
//!
//! # Architecture
//!
//! - **Games**: [`GameEngine`] keeps every board the game has passed
//!   through. Moves branch from the board currently shown, jumps move
//!   through history, and whose turn it is follows from the step number.
//! - **Replay**: non-interactive driver used by the `replay` command.
//! - **TUI**: ratatui front end reading only derived engine state.
//! - **Config**: TOML settings for the front end.
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{GameEngine, Position};
//!
//! let mut game = GameEngine::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//! assert_eq!(game.status_text(), "Next player: X");
//!
//! game.jump_to(1).unwrap();
//! assert_eq!(game.status_text(), "Next player: O");
//! assert_eq!(game.move_descriptions()[2], "Go to move #2 (0, 0)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod games;
pub mod replay;
pub mod tui;

// Crate-level exports - Config
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Replay
pub use replay::{ReplayError, ReplayReport};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, DisplayOrder, EngineError, GameEngine, Location, MoveEntry, MoveOutcome, Player,
    Position, RejectReason, Snapshot, Square, Win, check_winner, is_draw,
};
