//! Tic-tac-toe with move history and time-travel.
//!
//! [`GameEngine`] owns the history; [`rules`] holds the pure win and draw
//! checks it shares with [`invariants`].

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{EngineError, MoveOutcome, RejectReason};
pub use engine::GameEngine;
pub use position::{Location, Position};
pub use rules::{Win, check_winner, is_draw};
pub use snapshot::{DisplayOrder, MoveEntry, Snapshot};
pub use types::{Board, Player, Square};
