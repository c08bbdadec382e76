//! Results of engine operations.
//!
//! Clicking an occupied square or playing on after a win is not an error.
//! The engine ignores those moves and says why through [`MoveOutcome`].

use super::{Location, Player, Position};
use serde::{Deserialize, Serialize};

/// What happened to a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed and a snapshot appended.
    Applied {
        /// Player whose mark was placed.
        player: Player,
        /// Step index of the new snapshot.
        step: usize,
        /// Where the mark went.
        location: Location,
    },
    /// Nothing changed.
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// The square already holds a mark.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The shown board already has a winner.
    #[display("Game already won by {_0}")]
    GameOver(Player),

    /// The index does not name a square.
    #[display("Index {_0} is not a square (expected 0-8)")]
    OutOfBounds(usize),
}

/// Errors reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// `jump_to` was given a step past the end of history.
    #[display("Step {step} is out of range (history has {len} snapshots)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
