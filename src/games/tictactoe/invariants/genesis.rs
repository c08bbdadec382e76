//! Genesis invariant: history starts from the empty board.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: the first snapshot is the empty board with no last move.
pub struct GenesisInvariant;

impl Invariant<GameEngine> for GenesisInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .first()
            .is_some_and(|first| *first.board() == Board::new() && first.last_move().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board and no last move"
    }
}
