//! Alternating mark invariant: X writes odd snapshots, O writes even ones.

use super::super::{GameEngine, Player, Square};
use super::Invariant;

/// Invariant: the mark added by snapshot `n` belongs to `Player::for_step(n - 1)`.
///
/// The player is derived from the step, so this ties the marks on the board
/// back to the turn order shown to the user.
pub struct AlternatingMarkInvariant;

impl Invariant<GameEngine> for AlternatingMarkInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().iter().enumerate().skip(1).all(|(step, snapshot)| {
            let expected = Square::Occupied(Player::for_step(step - 1));
            snapshot
                .last_move()
                .and_then(|loc| loc.position())
                .is_some_and(|pos| snapshot.board().get(pos) == expected)
        })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
