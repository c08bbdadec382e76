//! Single-cell delta invariant: each move writes exactly one empty square.

use super::super::{GameEngine, Snapshot, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// That square was empty before, is occupied after, and is the square named
/// by the later snapshot's last-move location. Squares are never overwritten.
pub struct SingleCellDeltaInvariant;

impl SingleCellDeltaInvariant {
    fn step_holds(before: &Snapshot, after: &Snapshot) -> bool {
        let changed: Vec<usize> = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .enumerate()
            .filter(|(_, (b, a))| b != a)
            .map(|(index, _)| index)
            .collect();

        let [index] = changed.as_slice() else {
            return false;
        };
        let Some(pos) = after.last_move().and_then(|loc| loc.position()) else {
            return false;
        };

        pos.to_index() == *index
            && before.board().get(pos) == Square::Empty
            && after.board().get(pos) != Square::Empty
    }
}

impl Invariant<GameEngine> for SingleCellDeltaInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .windows(2)
            .all(|pair| Self::step_holds(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark at its last-move location"
    }
}
