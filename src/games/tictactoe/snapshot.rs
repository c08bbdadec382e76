//! History snapshots and move-list presentation types.

use super::position::Location;
use super::types::Board;
use serde::{Deserialize, Serialize};

/// One historical board state.
///
/// `last_move` is `None` only for the initial, empty snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Location>,
}

impl Snapshot {
    /// The empty board every game starts from.
    pub fn genesis() -> Self {
        Self::default()
    }

    pub(super) fn after_move(board: Board, location: Location) -> Self {
        Self {
            board,
            last_move: Some(location),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Location of the move that produced this snapshot.
    pub fn last_move(&self) -> Option<Location> {
        self.last_move
    }
}

/// Order in which the move list is presented.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisplayOrder {
    /// Chronological.
    #[default]
    Ascending,
    /// Reverse chronological.
    Descending,
}

impl DisplayOrder {
    /// Returns the other order.
    pub fn toggled(self) -> Self {
        match self {
            DisplayOrder::Ascending => DisplayOrder::Descending,
            DisplayOrder::Descending => DisplayOrder::Ascending,
        }
    }
}

/// A single row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// "Go to game start" or "Go to move #n (col, row)".
    pub description: String,
    /// Whether this is the step currently shown.
    pub is_current: bool,
}

impl MoveEntry {
    /// Describes history step `step`, produced by `snapshot`.
    pub fn describe(step: usize, snapshot: &Snapshot) -> String {
        match snapshot.last_move() {
            Some(location) if step > 0 => format!("Go to move #{step} {location}"),
            _ => "Go to game start".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        let order = DisplayOrder::default();
        assert_eq!(order, DisplayOrder::Ascending);
        assert_eq!(order.toggled(), DisplayOrder::Descending);
        assert_eq!(order.toggled().toggled(), order);
    }

    #[test]
    fn test_order_display_matches_config_spelling() {
        assert_eq!(DisplayOrder::Descending.to_string(), "descending");
        let parsed: DisplayOrder = serde_json::from_str("\"ascending\"").unwrap();
        assert_eq!(parsed, DisplayOrder::Ascending);
    }

    #[test]
    fn test_describe() {
        assert_eq!(MoveEntry::describe(0, &Snapshot::genesis()), "Go to game start");
        let snapshot = Snapshot::after_move(Board::new(), Location { col: 2, row: 1 });
        assert_eq!(MoveEntry::describe(3, &snapshot), "Go to move #3 (2, 1)");
    }
}
