//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, columns left to right, then the `\` and `/`
/// diagonals. A legal board never has two winners, so the order only
/// fixes which line is reported for hand-built boards.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The winning player.
    pub player: Player,
    /// The three positions forming the line.
    pub line: [Position; 3],
}

impl Win {
    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`LINES`] whose three squares hold the same
/// mark, or `None`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a))
            .then_some(Win { player, line })
    })
}

#[cfg(test)]
mod tests {
    use super::super::super::Square;
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for (pos, player) in marks {
            board.set(*pos, Square::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(&line.map(|pos| (pos, player)));
                assert_eq!(check_winner(&board), Some(Win { player, line }));
            }
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.player, Player::O);
        assert!(win.contains(Position::Center));
        assert!(!win.contains(Position::TopLeft));
    }

    #[test]
    fn test_no_winner_incomplete_or_mixed() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::O),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_take_priority_over_columns() {
        // Not reachable in play: X owns both the top row and the left column.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(check_winner(&board).map(|w| w.line), Some(LINES[0]));
    }
}
