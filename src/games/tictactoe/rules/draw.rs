//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks for a drawn board: every square is occupied.
///
/// This does not look for a winner. A full board with a completed line is a
/// win, so callers check [`check_winner`](super::check_winner) first.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
}
