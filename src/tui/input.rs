//! Cursor movement for keyboard navigation.

use crate::games::tictactoe::{Location, Position};
use crossterm::event::KeyCode;

/// Moves the board cursor one square in the arrow's direction.
///
/// The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let Location { col, row } = cursor.location();

    let target = match key {
        KeyCode::Left => Location { col: col.saturating_sub(1), row },
        KeyCode::Right => Location { col: (col + 1).min(2), row },
        KeyCode::Up => Location { col, row: row.saturating_sub(1) },
        KeyCode::Down => Location { col, row: (row + 1).min(2) },
        _ => return cursor,
    };

    target.position().unwrap_or(cursor)
}
