//! Application state and key handling.

use crate::games::tictactoe::{DisplayOrder, GameEngine, MoveOutcome, Position};
use crossterm::event::KeyCode;
use tracing::{debug, instrument, warn};

use super::input::move_cursor;

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 grid.
    Board,
    /// The move list.
    Moves,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the list cursor, in display order.
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(order: DisplayOrder) -> Self {
        Self {
            engine: GameEngine::with_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the selected move-list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the last feedback message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.message = None;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.switch_focus(),
            KeyCode::Char('o') => self.toggle_order(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = c.to_digit(10).map_or(usize::MAX, |d| d as usize);
                self.place(index);
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.to_index()),
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let len = self.engine.history().len();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(len - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selected(),
            _ => {}
        }
    }

    fn place(&mut self, index: usize) {
        match self.engine.apply_index(index) {
            MoveOutcome::Applied { location, .. } => {
                if let Some(pos) = location.position() {
                    self.cursor = pos;
                }
                self.select_current();
            }
            MoveOutcome::Rejected(reason) => {
                debug!(%reason, "Move ignored");
                self.message = Some(reason.to_string());
            }
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(entry) = self.engine.move_list().into_iter().nth(self.selected) else {
            return;
        };
        if let Err(e) = self.engine.jump_to(entry.step) {
            warn!(error = %e, "Jump failed");
            self.message = Some(e.to_string());
        }
    }

    fn toggle_order(&mut self) {
        self.engine.toggle_order();
        // Keep the same entry selected after the list flips.
        let last = self.engine.history().len() - 1;
        self.selected = last - self.selected.min(last);
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.select_current();
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
    }

    /// Points the list cursor at the current step.
    fn select_current(&mut self) {
        self.selected = self
            .engine
            .move_list()
            .iter()
            .position(|entry| entry.is_current)
            .unwrap_or(0);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DisplayOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_enter_places_mark_at_cursor() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

        let board = app.engine().current_snapshot().board();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(app.engine().status_text(), "Next player: O");
    }

    #[test]
    fn test_digit_keys_place_by_index() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Char('8'), KeyCode::Char('8')]);

        assert_eq!(app.engine().history().len(), 2);
        assert_eq!(app.cursor(), Position::BottomRight);
        assert_eq!(app.message(), Some("Square Bottom-right is already occupied"));

        app.handle_key(KeyCode::Char('9'));
        assert_eq!(app.message(), Some("Index 9 is not a square (expected 0-8)"));
    }

    #[test]
    fn test_move_list_jump() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Char('0'), KeyCode::Char('4'), KeyCode::Tab]);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.selected(), 2);

        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.engine().current_step(), 0);
        assert_eq!(app.engine().history().len(), 3);
    }

    #[test]
    fn test_toggle_keeps_selected_entry() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Char('0'), KeyCode::Char('4'), KeyCode::Tab, KeyCode::Up]);
        assert_eq!(app.selected(), 1);

        app.handle_key(KeyCode::Char('o'));
        assert_eq!(app.engine().display_order(), DisplayOrder::Descending);
        assert_eq!(app.selected(), 1);

        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.engine().current_step(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
