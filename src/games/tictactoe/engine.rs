//! History-tracking game engine.
//!
//! The engine keeps every board the game has passed through. Moves append a
//! snapshot after the one currently shown, discarding any snapshots past it.
//! Jumping only moves the cursor. Whose turn it is follows from the cursor's
//! parity, so it can never drift out of sync with the board.

use super::action::{EngineError, MoveOutcome, RejectReason};
use super::invariants;
use super::rules::{self, Win};
use super::snapshot::{DisplayOrder, MoveEntry, Snapshot};
use super::{Player, Position};
use tracing::{debug, instrument};

/// Tic-tac-toe game with full move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current_step: usize,
    order: DisplayOrder,
}

impl GameEngine {
    /// Creates a new game with the move list in ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(DisplayOrder::Ascending)
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_order(order: DisplayOrder) -> Self {
        Self {
            history: vec![Snapshot::genesis()],
            current_step: 0,
            order,
        }
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Ignored when the shown board already has a winner or `pos` is taken.
    /// Otherwise every snapshot after the current one is dropped, the new
    /// board is appended and becomes current.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let board = self.current_snapshot().board();

        if let Some(win) = rules::check_winner(board) {
            debug!(winner = %win.player, "Move ignored, game is over");
            return MoveOutcome::Rejected(RejectReason::GameOver(win.player));
        }
        if !board.is_empty(pos) {
            debug!(position = %pos, "Move ignored, square occupied");
            return MoveOutcome::Rejected(RejectReason::SquareOccupied(pos));
        }

        let player = self.next_player();
        let location = pos.location();
        let snapshot = Snapshot::after_move(board.with_mark(pos, player), location);

        self.history.truncate(self.current_step + 1);
        self.history.push(snapshot);
        self.current_step = self.history.len() - 1;

        debug!(%player, %location, step = self.current_step, "Move applied");
        invariants::assert_invariants(self);

        MoveOutcome::Applied {
            player,
            step: self.current_step,
            location,
        }
    }

    /// Places a mark by raw board index (0-8).
    ///
    /// Indices past 8 are ignored like any other rejected move.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.apply_move(pos),
            None => {
                debug!(index, "Move ignored, index out of bounds");
                MoveOutcome::Rejected(RejectReason::OutOfBounds(index))
            }
        }
    }

    /// Shows the board as it was at `step`. History is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] if `step` is not a history
    /// index. The current step is unchanged in that case.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        if step >= self.history.len() {
            return Err(EngineError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.current_step = step;
        debug!(step, "Jumped");
        Ok(())
    }

    /// Flips the order of the move list.
    #[instrument(skip(self), fields(order = %self.order))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }

    /// Returns the snapshot currently shown.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// Returns every snapshot, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Returns the index of the snapshot currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the move-list order.
    pub fn display_order(&self) -> DisplayOrder {
        self.order
    }

    /// Returns the player to move at the current step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Returns the winner of the shown board and the line to highlight.
    pub fn winner(&self) -> Option<Win> {
        rules::check_winner(self.current_snapshot().board())
    }

    /// Returns true if the shown board is full without a winner.
    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && rules::is_draw(self.current_snapshot().board())
    }

    /// Status line for the shown board.
    ///
    /// `"Winner: X"`, `"Draw"` or `"Next player: O"`.
    pub fn status_text(&self) -> String {
        let board = self.current_snapshot().board();
        if let Some(win) = rules::check_winner(board) {
            format!("Winner: {}", win.player)
        } else if rules::is_draw(board) {
            "Draw".to_string()
        } else {
            format!("Next player: {}", self.next_player())
        }
    }

    /// Move-list entries in display order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let entries = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                description: MoveEntry::describe(step, snapshot),
                is_current: step == self.current_step,
            });

        match self.order {
            DisplayOrder::Ascending => entries.collect(),
            DisplayOrder::Descending => entries.rev().collect(),
        }
    }

    /// Move-list descriptions in display order.
    pub fn move_descriptions(&self) -> Vec<String> {
        self.move_list().into_iter().map(|entry| entry.description).collect()
    }

    /// Label for the control that flips the move-list order.
    pub fn order_toggle_label(&self) -> String {
        format!("Sort moves in {} order", self.order.toggled())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Location, Square};

    fn play(indices: &[usize]) -> GameEngine {
        let mut engine = GameEngine::new();
        for index in indices {
            assert!(engine.apply_index(*index).is_applied(), "move {index} rejected");
        }
        engine
    }

    #[test]
    fn test_new_game_starts_empty() {
        let engine = GameEngine::new();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.current_step(), 0);
        assert_eq!(engine.current_snapshot().last_move(), None);
        assert_eq!(engine.status_text(), "Next player: X");
        assert_eq!(engine.move_descriptions(), vec!["Go to game start"]);
    }

    #[test]
    fn test_apply_move_records_mark_and_location() {
        let mut engine = GameEngine::new();
        let outcome = engine.apply_move(Position::MiddleRight);

        assert_eq!(
            outcome,
            MoveOutcome::Applied {
                player: Player::X,
                step: 1,
                location: Location { col: 2, row: 1 },
            }
        );
        assert_eq!(
            engine.current_snapshot().board().get(Position::MiddleRight),
            Square::Occupied(Player::X)
        );
        assert_eq!(engine.next_player(), Player::O);
        assert_eq!(engine.status_text(), "Next player: O");
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut engine = play(&[4]);
        let before = engine.clone();

        let outcome = engine.apply_move(Position::Center);

        assert_eq!(
            outcome,
            MoveOutcome::Rejected(RejectReason::SquareOccupied(Position::Center))
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let mut engine = play(&[0, 3, 1, 4, 2]);
        let before = engine.clone();

        assert_eq!(
            engine.apply_move(Position::BottomRight),
            MoveOutcome::Rejected(RejectReason::GameOver(Player::X))
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_out_of_bounds_index_is_ignored() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.apply_index(9),
            MoveOutcome::Rejected(RejectReason::OutOfBounds(9))
        );
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_jump_to_keeps_history() {
        let mut engine = play(&[0, 4, 8]);
        engine.jump_to(1).unwrap();

        assert_eq!(engine.current_step(), 1);
        assert_eq!(engine.history().len(), 4);
        assert_eq!(engine.next_player(), Player::O);
        assert_eq!(engine.current_snapshot().board().occupied(), 1);
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut engine = play(&[0]);
        assert_eq!(
            engine.jump_to(2),
            Err(EngineError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(engine.current_step(), 1);
    }

    #[test]
    fn test_move_after_jump_truncates_future() {
        let mut engine = play(&[0, 4, 8]);
        engine.jump_to(1).unwrap();

        let outcome = engine.apply_move(Position::TopRight);

        assert!(outcome.is_applied());
        assert_eq!(engine.history().len(), 3);
        assert_eq!(engine.current_step(), 2);
        let board = engine.current_snapshot().board();
        assert_eq!(board.get(Position::TopRight), Square::Occupied(Player::O));
        assert!(board.is_empty(Position::Center));
    }

    #[test]
    fn test_jump_back_from_win_allows_play() {
        let mut engine = play(&[0, 3, 1, 4, 2]);
        engine.jump_to(4).unwrap();

        assert_eq!(engine.winner(), None);
        assert!(engine.apply_move(Position::BottomRight).is_applied());
        assert_eq!(engine.history().len(), 6);
    }

    #[test]
    fn test_move_list_marks_current_entry() {
        let mut engine = play(&[0, 4]);
        engine.jump_to(1).unwrap();

        let current: Vec<_> = engine
            .move_list()
            .into_iter()
            .filter(|entry| entry.is_current)
            .map(|entry| entry.step)
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_descending_order_reverses_entries() {
        let mut engine = play(&[0, 4]);
        engine.toggle_order();

        assert_eq!(engine.display_order(), DisplayOrder::Descending);
        assert_eq!(
            engine.move_descriptions(),
            vec![
                "Go to move #2 (1, 1)",
                "Go to move #1 (0, 0)",
                "Go to game start",
            ]
        );
        assert_eq!(engine.order_toggle_label(), "Sort moves in ascending order");
    }

    #[test]
    fn test_toggle_order_leaves_game_alone() {
        let mut engine = play(&[0, 4]);
        let history = engine.history().to_vec();
        engine.toggle_order();
        assert_eq!(engine.history(), history.as_slice());
        assert_eq!(engine.current_step(), 2);
    }

    #[test]
    fn test_with_order_sets_initial_order() {
        let engine = GameEngine::with_order(DisplayOrder::Descending);
        assert_eq!(engine.display_order(), DisplayOrder::Descending);
        assert_eq!(engine.order_toggle_label(), "Sort moves in ascending order");
        assert_eq!(GameEngine::default().order_toggle_label(), "Sort moves in descending order");
    }
}
