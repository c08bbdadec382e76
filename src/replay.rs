//! Non-interactive replay of a move sequence.
//!
//! Drives a [`GameEngine`] the same way the terminal UI does and summarizes
//! the result for printing.

use crate::games::tictactoe::{
    DisplayOrder, EngineError, GameEngine, MoveEntry, MoveOutcome, Position,
};
use derive_more::{Display, Error, From};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Error raised while replaying.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReplayError {
    /// A move was neither an index nor a position label.
    #[display("Unrecognized move {_0:?}: expected 0-8 or a label like \"center\"")]
    #[from(skip)]
    UnknownMove(#[error(not(source))] String),

    /// The final jump was out of range.
    #[display("{_0}")]
    Jump(EngineError),
}

/// A move that was ignored during replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredMove {
    /// Position of the move in the input list.
    pub input: usize,
    /// Why the engine ignored it.
    pub reason: String,
}

/// Summary of a replayed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Board rows, `X|O|2` style.
    pub board: Vec<String>,
    /// Status line.
    pub status: String,
    /// Indices of the winning line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Step shown.
    pub current_step: usize,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Moves the engine ignored.
    pub ignored: Vec<IgnoredMove>,
}

impl ReplayReport {
    /// Builds a report for the engine's current state.
    pub fn from_engine(engine: &GameEngine, ignored: Vec<IgnoredMove>) -> Self {
        Self {
            board: engine
                .current_snapshot()
                .board()
                .display()
                .lines()
                .filter(|line| !line.starts_with('-'))
                .map(str::to_string)
                .collect(),
            status: engine.status_text(),
            winning_line: engine.winner().map(|win| win.line.map(Position::to_index)),
            current_step: engine.current_step(),
            moves: engine.move_list(),
            ignored,
        }
    }

    /// Plain-text rendering.
    pub fn to_text(&self) -> String {
        let mut out = self.board.join("\n");
        out.push_str("\n\n");
        out.push_str(&self.status);
        out.push('\n');
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("{marker} {}\n", entry.description));
        }
        for ignored in &self.ignored {
            out.push_str(&format!("ignored move {}: {}\n", ignored.input + 1, ignored.reason));
        }
        out
    }
}

/// Parses a move given as a board index or a position label.
///
/// Numbers are passed through unchecked so the engine can ignore
/// out-of-range indices the same way it ignores any other bad click.
pub fn parse_move(s: &str) -> Result<usize, ReplayError> {
    let s = s.trim();
    if let Ok(index) = s.parse::<usize>() {
        return Ok(index);
    }
    Position::from_label(s)
        .map(Position::to_index)
        .ok_or_else(|| ReplayError::UnknownMove(s.to_string()))
}

/// Applies `moves` to a fresh game, then optionally jumps to `jump`.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(
    moves: &[usize],
    jump: Option<usize>,
    order: DisplayOrder,
) -> Result<(GameEngine, ReplayReport), ReplayError> {
    let mut engine = GameEngine::with_order(order);
    let mut ignored = Vec::new();

    for (input, index) in moves.iter().enumerate() {
        if let MoveOutcome::Rejected(reason) = engine.apply_index(*index) {
            warn!(input, index, %reason, "Move ignored");
            ignored.push(IgnoredMove {
                input,
                reason: reason.to_string(),
            });
        }
    }

    if let Some(step) = jump {
        engine.jump_to(step)?;
    }

    info!(status = %engine.status_text(), ignored = ignored.len(), "Replay finished");
    let report = ReplayReport::from_engine(&engine, ignored);
    Ok((engine, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_accepts_indices_and_labels() {
        assert_eq!(parse_move("4"), Ok(4));
        assert_eq!(parse_move("12"), Ok(12));
        assert_eq!(parse_move("top-right"), Ok(2));
        assert_eq!(parse_move(" Bottom-Left "), Ok(6));
        assert!(matches!(parse_move("nowhere"), Err(ReplayError::UnknownMove(_))));
    }

    #[test]
    fn test_replay_reports_winner() {
        let (engine, report) = replay(&[0, 3, 1, 4, 2], None, DisplayOrder::Ascending).unwrap();
        assert_eq!(engine.history().len(), 6);
        assert_eq!(report.status, "Winner: X");
        assert_eq!(report.winning_line, Some([0, 1, 2]));
        assert_eq!(report.board, vec!["X|X|X", "O|O|5", "6|7|8"]);
        assert!(report.ignored.is_empty());
    }

    #[test]
    fn test_replay_collects_ignored_moves() {
        let (_, report) = replay(&[4, 4, 9], None, DisplayOrder::Ascending).unwrap();
        assert_eq!(report.current_step, 1);
        assert_eq!(
            report.ignored,
            vec![
                IgnoredMove {
                    input: 1,
                    reason: "Square Center is already occupied".to_string(),
                },
                IgnoredMove {
                    input: 2,
                    reason: "Index 9 is not a square (expected 0-8)".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_replay_jump_and_text() {
        let (_, report) = replay(&[0, 4], Some(1), DisplayOrder::Descending).unwrap();
        assert_eq!(report.status, "Next player: O");
        assert_eq!(
            report.to_text(),
            "X|1|2\n3|4|5\n6|7|8\n\nNext player: O\n  Go to move #2 (1, 1)\n> Go to move #1 (0, 0)\n  Go to game start\n"
        );
    }

    #[test]
    fn test_replay_rejects_bad_jump() {
        let err = replay(&[0], Some(3), DisplayOrder::Ascending).unwrap_err();
        assert_eq!(err, ReplayError::Jump(EngineError::StepOutOfRange { step: 3, len: 2 }));
    }
}
