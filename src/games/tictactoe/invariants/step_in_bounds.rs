//! Step bounds invariant: the cursor always points into history.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `0 <= current_step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameEngine> for StepInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.current_step < engine.history.len()
    }

    fn description() -> &'static str {
        "Current step indexes an existing snapshot"
    }
}
