//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every operation.
//! They are testable independently and document what the engine guarantees.

use super::engine::GameEngine;
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        check_one::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_mark;
pub mod genesis;
pub mod single_cell_delta;
pub mod step_in_bounds;

pub use alternating_mark::AlternatingMarkInvariant;
pub use genesis::GenesisInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    GenesisInvariant,
    StepInBoundsInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarkInvariant,
);

/// Checks [`EngineInvariants`] in debug builds and panics on violation.
pub(crate) fn assert_invariants(engine: &GameEngine) {
    if cfg!(debug_assertions) {
        if let Err(violations) = EngineInvariants::check_all(engine) {
            for violation in &violations {
                error!(%violation, "Engine invariant violated");
            }
            panic!("engine invariants violated: {violations:?}");
        }
    }
}
