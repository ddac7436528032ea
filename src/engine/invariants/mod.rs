//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. They are testable independently and serve as documentation
//! of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Enables composition of multiple invariants into a single verification
/// step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or `Err` with the list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod terminal_exclusive;
pub mod winning_line_valid;

pub use alternating_turn::AlternatingTurnInvariant;
pub use terminal_exclusive::TerminalExclusiveInvariant;
pub use winning_line_valid::WinningLineValidInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    AlternatingTurnInvariant,
    TerminalExclusiveInvariant,
    WinningLineValidInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameEngine;

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let engine = GameEngine::new();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let engine = GameEngine::replay(&[0, 4, 2]);
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_in_terminal_states() {
        let won = GameEngine::replay(&[0, 3, 1, 4, 2]);
        assert!(EngineInvariants::check_all(&won).is_ok());

        let drawn = GameEngine::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(EngineInvariants::check_all(&drawn).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new();

        type TwoInvariants = (AlternatingTurnInvariant, TerminalExclusiveInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
