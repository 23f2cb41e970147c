//! First-class invariants for the Tower of Hanoi.
//!
//! Invariants are logical properties that must hold for every reachable game
//! state. The puzzle checks them after each release in debug builds, and the
//! tests check them over random pointer sequences.

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
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
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

pub mod disk_conservation;
pub mod ordered_pegs;

pub use disk_conservation::DiskConservationInvariant;
pub use ordered_pegs::OrderedPegsInvariant;

/// All Tower of Hanoi invariants as a composable set.
pub type HanoiInvariants = (DiskConservationInvariant, OrderedPegsInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Disk, DiskCount, GameState, PegId};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let state = GameState::new(DiskCount::default());
        assert!(HanoiInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut state = GameState::new(DiskCount::default());
        // Duplicate the top disk onto Z in the wrong order.
        state.pegs[PegId::Z.index()].push(Disk::new(1)).unwrap();
        state.pegs[PegId::Z.index()].push(Disk::new(2)).unwrap();

        let violations = HanoiInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
