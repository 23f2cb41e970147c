//! Ordered pegs: a disk never rests on a lighter disk.

use super::Invariant;
use crate::GameState;

/// Invariant: every peg is strictly decreasing from bottom to top.
pub struct OrderedPegsInvariant;

impl Invariant<GameState> for OrderedPegsInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .pegs()
            .iter()
            .all(|peg| peg.disks().windows(2).all(|pair| pair[0] > pair[1]))
    }

    fn description() -> &'static str {
        "Disks on every peg are strictly decreasing from bottom to top"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Disk, DiskCount, PegId};

    #[test]
    fn test_new_game_holds() {
        let state = GameState::new(DiskCount::new(8).unwrap());
        assert!(OrderedPegsInvariant::holds(&state));
    }

    #[test]
    fn test_larger_on_smaller_violates() {
        let mut state = GameState::new(DiskCount::default());
        let small = state.pegs[PegId::X.index()].pop().unwrap();
        let large = state.pegs[PegId::X.index()].pop().unwrap();
        state.pegs[PegId::Y.index()].push(small).unwrap();
        state.pegs[PegId::Y.index()].push(large).unwrap();
        assert!(!OrderedPegsInvariant::holds(&state));
    }

    #[test]
    fn test_equal_weights_violate() {
        let mut state = GameState::new(DiskCount::default());
        state.pegs[PegId::Z.index()].push(Disk::new(2)).unwrap();
        state.pegs[PegId::Z.index()].push(Disk::new(2)).unwrap();
        assert!(!OrderedPegsInvariant::holds(&state));
    }
}
