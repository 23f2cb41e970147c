//! Disk conservation: no disk is created, lost or duplicated.

use super::Invariant;
use crate::{GameState, Phase};

/// Invariant: the pegs plus the disk in hand hold `1..=N` exactly once each.
pub struct DiskConservationInvariant;

impl Invariant<GameState> for DiskConservationInvariant {
    fn holds(state: &GameState) -> bool {
        let mut weights: Vec<u8> = state
            .pegs()
            .iter()
            .flat_map(|peg| peg.disks().iter().map(|disk| disk.weight()))
            .collect();

        if let Phase::Holding { disk, .. } = state.phase() {
            weights.push(disk.weight());
        }

        weights.sort_unstable();
        weights.into_iter().eq(1..=state.disk_count().get())
    }

    fn description() -> &'static str {
        "Every disk from 1 to N is present exactly once"
    }
}
