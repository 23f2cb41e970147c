//! Core domain types: disks, disk counts and peg identifiers.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A puzzle disk, identified only by its weight.
///
/// Weight 1 is the smallest disk. Disks are plain values: two disks with the
/// same weight are the same disk.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("disk {_0}")]
pub struct Disk(u8);

impl Disk {
    /// Creates a disk of the given weight.
    pub const fn new(weight: u8) -> Self {
        Self(weight)
    }

    /// Returns the disk's weight.
    pub const fn weight(self) -> u8 {
        self.0
    }
}

/// Number of disks in a game, restricted to the supported range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
#[display("{_0}")]
pub struct DiskCount(u8);

impl DiskCount {
    /// Smallest supported tower.
    pub const MIN: u8 = 4;
    /// Largest supported tower.
    pub const MAX: u8 = 8;
    /// Every disk count a player may choose, smallest first.
    pub const CHOICES: [u8; 5] = [4, 5, 6, 7, 8];

    /// Validates a requested disk count.
    #[instrument]
    pub fn new(count: u8) -> Result<Self, DiskCountError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(DiskCountError(count))
        }
    }

    /// Returns the number of disks.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Capacity given to every peg: one slot more than the disk count.
    pub const fn slots(self) -> usize {
        self.0 as usize + 1
    }
}

impl Default for DiskCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for DiskCount {
    type Error = DiskCountError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<DiskCount> for u8 {
    fn from(count: DiskCount) -> Self {
        count.0
    }
}

/// A disk count outside the supported range was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display(
    "Unsupported disk count {_0} (choose {} to {})",
    DiskCount::MIN,
    DiskCount::MAX
)]
pub struct DiskCountError(pub u8);

impl std::error::Error for DiskCountError {}

/// One of the three pegs.
///
/// `X` holds the initial tower and `Z` is where it must be rebuilt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum PegId {
    /// Starting peg.
    X,
    /// Middle peg.
    Y,
    /// Destination peg.
    Z,
}

impl PegId {
    /// All pegs in left-to-right order.
    pub const ALL: [PegId; 3] = [PegId::X, PegId::Y, PegId::Z];

    /// Index of this peg in left-to-right order.
    pub const fn index(self) -> usize {
        match self {
            PegId::X => 0,
            PegId::Y => 1,
            PegId::Z => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disks_order_by_weight() {
        assert!(Disk::new(1) < Disk::new(2));
        assert_eq!(Disk::new(3), Disk::new(3));
    }

    #[test]
    fn test_disk_count_range() {
        for count in DiskCount::CHOICES {
            assert_eq!(DiskCount::new(count).map(DiskCount::get), Ok(count));
        }
        assert_eq!(DiskCount::new(3), Err(DiskCountError(3)));
        assert_eq!(DiskCount::new(9), Err(DiskCountError(9)));
        assert_eq!(DiskCount::default().get(), 4);
    }

    #[test]
    fn test_disk_count_slots() {
        let count = DiskCount::new(6).unwrap();
        assert_eq!(count.slots(), 7);
    }

    #[test]
    fn test_disk_count_display() {
        assert_eq!(DiskCount::new(7).unwrap().to_string(), "7");
    }

    #[test]
    fn test_peg_index_matches_order() {
        for (i, peg) in PegId::ALL.iter().enumerate() {
            assert_eq!(peg.index(), i);
        }
        assert_eq!(PegId::Z.to_string(), "Z");
    }
}
