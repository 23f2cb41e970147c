//! Move legality for the Tower of Hanoi.
//!
//! Pure functions only. The puzzle state consults these before touching any
//! peg, so a rejected move never mutates anything.

use crate::Disk;
use tracing::instrument;

/// Status shown after an accepted move.
pub const VALID_MOVE_MSG: &str = "Valid move...";
/// Status shown when a heavier disk is dropped on a lighter one.
pub const LARGER_ON_SMALLER_MSG: &str = "A bigger disk cannot be placed on top of a smaller one!";
/// Status shown when a release follows a press on an empty peg.
pub const EMPTY_SOURCE_MSG: &str = "That stack is empty.";

/// Outcome of validating a proposed placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveVerdict {
    /// The disk may be placed.
    Accepted,
    /// The destination's top disk is lighter than the disk in hand.
    RejectedLargerOnSmaller,
    /// Nothing was lifted, so there is nothing to place.
    RejectedEmptySource,
}

impl MoveVerdict {
    /// Returns true for [`MoveVerdict::Accepted`].
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveVerdict::Accepted)
    }

    /// Status text reported to the player.
    pub fn message(self) -> &'static str {
        match self {
            MoveVerdict::Accepted => VALID_MOVE_MSG,
            MoveVerdict::RejectedLargerOnSmaller => LARGER_ON_SMALLER_MSG,
            MoveVerdict::RejectedEmptySource => EMPTY_SOURCE_MSG,
        }
    }
}

/// Decides whether `in_hand` may be placed on a peg whose top is `destination_top`.
///
/// `None` for the destination means the peg is empty.
#[instrument]
pub fn validate(in_hand: Option<Disk>, destination_top: Option<Disk>) -> MoveVerdict {
    match (in_hand, destination_top) {
        (None, _) => MoveVerdict::RejectedEmptySource,
        (Some(_), None) => MoveVerdict::Accepted,
        (Some(disk), Some(top)) if disk < top => MoveVerdict::Accepted,
        (Some(_), Some(_)) => MoveVerdict::RejectedLargerOnSmaller,
    }
}
