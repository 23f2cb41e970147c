//! Strictly Hanoi - Tower of Hanoi puzzle logic
//!
//! The crate models the interactive core of the puzzle: three pegs, legal
//! move enforcement, pointer-driven lifting and placing, completion detection
//! and the pixel geometry a front end needs to draw the board and to turn a
//! pointer position into a peg.
//!
//! # Architecture
//!
//! - **PegStack**: fixed-capacity stack of disks, no rules attached
//! - **Rules**: [`validate`] decides whether the disk in hand may land on a peg
//! - **Layout**: pure geometry for pegs, disks and clickable areas
//! - **Hit testing**: [`hit_test`] maps a point to a peg
//! - **Puzzle**: the state machine tying them together
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{DiskCount, PegId, PointerInput, Point, Puzzle, ReleaseOutcome};
//!
//! # fn main() -> Result<(), strictly_hanoi::PuzzleError> {
//! let mut puzzle = Puzzle::new(DiskCount::default());
//! let x = puzzle.config().peg_x[PegId::X.index()];
//! let z = puzzle.config().peg_x[PegId::Z.index()];
//!
//! puzzle.on_pointer_down(Point::new(x, 200))?;
//! let outcome = puzzle.on_pointer_up(Point::new(z, 200))?;
//! assert!(matches!(outcome, ReleaseOutcome::Placed { to: PegId::Z, .. }));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod disk;
mod geometry;
mod hit;
pub mod invariants;
pub mod layout;
mod peg;
mod puzzle;
pub mod rules;
mod timer;

pub use disk::{Disk, DiskCount, DiskCountError, PegId};
pub use geometry::{Point, Rect};
pub use hit::hit_test;
pub use layout::{DiskRect, Layout, LayoutConfig, PegLayout};
pub use peg::{PegStack, StackError};
pub use puzzle::{
    GAME_COMPLETED_MSG, GAME_STARTED_MSG, GameState, Phase, PointerInput, PressOutcome,
    Puzzle, PuzzleError, ReleaseOutcome,
};
pub use rules::{MoveVerdict, validate};
pub use timer::{Clock, ManualClock, Stopwatch, SystemClock, format_hms};

/// How to play, as shown by front ends.
pub const INSTRUCTIONS: &str = "\
Solve the puzzle by transferring a tower of disks, of varying widths, from location X to location Z.

The challenge lies in moving only one disk at a time and never placing a larger disk on top of a smaller one.

The game is complete when the tower is rebuilt on location Z.";
