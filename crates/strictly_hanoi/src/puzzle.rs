//! The puzzle state machine.
//!
//! A [`Puzzle`] owns one game's [`GameState`] plus the collaborators it
//! needs to interpret pointer events: the layout constants and a clock. A
//! press lifts the top disk of the peg under the pointer; the matching
//! release asks [`rules::validate`] whether it may land on the peg under the
//! pointer and otherwise returns it to where it came from.
//!
//! ```text
//! Idle --press on non-empty peg--> Holding { disk, source }
//! Holding --release on peg, accepted--> Idle (disk on destination)
//! Holding --release elsewhere or rejected--> Idle (disk back on source)
//! Idle --X and Y empty--> Completed
//! ```

use crate::invariants::{HanoiInvariants, InvariantSet};
use crate::layout::{Layout, LayoutConfig};
use crate::rules::{self, MoveVerdict};
use crate::timer::{Clock, Stopwatch, SystemClock, format_hms};
use crate::{Disk, DiskCount, PegId, PegStack, Point, StackError, hit_test};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Status shown once the first disk leaves the starting peg.
pub const GAME_STARTED_MSG: &str = "Game started.";
/// Status shown once the tower has been rebuilt on Z.
pub const GAME_COMPLETED_MSG: &str = "Game completed!";

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in hand.
    Idle,
    /// A disk has been lifted and not yet placed.
    Holding {
        /// The lifted disk.
        disk: Disk,
        /// The peg it was lifted from.
        source: PegId,
    },
    /// The tower sits on Z. Terminal.
    Completed,
}

/// Result of a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The top disk of `peg` is now in hand.
    Lifted {
        /// The lifted disk.
        disk: Disk,
        /// Where it came from.
        peg: PegId,
    },
    /// The press landed on a peg with no disks.
    EmptyPeg(PegId),
    /// The press landed outside every peg.
    Missed,
    /// The press was not processed (game over or a disk already in hand).
    Ignored,
}

/// Result of a pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The disk was placed on `to`.
    Placed {
        /// The placed disk.
        disk: Disk,
        /// The peg it was lifted from.
        from: PegId,
        /// The peg it now rests on.
        to: PegId,
    },
    /// The disk was heavier than `to`'s top and went back to `from`.
    Rejected {
        /// The rejected disk.
        disk: Disk,
        /// The peg it returned to.
        from: PegId,
        /// The peg it could not be placed on.
        to: PegId,
    },
    /// Released over a peg after a press that lifted nothing.
    EmptySource {
        /// The empty peg that was pressed, or `None` for a press outside
        /// every peg.
        from: Option<PegId>,
        /// The peg under the release.
        to: PegId,
    },
    /// Released outside every peg; the disk went back to `to`.
    Returned {
        /// The returned disk.
        disk: Disk,
        /// The peg it returned to.
        to: PegId,
    },
    /// Nothing was in hand and no press preceded the release.
    Ignored,
}

impl ReleaseOutcome {
    /// The validator's verdict behind this outcome, when one was asked for.
    pub fn verdict(&self) -> Option<MoveVerdict> {
        match self {
            ReleaseOutcome::Placed { .. } => Some(MoveVerdict::Accepted),
            ReleaseOutcome::Rejected { .. } => Some(MoveVerdict::RejectedLargerOnSmaller),
            ReleaseOutcome::EmptySource { .. } => Some(MoveVerdict::RejectedEmptySource),
            ReleaseOutcome::Returned { .. } | ReleaseOutcome::Ignored => None,
        }
    }
}

/// Error from the pointer handlers. Only reachable through a logic defect.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum PuzzleError {
    /// A peg operation failed.
    #[display("Peg operation failed: {_0}")]
    Stack(StackError),

    /// A game invariant no longer holds.
    #[from(ignore)]
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleError::Stack(err) => Some(err),
            PuzzleError::InvariantViolation(_) => None,
        }
    }
}

/// Callbacks a front end drives with pointer events in pixel coordinates.
pub trait PointerInput {
    /// Primary button pressed at `at`.
    fn on_pointer_down(&mut self, at: Point) -> Result<PressOutcome, PuzzleError>;

    /// Pointer moved to `at` with the button held.
    fn on_pointer_drag(&mut self, at: Point);

    /// Primary button released at `at`.
    fn on_pointer_up(&mut self, at: Point) -> Result<ReleaseOutcome, PuzzleError>;
}

/// Where the last press that lifted nothing landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PendingPress {
    /// Outside every peg.
    Outside,
    /// On an empty peg.
    Peg(PegId),
}

impl PendingPress {
    fn peg(self) -> Option<PegId> {
        match self {
            PendingPress::Outside => None,
            PendingPress::Peg(peg) => Some(peg),
        }
    }
}

/// Everything that belongs to a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) disk_count: DiskCount,
    /// X, Y and Z.
    pub(crate) pegs: [PegStack; 3],
    pub(crate) phase: Phase,
    /// A press that lifted nothing, kept until the matching release.
    pub(crate) pending: Option<PendingPress>,
    pub(crate) drag: Option<Point>,
    pub(crate) status: String,
    pub(crate) moves: u32,
    pub(crate) stopwatch: Stopwatch,
}

impl GameState {
    /// A fresh game with the whole tower on X.
    #[instrument]
    pub fn new(disk_count: DiskCount) -> Self {
        let slots = disk_count.slots();
        Self {
            disk_count,
            pegs: [
                PegStack::tower(disk_count),
                PegStack::new(slots),
                PegStack::new(slots),
            ],
            phase: Phase::Idle,
            pending: None,
            drag: None,
            status: String::new(),
            moves: 0,
            stopwatch: Stopwatch::default(),
        }
    }

    /// Number of disks in play.
    pub fn disk_count(&self) -> DiskCount {
        self.disk_count
    }

    /// Pegs in X, Y, Z order.
    pub fn pegs(&self) -> &[PegStack; 3] {
        &self.pegs
    }

    /// A single peg.
    pub fn peg(&self, peg: PegId) -> &PegStack {
        &self.pegs[peg.index()]
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Latest status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Accepted moves between two different pegs.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns true when the tower has been rebuilt on Z.
    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// The disk in hand, if any.
    pub fn held(&self) -> Option<Disk> {
        match self.phase {
            Phase::Holding { disk, .. } => Some(disk),
            Phase::Idle | Phase::Completed => None,
        }
    }

    fn peg_mut(&mut self, peg: PegId) -> &mut PegStack {
        &mut self.pegs[peg.index()]
    }

    fn tower_moved(&self) -> bool {
        self.peg(PegId::X).is_empty() && self.peg(PegId::Y).is_empty()
    }
}

/// A Tower of Hanoi game driven by pointer events.
#[derive(Debug)]
pub struct Puzzle<C: Clock = SystemClock> {
    state: GameState,
    config: LayoutConfig,
    clock: C,
}

impl Puzzle<SystemClock> {
    /// Creates a game on the wall clock with the default layout.
    pub fn new(disk_count: DiskCount) -> Self {
        Self::with_clock(disk_count, LayoutConfig::default(), SystemClock::default())
    }
}

impl<C: Clock> Puzzle<C> {
    /// Creates a game with explicit layout constants and clock.
    #[instrument(skip(config, clock))]
    pub fn with_clock(disk_count: DiskCount, config: LayoutConfig, clock: C) -> Self {
        info!(disks = disk_count.get(), "New puzzle");
        Self {
            state: GameState::new(disk_count),
            config,
            clock,
        }
    }

    /// Discards the current game and starts another.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, disk_count: DiskCount) {
        info!(disks = disk_count.get(), "Game restarted");
        self.state = GameState::new(disk_count);
    }

    /// The current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Layout constants.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Latest status message.
    pub fn status(&self) -> &str {
        self.state.status()
    }

    /// Returns true when the tower has been rebuilt on Z.
    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    /// Time since the first disk left X, frozen once completed.
    pub fn elapsed(&self) -> Duration {
        self.state.stopwatch.elapsed(self.clock.now())
    }

    /// Elapsed time as shown under the board.
    pub fn elapsed_label(&self) -> String {
        format!("Elapsed time - {}", format_hms(self.elapsed()))
    }

    /// Geometry for the current frame.
    pub fn current_layout(&self) -> Layout {
        let held = match (self.state.phase, self.state.drag) {
            (Phase::Holding { disk, .. }, Some(at)) => Some((disk, at)),
            _ => None,
        };
        Layout::compute(
            &self.config,
            self.state.disk_count.slots(),
            &self.state.pegs,
            held,
        )
    }

    fn peg_at(&self, at: Point) -> Option<PegId> {
        hit_test(at, &self.current_layout().peg_areas())
    }

    fn start_timer_if_lifted(&mut self) {
        let on_start_peg = self.state.peg(PegId::X).size();
        if !self.state.stopwatch.is_started()
            && on_start_peg < usize::from(self.state.disk_count.get())
        {
            self.state.stopwatch.start(self.clock.now());
            self.state.status = GAME_STARTED_MSG.to_string();
            info!("Game started");
        }
    }

    /// Settles into `Idle`, or `Completed` if the tower is on Z.
    fn settle(&mut self) -> Result<(), PuzzleError> {
        self.state.pending = None;
        self.state.drag = None;
        self.state.phase = Phase::Idle;

        if self.state.tower_moved() {
            self.state.phase = Phase::Completed;
            self.state.stopwatch.stop(self.clock.now());
            self.state.status = GAME_COMPLETED_MSG.to_string();
            info!(
                moves = self.state.moves,
                elapsed = %format_hms(self.elapsed()),
                "Game completed"
            );
        }

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(())
    }

    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    fn check_invariants(&self) -> Result<(), PuzzleError> {
        HanoiInvariants::check_all(&self.state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            PuzzleError::InvariantViolation(descriptions)
        })
    }

    fn log_peg_sizes(&self) {
        info!(
            x = self.state.peg(PegId::X).size(),
            y = self.state.peg(PegId::Y).size(),
            z = self.state.peg(PegId::Z).size(),
            "Peg sizes"
        );
    }
}

impl<C: Clock> PointerInput for Puzzle<C> {
    #[instrument(skip(self), fields(phase = ?self.state.phase))]
    fn on_pointer_down(&mut self, at: Point) -> Result<PressOutcome, PuzzleError> {
        if self.state.phase != Phase::Idle {
            debug!("Press ignored");
            return Ok(PressOutcome::Ignored);
        }

        let Some(peg) = self.peg_at(at) else {
            debug!("Press outside every peg");
            self.state.pending = Some(PendingPress::Outside);
            return Ok(PressOutcome::Missed);
        };

        self.state.pending = None;
        if self.state.peg(peg).is_empty() {
            self.state.pending = Some(PendingPress::Peg(peg));
            debug!(%peg, "Press on empty peg");
            return Ok(PressOutcome::EmptyPeg(peg));
        }

        let disk = self.state.peg_mut(peg).pop()?;
        self.state.phase = Phase::Holding { disk, source: peg };
        self.state.drag = Some(at);
        debug!(%disk, %peg, "Disk lifted");

        self.start_timer_if_lifted();
        Ok(PressOutcome::Lifted { disk, peg })
    }

    fn on_pointer_drag(&mut self, at: Point) {
        if matches!(self.state.phase, Phase::Holding { .. }) {
            self.state.drag = Some(at);
        }
    }

    #[instrument(skip(self), fields(phase = ?self.state.phase))]
    fn on_pointer_up(&mut self, at: Point) -> Result<ReleaseOutcome, PuzzleError> {
        let target = self.peg_at(at);

        let outcome = match (self.state.phase, target) {
            (Phase::Completed, _) => {
                debug!("Release ignored after completion");
                return Ok(ReleaseOutcome::Ignored);
            }
            (Phase::Holding { disk, source }, Some(to)) => {
                let verdict = rules::validate(Some(disk), self.state.peg(to).top().ok());
                self.state.status = verdict.message().to_string();
                if verdict.is_accepted() {
                    self.state.peg_mut(to).push(disk)?;
                    if to != source {
                        self.state.moves += 1;
                    }
                    debug!(%disk, from = %source, %to, "Disk placed");
                    ReleaseOutcome::Placed {
                        disk,
                        from: source,
                        to,
                    }
                } else {
                    self.state.peg_mut(source).push(disk)?;
                    warn!(%disk, from = %source, %to, "{}", verdict.message());
                    ReleaseOutcome::Rejected {
                        disk,
                        from: source,
                        to,
                    }
                }
            }
            (Phase::Holding { disk, source }, None) => {
                self.state.peg_mut(source).push(disk)?;
                debug!(%disk, to = %source, "Released outside; disk returned");
                ReleaseOutcome::Returned { disk, to: source }
            }
            (Phase::Idle, Some(to)) if self.state.pending.is_some() => {
                let from = self.state.pending.take().and_then(PendingPress::peg);
                let verdict = rules::validate(None, self.state.peg(to).top().ok());
                self.state.status = verdict.message().to_string();
                warn!(?from, %to, "{}", verdict.message());
                return Ok(ReleaseOutcome::EmptySource { from, to });
            }
            (Phase::Idle, _) => {
                self.state.pending = None;
                debug!("Release without a lifted disk");
                return Ok(ReleaseOutcome::Ignored);
            }
        };

        self.log_peg_sizes();
        self.settle()?;
        Ok(outcome)
    }
}
