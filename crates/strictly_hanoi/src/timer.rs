//! Elapsed-time tracking.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time, measured from an arbitrary fixed origin.
pub trait Clock: std::fmt::Debug {
    /// Time since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Creates a clock stopped at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// A stopwatch that can be started and stopped once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stopwatch {
    started_at: Option<Duration>,
    stopped_at: Option<Duration>,
}

impl Stopwatch {
    /// Starts timing at `now`. Later calls are ignored.
    pub fn start(&mut self, now: Duration) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Freezes the reading at `now`. Ignored unless running.
    pub fn stop(&mut self, now: Duration) {
        if self.started_at.is_some() && self.stopped_at.is_none() {
            self.stopped_at = Some(now);
        }
    }

    /// Returns true once started.
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Returns true once stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped_at.is_some()
    }

    /// Time elapsed between start and either the stop time or `now`.
    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.started_at {
            Some(start) => self.stopped_at.unwrap_or(now).saturating_sub(start),
            None => Duration::ZERO,
        }
    }
}

/// Formats a duration as `HH:MM:SS`. Hours do not wrap.
pub fn format_hms(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
