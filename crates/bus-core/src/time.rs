//! Simulation time model.
//!
//! # Design
//!
//! Every emitted report is one `Tick`.  Between two ticks the engine waits
//! exactly one tick interval through a [`Clock`], which is the only place the
//! simulator touches wall time:
//!
//!   report timestamp = clock.now_millis()   (read at publish time)
//!
//! [`SystemClock`] really sleeps.  [`ManualClock`] only moves its virtual
//! time forward, so tests can drive thousands of ticks instantly while still
//! observing strictly increasing timestamps.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Sequence number of an emitted report, starting at zero.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Source of report timestamps and the engine's only suspension point.
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Block (or pretend to block) for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock time with real `std::thread::sleep` waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Virtual clock: `sleep` advances time instantly.
///
/// `ManualClock` is cheap to copy and holds no heap data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManualClock {
    now_millis: i64,
}

impl ManualClock {
    /// Create a clock whose current time is `start_millis`.
    pub fn new(start_millis: i64) -> Self {
        Self { now_millis: start_millis }
    }

    /// Move the clock forward without going through `sleep`.
    #[inline]
    pub fn advance(&mut self, duration: Duration) {
        self.now_millis += duration.as_millis() as i64;
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_millis(&self) -> i64 {
        self.now_millis
    }

    #[inline]
    fn sleep(&mut self, duration: Duration) {
        self.advance(duration);
    }
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }

    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration);
    }
}
