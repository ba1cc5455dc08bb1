//! Tracker configuration.

use std::time::Duration;

use crate::{CoreError, CoreResult};

/// Static parameters of one simulated vehicle.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and handed to the simulation builder.  Missing fields
/// fall back to [`TrackerConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// Constant cruise speed in metres per second.  Default: 8.0.
    pub cruise_speed_mps: f64,

    /// Seconds between two consecutive reports.  Default: 3.0.
    pub tick_interval_secs: f64,

    /// A stop is "reached" when the vehicle is strictly closer than this.
    /// Default: 20 m.
    pub stop_radius_m: f64,

    /// Stationary reports emitted while dwelling at a stop.  Default: 5.
    pub dwell_reports: u32,

    /// Distance added after a dwell so the same stop is not re-detected on
    /// the next tick.  Default: 25 m.
    pub dwell_push_m: f64,

    /// Start time for virtual clocks, in Unix milliseconds.  Ignored when the
    /// engine runs on the system clock.
    pub start_unix_millis: i64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            cruise_speed_mps:   8.0,
            tick_interval_secs: 3.0,
            stop_radius_m:      20.0,
            dwell_reports:      5,
            dwell_push_m:       25.0,
            start_unix_millis:  0,
        }
    }
}

impl TrackerConfig {
    /// Reject values that would make the traversal meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.cruise_speed_mps.is_finite() || self.cruise_speed_mps < 0.0 {
            return Err(CoreError::Config(format!(
                "cruise_speed_mps must be a non-negative number, got {}",
                self.cruise_speed_mps
            )));
        }
        if !self.tick_interval_secs.is_finite() || self.tick_interval_secs <= 0.0 {
            return Err(CoreError::Config(format!(
                "tick_interval_secs must be positive, got {}",
                self.tick_interval_secs
            )));
        }
        if !self.stop_radius_m.is_finite() || self.stop_radius_m < 0.0 {
            return Err(CoreError::Config(format!(
                "stop_radius_m must be a non-negative number, got {}",
                self.stop_radius_m
            )));
        }
        if self.dwell_reports == 0 {
            return Err(CoreError::Config("dwell_reports must be at least 1".into()));
        }
        if !self.dwell_push_m.is_finite() || self.dwell_push_m < 0.0 {
            return Err(CoreError::Config(format!(
                "dwell_push_m must be a non-negative number, got {}",
                self.dwell_push_m
            )));
        }
        Ok(())
    }

    /// Reporting cadence as a `Duration`.
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(self.tick_interval_secs)
    }

    /// Distance covered by one moving tick.
    #[inline]
    pub fn distance_per_tick_m(&self) -> f64 {
        self.cruise_speed_mps * self.tick_interval_secs
    }

    /// Cruise speed as reported to consumers.
    #[inline]
    pub fn cruise_speed_kmh(&self) -> f64 {
        self.cruise_speed_mps * 3.6
    }
}
