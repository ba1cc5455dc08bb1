//! The record handed to a [`Publisher`][crate::Publisher] on every tick.

use serde::{Deserialize, Serialize};

use bus_motion::Fix;

/// A consumer treats the vehicle as offline once its latest report is this
/// old.
pub const FRESHNESS_WINDOW_MS: i64 = 7_000;

/// One simulated GPS update.
///
/// Serialises to the schema live-tracking consumers read:
///
/// ```json
/// {"latitude":-12.05,"longitude":-77.08,"speed":28.8,"heading":91.5,"isActive":true,"timestamp":1700000000000}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionReport {
    pub latitude:  f64,
    pub longitude: f64,
    /// km/h; `0.0` while dwelling.
    pub speed:     f64,
    /// Degrees clockwise from true north, `[0, 360)`.
    pub heading:   f64,
    pub is_active: bool,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
}

impl PositionReport {
    /// An active report for `fix` stamped at `timestamp`.
    pub fn from_fix(fix: &Fix, timestamp: i64) -> Self {
        Self {
            latitude:  fix.position.lat,
            longitude: fix.position.lon,
            speed:     fix.speed_kmh,
            heading:   fix.heading_deg,
            is_active: true,
            timestamp,
        }
    }

    /// `true` while a consumer polling at `now_millis` would still show the
    /// vehicle as online.
    #[inline]
    pub fn is_fresh(&self, now_millis: i64) -> bool {
        now_millis - self.timestamp < FRESHNESS_WINDOW_MS
    }
}
