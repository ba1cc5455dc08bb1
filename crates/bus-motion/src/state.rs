//! Traversal state of the simulated vehicle.

use bus_core::{Coordinate, StopId};

/// What the vehicle is doing between two reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Driving along the route at cruise speed.
    Moving,

    /// Parked at `stop`.  `reports_left` stationary reports remain before the
    /// vehicle pulls away.
    Dwelling {
        stop:         StopId,
        location:     Coordinate,
        reports_left: u32,
    },
}

/// Everything that changes while the vehicle drives the loop.
///
/// Exclusively owned by one simulation.  [`advance`][crate::advance] never
/// mutates it in place: it returns the next state so the caller decides
/// whether to commit it.
///
/// Invariant after normalisation: `distance_into_segment_m` is strictly less
/// than the length of `segment_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalState {
    /// Current segment, `0 ≤ segment_index < route.segment_count()`.
    pub segment_index: usize,

    /// Metres travelled since the start of the current segment.
    pub distance_into_segment_m: f64,

    /// Stop dwelled at most recently.  That stop cannot trigger another dwell
    /// until a different stop has been visited.
    pub last_visited_stop: Option<StopId>,

    pub phase: Phase,
}

impl TraversalState {
    /// Start of the route, nothing visited yet.
    pub fn start() -> Self {
        Self {
            segment_index:           0,
            distance_into_segment_m: 0.0,
            last_visited_stop:       None,
            phase:                   Phase::Moving,
        }
    }

    /// `true` while parked at a stop.
    #[inline]
    pub fn is_dwelling(&self) -> bool {
        matches!(self.phase, Phase::Dwelling { .. })
    }
}

impl Default for TraversalState {
    fn default() -> Self {
        Self::start()
    }
}
