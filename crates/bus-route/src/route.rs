//! Closed waypoint route.
//!
//! # Data layout
//!
//! A route of `n` waypoints has `n - 1` segments.  Segment `i` runs from
//! `waypoints[i]` to `waypoints[i + 1]`; its haversine length and initial
//! bearing are computed once at construction and stored in parallel arrays
//! indexed by segment:
//!
//! ```text
//! waypoints:       w0 ── w1 ── w2 ── … ── w(n-1) == w0
//! segment_length:     l0    l1    …    l(n-2)
//! segment_heading:    h0    h1    …    h(n-2)
//! ```
//!
//! The loop is closed (`w(n-1) == w0`), so running off the last segment
//! wraps back to segment 0.

use bus_core::Coordinate;

use crate::{RouteError, RouteResult};

/// An immutable closed sequence of waypoints.
///
/// Do not construct directly; use [`Route::new`] or [`Route::closed`].
#[derive(Debug, Clone)]
pub struct Route {
    waypoints:       Vec<Coordinate>,
    segment_length:  Vec<f64>,
    segment_heading: Vec<f64>,
    total_length:    f64,
}

impl Route {
    /// Build a route from waypoints that already form a closed loop.
    ///
    /// # Errors
    ///
    /// - [`RouteError::TooFewWaypoints`] for fewer than 2 waypoints.
    /// - [`RouteError::NonFiniteWaypoint`] if any coordinate is NaN/∞.
    /// - [`RouteError::NotClosed`] if the last waypoint differs from the first.
    /// - [`RouteError::ZeroLength`] if every segment is degenerate; such a
    ///   route can never be traversed.
    pub fn new(waypoints: Vec<Coordinate>) -> RouteResult<Self> {
        if waypoints.len() < 2 {
            return Err(RouteError::TooFewWaypoints(waypoints.len()));
        }
        if let Some(index) = waypoints.iter().position(|w| !w.is_finite()) {
            return Err(RouteError::NonFiniteWaypoint { index });
        }
        let first = waypoints[0];
        let last = waypoints[waypoints.len() - 1];
        if first != last {
            return Err(RouteError::NotClosed { first, last });
        }

        let (segment_length, segment_heading): (Vec<f64>, Vec<f64>) = waypoints
            .windows(2)
            .map(|w| (w[0].distance_m(w[1]), w[0].initial_bearing_deg(w[1])))
            .unzip();

        let total_length: f64 = segment_length.iter().sum();
        if total_length <= 0.0 {
            return Err(RouteError::ZeroLength);
        }

        Ok(Self {
            waypoints,
            segment_length,
            segment_heading,
            total_length,
        })
    }

    /// Like [`Route::new`] but appends the first waypoint when the list does
    /// not already end where it starts.
    pub fn closed(mut waypoints: Vec<Coordinate>) -> RouteResult<Self> {
        if let (Some(&first), Some(&last)) = (waypoints.first(), waypoints.last()) {
            if first != last {
                waypoints.push(first);
            }
        }
        Self::new(waypoints)
    }

    /// All waypoints, including the closing duplicate of the first one.
    #[inline]
    pub fn waypoints(&self) -> &[Coordinate] {
        &self.waypoints
    }

    /// Number of segments: `waypoints().len() - 1`.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Endpoints of segment `i`.
    ///
    /// # Panics
    /// Panics if `i >= segment_count()`.
    #[inline]
    pub fn segment(&self, i: usize) -> (Coordinate, Coordinate) {
        (self.waypoints[i], self.waypoints[i + 1])
    }

    /// Haversine length of segment `i` in metres.
    #[inline]
    pub fn segment_length_m(&self, i: usize) -> f64 {
        self.segment_length[i]
    }

    /// Initial bearing of segment `i` in degrees, `[0, 360)`.
    #[inline]
    pub fn segment_heading_deg(&self, i: usize) -> f64 {
        self.segment_heading[i]
    }

    /// Length of one full lap in metres.
    #[inline]
    pub fn total_length_m(&self) -> f64 {
        self.total_length
    }
}
