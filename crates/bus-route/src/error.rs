//! Route-subsystem error type.

use thiserror::Error;

/// Errors produced while building or loading routes and stop registries.
///
/// All of them are configuration errors: they are raised before a
/// simulation starts and must prevent it from starting.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("route is not closed: first waypoint {first} differs from last {last}")]
    NotClosed {
        first: bus_core::Coordinate,
        last:  bus_core::Coordinate,
    },

    #[error("route has zero total length")]
    ZeroLength,

    #[error("waypoint {index} has a non-finite coordinate")]
    NonFiniteWaypoint { index: usize },

    #[error("stop {0:?} has a non-finite coordinate")]
    NonFiniteStop(String),

    #[error("duplicate stop name {0:?}")]
    DuplicateStop(String),

    #[error("too many stops: {0}")]
    TooManyStops(usize),

    #[error("route parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
