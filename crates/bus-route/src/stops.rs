//! Named stops and proximity lookup.

use std::collections::HashSet;

use bus_core::{Coordinate, StopId};

use crate::{RouteError, RouteResult};

/// Default detection radius in metres.
pub const DEFAULT_STOP_RADIUS_M: f64 = 20.0;

/// A named stop on the route.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id:       StopId,
    pub name:     String,
    pub location: Coordinate,
}

/// An ordered, read-only set of uniquely named stops.
///
/// # Match order
///
/// [`find_nearby`][Self::find_nearby] scans stops in **definition order**
/// (the order they were passed to [`StopRegistry::new`] or appeared in the
/// CSV) and returns the first one inside the radius.  When two stops overlap,
/// the one defined earlier always wins.
#[derive(Debug, Clone)]
pub struct StopRegistry {
    stops:    Vec<Stop>,
    radius_m: f64,
}

impl StopRegistry {
    /// Build a registry with the default 20 m radius.
    ///
    /// # Errors
    ///
    /// [`RouteError::DuplicateStop`] if two stops share a name,
    /// [`RouteError::NonFiniteStop`] for NaN/∞ coordinates, and
    /// [`RouteError::TooManyStops`] past `u16::MAX` stops.
    pub fn new<I, S>(stops: I) -> RouteResult<Self>
    where
        I: IntoIterator<Item = (S, Coordinate)>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut out: Vec<Stop> = Vec::new();

        for (i, (name, location)) in stops.into_iter().enumerate() {
            let name: String = name.into();
            if !location.is_finite() {
                return Err(RouteError::NonFiniteStop(name));
            }
            if !seen.insert(name.clone()) {
                return Err(RouteError::DuplicateStop(name));
            }
            let id = StopId::try_from(i).map_err(|_| RouteError::TooManyStops(i + 1))?;
            out.push(Stop { id, name, location });
        }

        Ok(Self { stops: out, radius_m: DEFAULT_STOP_RADIUS_M })
    }

    /// A registry with no stops: the vehicle never dwells.
    pub fn empty() -> Self {
        Self { stops: Vec::new(), radius_m: DEFAULT_STOP_RADIUS_M }
    }

    /// Replace the detection radius.
    pub fn with_radius(mut self, radius_m: f64) -> Self {
        self.radius_m = radius_m;
        self
    }

    #[inline]
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stops in definition order.
    #[inline]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Look a stop up by id.
    #[inline]
    pub fn get(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    /// Look a stop up by name.
    pub fn by_name(&self, name: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.name == name)
    }

    /// The first stop (in definition order) strictly closer than the radius
    /// to `position`.
    pub fn find_nearby(&self, position: Coordinate) -> Option<&Stop> {
        self.stops
            .iter()
            .find(|s| s.location.distance_m(position) < self.radius_m)
    }
}
