//! Fluent builder for constructing a [`Sim`].

use bus_core::{Clock, Tick, TrackerConfig};
use bus_motion::TraversalState;
use bus_route::{Route, StopRegistry};

use crate::{Publisher, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P, C>`].
///
/// # Required inputs
///
/// - [`TrackerConfig`]: speed, cadence, dwell parameters
/// - [`Route`]: the closed loop to drive
/// - `P: Publisher`: where reports go
/// - `C: Clock`: [`bus_core::SystemClock`] or [`bus_core::ManualClock`]
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                          |
/// |----------------------|----------------------------------|
/// | `.stops(r)`          | `StopRegistry::empty()`          |
/// | `.initial_state(s)`  | `TraversalState::start()`        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, route, JsonLinesPublisher::stdout(), SystemClock)
///     .stops(stops)
///     .build()?;
/// sim.run(&cancel)?;
/// ```
pub struct SimBuilder<P: Publisher, C: Clock> {
    config:    TrackerConfig,
    route:     Route,
    stops:     Option<StopRegistry>,
    state:     Option<TraversalState>,
    publisher: P,
    clock:     C,
}

impl<P: Publisher, C: Clock> SimBuilder<P, C> {
    /// Create a builder with all required inputs.
    pub fn new(config: TrackerConfig, route: Route, publisher: P, clock: C) -> Self {
        Self {
            config,
            route,
            stops: None,
            state: None,
            publisher,
            clock,
        }
    }

    /// Supply the stops the vehicle dwells at.
    ///
    /// The registry's radius is overwritten with `config.stop_radius_m`.
    pub fn stops(mut self, stops: StopRegistry) -> Self {
        self.stops = Some(stops);
        self
    }

    /// Resume from a previously saved state instead of the route start.
    pub fn initial_state(mut self, state: TraversalState) -> Self {
        self.state = Some(state);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P, C>> {
        self.config.validate()?;

        let state = self.state.unwrap_or_else(TraversalState::start);
        if state.segment_index >= self.route.segment_count() {
            return Err(SimError::Config(format!(
                "initial segment {} out of range for a route of {} segments",
                state.segment_index,
                self.route.segment_count()
            )));
        }
        if !state.distance_into_segment_m.is_finite() || state.distance_into_segment_m < 0.0 {
            return Err(SimError::Config(format!(
                "initial distance into segment must be a non-negative number, got {}",
                state.distance_into_segment_m
            )));
        }

        let stops = self
            .stops
            .unwrap_or_else(StopRegistry::empty)
            .with_radius(self.config.stop_radius_m);

        Ok(Sim {
            config:    self.config,
            route:     self.route,
            stops,
            state,
            tick:      Tick::ZERO,
            publisher: self.publisher,
            clock:     self.clock,
            last_fix:  None,
        })
    }
}
