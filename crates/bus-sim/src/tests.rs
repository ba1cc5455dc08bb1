//! Integration tests for bus-sim.

use bus_core::{Coordinate, ManualClock, TrackerConfig};
use bus_route::{Route, StopRegistry};

use crate::{CancelFlag, PositionReport, Publisher, Sim, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

const START_MS: i64 = 1_700_000_000_000;

/// Out-and-back route (0,0) → (0.001,0) → (0,0), ≈ 111.2 m per leg.
fn north_route() -> Route {
    Route::closed(vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.001, 0.0)]).unwrap()
}

fn stop_at_origin() -> StopRegistry {
    StopRegistry::new([("Origin", Coordinate::new(0.0, 0.0))]).unwrap()
}

fn recording_sim(stops: StopRegistry) -> Sim<Vec<PositionReport>, ManualClock> {
    SimBuilder::new(TrackerConfig::default(), north_route(), Vec::new(), ManualClock::new(START_MS))
        .stops(stops)
        .build()
        .unwrap()
}

/// Fails every call listed in `fail_on` (0-based call index).
struct FlakyPublisher {
    calls:     usize,
    fail_on:   Vec<usize>,
    delivered: Vec<PositionReport>,
}

#[derive(Debug, thiserror::Error)]
#[error("sink unavailable")]
struct SinkDown;

impl Publisher for FlakyPublisher {
    type Error = SinkDown;

    fn publish(&mut self, report: &PositionReport) -> Result<(), SinkDown> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_on.contains(&call) {
            return Err(SinkDown);
        }
        self.delivered.push(*report);
        Ok(())
    }
}

/// Requests cancellation once `after` reports have been delivered.
struct CancelAfter {
    after:  usize,
    seen:   usize,
    cancel: CancelFlag,
}

impl Publisher for CancelAfter {
    type Error = std::convert::Infallible;

    fn publish(&mut self, _report: &PositionReport) -> Result<(), Self::Error> {
        self.seen += 1;
        if self.seen >= self.after {
            self.cancel.cancel();
        }
        Ok(())
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use bus_motion::TraversalState;

    use super::*;
    use crate::{NoopPublisher, SimError};

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(TrackerConfig::default(), north_route(), NoopPublisher, ManualClock::new(0))
            .build()
            .unwrap();
        assert!(sim.stops.is_empty());
        assert_eq!(sim.state, TraversalState::start());
        assert_eq!(sim.tick.0, 0);
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = TrackerConfig { tick_interval_secs: 0.0, ..Default::default() };
        let result = SimBuilder::new(cfg, north_route(), NoopPublisher, ManualClock::new(0)).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn out_of_range_initial_state_rejected() {
        let state = TraversalState { segment_index: 2, ..TraversalState::start() };
        let result = SimBuilder::new(TrackerConfig::default(), north_route(), NoopPublisher, ManualClock::new(0))
            .initial_state(state)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn negative_initial_distance_rejected() {
        let state = TraversalState { distance_into_segment_m: -1.0, ..TraversalState::start() };
        let result = SimBuilder::new(TrackerConfig::default(), north_route(), NoopPublisher, ManualClock::new(0))
            .initial_state(state)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn stop_radius_comes_from_config() {
        let cfg = TrackerConfig { stop_radius_m: 35.0, ..Default::default() };
        let sim = SimBuilder::new(cfg, north_route(), NoopPublisher, ManualClock::new(0))
            .stops(stop_at_origin())
            .build()
            .unwrap();
        assert_eq!(sim.stops.radius_m(), 35.0);
    }

    #[test]
    fn resumes_from_initial_state() {
        let state = TraversalState { segment_index: 1, distance_into_segment_m: 10.0, ..TraversalState::start() };
        let mut sim = SimBuilder::new(TrackerConfig::default(), north_route(), Vec::<PositionReport>::new(), ManualClock::new(0))
            .initial_state(state)
            .build()
            .unwrap();
        let report = sim.step().unwrap();
        assert!((report.heading - 180.0).abs() < 1e-9);
        assert!((sim.state.distance_into_segment_m - 34.0).abs() < 1e-9);
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use bus_core::Clock;

    use super::*;

    #[test]
    fn first_tick_scenario() {
        let mut sim = recording_sim(StopRegistry::empty());
        sim.run_ticks(1).unwrap();

        let r = sim.publisher[0];
        assert!((r.speed - 28.8).abs() < 1e-9);
        assert!(r.heading.abs() < 1e-9);
        assert!(r.is_active);
        assert_eq!(r.timestamp, START_MS);
        assert_eq!((r.latitude, r.longitude), (0.0, 0.0));
        assert!((sim.state.distance_into_segment_m - 24.0).abs() < 1e-9);
    }

    #[test]
    fn timestamps_step_by_tick_interval() {
        let mut sim = recording_sim(stop_at_origin());
        sim.run_ticks(12).unwrap();

        assert_eq!(sim.publisher.len(), 12);
        for pair in sim.publisher.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, 3_000);
        }
        assert_eq!(sim.tick.0, 12);
    }

    #[test]
    fn stop_at_start_dwells_five_reports() {
        let mut sim = recording_sim(stop_at_origin());
        sim.run_ticks(6).unwrap();

        let dwell = &sim.publisher[..5];
        for r in dwell {
            assert_eq!(r.speed, 0.0);
            assert!(r.is_active);
            assert_eq!((r.latitude, r.longitude), (0.0, 0.0));
        }
        let moving = sim.publisher[5];
        assert!((moving.speed - 28.8).abs() < 1e-9);
        assert!(moving.latitude > 0.0);

        assert_eq!(sim.state.last_visited_stop, sim.stops.by_name("Origin").map(|s| s.id));
        assert!((sim.state.distance_into_segment_m - 49.0).abs() < 1e-9);
    }

    #[test]
    fn dwell_leaves_push_through_distance() {
        let mut sim = recording_sim(stop_at_origin());
        sim.run_ticks(5).unwrap();
        assert!(!sim.state.is_dwelling());
        assert!((sim.state.distance_into_segment_m - 25.0).abs() < 1e-9);
    }

    #[test]
    fn step_does_not_wait() {
        let mut sim = recording_sim(StopRegistry::empty());
        sim.step().unwrap();
        sim.step().unwrap();
        assert_eq!(sim.publisher[0].timestamp, sim.publisher[1].timestamp);
    }

    #[test]
    fn run_stops_when_cancelled() {
        let cancel = CancelFlag::new();
        let publisher = CancelAfter { after: 4, seen: 0, cancel: cancel.clone() };
        let mut sim = SimBuilder::new(TrackerConfig::default(), north_route(), publisher, ManualClock::new(0))
            .build()
            .unwrap();

        let delivered = sim.run(&cancel).unwrap();
        assert_eq!(delivered, 4);
        assert_eq!(sim.tick.0, 4);
        // The wait after the last report still happened.
        assert_eq!(sim.clock.now_millis(), 12_000);
    }

    #[test]
    fn run_with_cancelled_flag_publishes_nothing() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let mut sim = recording_sim(StopRegistry::empty());
        assert_eq!(sim.run(&cancel).unwrap(), 0);
        assert!(sim.publisher.is_empty());
    }
}

// ── Publish failures ──────────────────────────────────────────────────────────

#[cfg(test)]
mod publish_failure {
    use super::*;
    use crate::SimError;

    fn flaky_sim(fail_on: Vec<usize>) -> Sim<FlakyPublisher, ManualClock> {
        let publisher = FlakyPublisher { calls: 0, fail_on, delivered: Vec::new() };
        SimBuilder::new(TrackerConfig::default(), north_route(), publisher, ManualClock::new(0))
            .build()
            .unwrap()
    }

    #[test]
    fn failure_is_returned_with_tick() {
        let mut sim = flaky_sim(vec![2]);
        sim.run_ticks(2).unwrap();
        let err = sim.step().unwrap_err();
        assert!(matches!(err, SimError::Publish { tick, .. } if tick.0 == 2));
        assert!(err.to_string().contains("sink unavailable"));
    }

    #[test]
    fn failed_tick_leaves_state_untouched() {
        let mut sim = flaky_sim(vec![1]);
        sim.step().unwrap();
        let before = sim.state.clone();

        assert!(sim.step().is_err());
        assert_eq!(sim.state, before);
        assert_eq!(sim.tick.0, 1);

        // The retry reports the position the failed tick would have.
        let retry = sim.step().unwrap();
        assert!((retry.latitude - 24.0 / sim.route.segment_length_m(0) * 0.001).abs() < 1e-12);
        assert_eq!(sim.publisher.delivered.len(), 2);
    }

    #[test]
    fn run_ticks_propagates_failure() {
        let mut sim = flaky_sim(vec![3]);
        let result = sim.run_ticks(10);
        assert!(result.is_err());
        assert_eq!(sim.publisher.delivered.len(), 3);
    }

    #[test]
    fn run_resumes_after_failure() {
        let cancel = CancelFlag::new();
        let mut sim = flaky_sim(vec![0]);
        assert!(sim.run(&cancel).is_err());
        assert_eq!(sim.tick.0, 0);

        sim.run_ticks(3).unwrap();
        assert_eq!(sim.publisher.delivered.len(), 3);
        assert_eq!(sim.publisher.delivered[0].latitude, 0.0);
    }
}

// ── Sign-off ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sign_off {
    use super::*;

    #[test]
    fn sign_off_before_any_tick_uses_route_start() {
        let mut sim = recording_sim(StopRegistry::empty());
        let r = sim.sign_off().unwrap();
        assert!(!r.is_active);
        assert_eq!(r.speed, 0.0);
        assert_eq!((r.latitude, r.longitude), (0.0, 0.0));
        assert!(r.heading.abs() < 1e-9);
    }

    #[test]
    fn sign_off_repeats_last_position_inactive() {
        let mut sim = recording_sim(StopRegistry::empty());
        sim.run_ticks(3).unwrap();
        let state = sim.state.clone();

        let r = sim.sign_off().unwrap();
        let last = sim.publisher[2];
        assert_eq!((r.latitude, r.longitude), (last.latitude, last.longitude));
        assert_eq!(r.heading, last.heading);
        assert!(!r.is_active);
        assert_eq!(r.speed, 0.0);
        assert_eq!(sim.state, state);
        assert_eq!(sim.publisher.len(), 4);
    }
}

// ── Report schema ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod report {
    use crate::{FRESHNESS_WINDOW_MS, PositionReport};

    fn sample() -> PositionReport {
        PositionReport {
            latitude:  -12.054858,
            longitude: -77.085862,
            speed:     28.8,
            heading:   97.5,
            is_active: true,
            timestamp: 1_700_000_000_000,
        }
    }

    #[test]
    fn json_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["heading", "isActive", "latitude", "longitude", "speed", "timestamp"]);
        assert_eq!(obj["isActive"], serde_json::Value::Bool(true));
        assert_eq!(obj["timestamp"].as_i64(), Some(1_700_000_000_000));
    }

    #[test]
    fn freshness_window() {
        let r = sample();
        assert!(r.is_fresh(r.timestamp));
        assert!(r.is_fresh(r.timestamp + FRESHNESS_WINDOW_MS - 1));
        assert!(!r.is_fresh(r.timestamp + FRESHNESS_WINDOW_MS));
    }
}
