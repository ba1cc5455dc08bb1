//! The step function: one call produces exactly one report's worth of motion.

use bus_core::{Coordinate, StopId, TrackerConfig};
use bus_route::{Route, StopRegistry};

use crate::{Phase, TraversalState};

/// Where the vehicle is and how it is moving at the moment of a report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub position:    Coordinate,
    pub heading_deg: f64,
    pub speed_kmh:   f64,
}

/// Notable transitions that happened during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEvent {
    /// Normalisation ran off the last segment and restarted at segment 0.
    LapCompleted,
    /// A dwell began at this stop (this step's fix is the first dwell fix).
    ArrivedAt(StopId),
    /// The last dwell fix was emitted; the vehicle pulls away next step.
    DepartedFrom(StopId),
}

/// Result of [`advance`]: the fix to report and the state to commit once the
/// report has been delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub fix:    Fix,
    pub next:   TraversalState,
    pub events: Vec<MotionEvent>,
}

/// Compute one step of the moving/dwelling state machine.
///
/// ```text
/// Moving ──(unvisited stop within radius)──▶ Dwelling{reports_left = N-1}
///   │                                             │
///   └──(otherwise: +cruise distance)──▶ Moving    └─(last fix)─▶ Moving
///                                                   last_visited = stop
///                                                   distance += push
/// ```
///
/// Pure: `state` is not modified.  Degenerate geometry (zero-length
/// segments, coincident points) never fails; see [`normalize`].
pub fn advance(
    state:  &TraversalState,
    route:  &Route,
    stops:  &StopRegistry,
    config: &TrackerConfig,
) -> Step {
    let mut next = state.clone();
    let mut events = Vec::new();

    let fix = match state.phase {
        Phase::Dwelling { stop, location, reports_left } => {
            let i = next.segment_index.min(route.segment_count() - 1);
            let heading_deg = route.segment_heading_deg(i);
            let remaining = reports_left.saturating_sub(1);
            if remaining == 0 {
                finish_dwell(&mut next, stop, config);
                events.push(MotionEvent::DepartedFrom(stop));
            } else {
                next.phase = Phase::Dwelling { stop, location, reports_left: remaining };
            }
            Fix { position: location, heading_deg, speed_kmh: 0.0 }
        }

        Phase::Moving => {
            if normalize(&mut next, route) {
                events.push(MotionEvent::LapCompleted);
            }

            let i = next.segment_index;
            let (p1, p2) = route.segment(i);
            let length = route.segment_length_m(i);
            let heading_deg = route.segment_heading_deg(i);

            let frac = if length > 0.0 { next.distance_into_segment_m / length } else { 0.0 };
            let position = p1.lerp(p2, frac);

            match stops.find_nearby(position) {
                Some(stop) if Some(stop.id) != next.last_visited_stop => {
                    events.push(MotionEvent::ArrivedAt(stop.id));
                    if config.dwell_reports <= 1 {
                        finish_dwell(&mut next, stop.id, config);
                        events.push(MotionEvent::DepartedFrom(stop.id));
                    } else {
                        next.phase = Phase::Dwelling {
                            stop:         stop.id,
                            location:     stop.location,
                            reports_left: config.dwell_reports - 1,
                        };
                    }
                    Fix { position: stop.location, heading_deg, speed_kmh: 0.0 }
                }
                // No stop, or the one we just left: keep driving.
                _ => {
                    next.distance_into_segment_m += config.distance_per_tick_m();
                    Fix { position, heading_deg, speed_kmh: config.cruise_speed_kmh() }
                }
            }
        }
    };

    Step { fix, next, events }
}

/// Leave a stop: remember it and push past its detection radius.
fn finish_dwell(state: &mut TraversalState, stop: StopId, config: &TrackerConfig) {
    state.phase = Phase::Moving;
    state.last_visited_stop = Some(stop);
    state.distance_into_segment_m += config.dwell_push_m;
}

/// Consume whole segments until `distance_into_segment_m` falls inside the
/// current one.
///
/// Running off the last segment wraps to segment 0 and resets the distance to
/// zero (the leftover is dropped).  Zero-length segments are skipped
/// unconditionally.  Terminates because a `Route` always has non-zero total
/// length, so after a wrap some segment is longer than the zero distance.
///
/// Returns `true` if a lap was completed.
pub fn normalize(state: &mut TraversalState, route: &Route) -> bool {
    let count = route.segment_count();
    let mut lapped = false;

    // State built against a longer route: restart cleanly.
    if state.segment_index >= count {
        state.segment_index = 0;
        state.distance_into_segment_m = 0.0;
    }

    loop {
        let length = route.segment_length_m(state.segment_index);
        if state.distance_into_segment_m < length {
            break;
        }
        state.distance_into_segment_m -= length;
        state.segment_index += 1;
        if state.segment_index >= count {
            state.segment_index = 0;
            state.distance_into_segment_m = 0.0;
            lapped = true;
        }
    }

    lapped
}
