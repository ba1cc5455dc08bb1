//! The `Sim` struct and its tick loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use bus_core::{Clock, Tick, TrackerConfig};
use bus_motion::{Fix, MotionEvent, TraversalState, advance};
use bus_route::{Route, StopRegistry};

use crate::{PositionReport, Publisher, SimError, SimResult};

// ── CancelFlag ────────────────────────────────────────────────────────────────

/// Cooperative stop request, checked between ticks.
///
/// Clone it into a signal handler; [`Sim::run`] returns after the tick in
/// progress has finished, so the traversal state is never left half-updated.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner for one vehicle.
///
/// Each tick:
///
/// 1. **Step**: [`bus_motion::advance`] computes the next fix and the state
///    to commit.
/// 2. **Publish**: the fix is stamped with `clock.now_millis()` and handed
///    to the publisher.
/// 3. **Commit**: only if publishing succeeded is the new state kept.
/// 4. **Wait**: [`run`][Self::run] and [`run_ticks`][Self::run_ticks] sleep
///    one tick interval on the clock before the next step.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Publisher, C: Clock> {
    /// Speed, cadence, and dwell parameters.
    pub config: TrackerConfig,

    /// The closed loop being driven.  Read-only.
    pub route: Route,

    /// Stops along the loop, radius already set from `config`.  Read-only.
    pub stops: StopRegistry,

    /// Current traversal state.  Only replaced at tick boundaries.
    pub state: TraversalState,

    /// Sequence number of the next report.
    pub tick: Tick,

    /// Where reports go.
    pub publisher: P,

    /// Timestamps and inter-tick waits.
    pub clock: C,

    /// Fix of the most recently delivered report.
    pub(crate) last_fix: Option<Fix>,
}

impl<P: Publisher, C: Clock> Sim<P, C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `cancel` is set or a publish fails.
    ///
    /// Returns the number of reports delivered.  On a publish error the
    /// state is unchanged, so calling `run` again resumes with a retry of the
    /// failed tick.
    pub fn run(&mut self, cancel: &CancelFlag) -> SimResult<u64> {
        let start = self.tick;
        while !cancel.is_cancelled() {
            self.step()?;
            self.clock.sleep(self.config.tick_interval());
        }
        info!(reports = self.tick.since(start), "simulation cancelled");
        Ok(self.tick.since(start))
    }

    /// Run exactly `n` ticks (each followed by a wait).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks(&mut self, n: u64) -> SimResult<()> {
        for _ in 0..n {
            self.step()?;
            self.clock.sleep(self.config.tick_interval());
        }
        Ok(())
    }

    /// Compute, publish, and commit one tick without waiting afterwards.
    pub fn step(&mut self) -> SimResult<PositionReport> {
        let tick = self.tick;
        let step = advance(&self.state, &self.route, &self.stops, &self.config);
        let report = PositionReport::from_fix(&step.fix, self.clock.now_millis());

        self.deliver(tick, &report)?;

        for event in &step.events {
            self.log_event(*event);
        }
        debug!(
            %tick,
            lat     = report.latitude,
            lon     = report.longitude,
            heading = report.heading,
            speed   = report.speed,
            "position report"
        );

        self.state = step.next;
        self.last_fix = Some(step.fix);
        self.tick = tick + 1;
        Ok(report)
    }

    /// Publish a final `isActive = false` report at the last known position
    /// so consumers can mark the vehicle offline right away.
    ///
    /// Does not change the traversal state.
    pub fn sign_off(&mut self) -> SimResult<PositionReport> {
        let tick = self.tick;
        let fix = self.last_fix.unwrap_or_else(|| {
            let (start, next) = self.route.segment(0);
            Fix {
                position:    start,
                heading_deg: start.initial_bearing_deg(next),
                speed_kmh:   0.0,
            }
        });

        let report = PositionReport {
            speed:     0.0,
            is_active: false,
            ..PositionReport::from_fix(&fix, self.clock.now_millis())
        };
        self.deliver(tick, &report)?;
        info!(%tick, "signed off");

        self.tick = tick + 1;
        Ok(report)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn deliver(&mut self, tick: Tick, report: &PositionReport) -> SimResult<()> {
        self.publisher.publish(report).map_err(|e| {
            warn!(%tick, error = %e, "publish failed; traversal state not advanced");
            SimError::Publish { tick, source: Box::new(e) }
        })
    }

    fn log_event(&self, event: MotionEvent) {
        match event {
            MotionEvent::ArrivedAt(id) => {
                let name = self.stops.get(id).map_or("?", |s| s.name.as_str());
                info!(stop = name, reports = self.config.dwell_reports, "arrived at stop");
            }
            MotionEvent::DepartedFrom(id) => {
                let name = self.stops.get(id).map_or("?", |s| s.name.as_str());
                info!(stop = name, "departing stop");
            }
            MotionEvent::LapCompleted => {
                info!(tick = %self.tick, "lap completed");
            }
        }
    }
}
