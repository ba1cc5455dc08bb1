//! `bus-sim` — tick loop orchestrator for the busloop GPS simulator.
//!
//! # Tick loop
//!
//! ```text
//! until cancelled:
//!   ① Step     bus_motion::advance(state) → (fix, next_state, events)
//!   ② Publish  PositionReport{fix, clock.now_millis()} → Publisher
//!   ③ Commit   state = next_state      (skipped if ② failed)
//!   ④ Wait     clock.sleep(tick_interval)
//! ```
//!
//! Dwelling at a stop is part of the same loop: every dwell report is its
//! own tick, so the wait between two dwell reports is the same tick interval
//! as between two moving reports.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bus_core::{ManualClock, TrackerConfig};
//! use bus_sim::{CancelFlag, SimBuilder};
//!
//! let mut reports = Vec::new();
//! let mut sim = SimBuilder::new(TrackerConfig::default(), route, &mut reports, ManualClock::new(0))
//!     .stops(stops)
//!     .build()?;
//! sim.run_ticks(100)?;
//! ```

pub mod builder;
pub mod error;
pub mod publisher;
pub mod report;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use publisher::{NoopPublisher, Publisher};
pub use report::{FRESHNESS_WINDOW_MS, PositionReport};
pub use sim::{CancelFlag, Sim};
