//! `bus-motion` — traversal state and the per-tick step function.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`state`]  | `TraversalState`, `Phase`: segment, offset, stop memory        |
//! | [`engine`] | `advance`, `normalize`, `Step`, `Fix`, `MotionEvent`            |
//!
//! # Movement model (fixed distance per tick)
//!
//! 1. `normalize` consumes whole segments until the offset lies inside the
//!    current one, wrapping to segment 0 at the end of the loop.
//! 2. The position is interpolated linearly between the segment endpoints.
//! 3. An unvisited stop within the registry radius starts a dwell of
//!    `dwell_reports` stationary fixes; afterwards the vehicle is pushed
//!    `dwell_push_m` forward so it does not immediately re-detect the stop.
//! 4. Otherwise the fix is reported at cruise speed and the offset grows by
//!    `cruise_speed_mps × tick_interval_secs`.
//!
//! `advance` is pure, so a caller whose publish fails can simply drop the
//! returned state and retry the same step on the next tick.

pub mod engine;
pub mod state;


pub use engine::{Fix, MotionEvent, Step, advance, normalize};
pub use state::{Phase, TraversalState};
