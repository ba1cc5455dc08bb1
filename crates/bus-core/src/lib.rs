//! `bus-core` — foundational types for the `busloop` GPS vehicle simulator.
//!
//! This crate is a dependency of every other `bus-*` crate.  It has no
//! `bus-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`geo`]    | `Coordinate`, haversine distance, initial bearing, lerp    |
//! | [`ids`]    | `StopId`                                                   |
//! | [`time`]   | `Tick`, `Clock`, `SystemClock`, `ManualClock`              |
//! | [`config`] | `TrackerConfig`                                            |
//! | [`error`]  | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TrackerConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, distance_m, initial_bearing_deg};
pub use ids::StopId;
pub use time::{Clock, ManualClock, SystemClock, Tick};
