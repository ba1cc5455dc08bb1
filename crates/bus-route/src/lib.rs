//! `bus-route` — the closed route and the stops along it.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`route`]  | `Route`: closed waypoint loop with per-segment length/heading |
//! | [`stops`]  | `Stop`, `StopRegistry`: named stops + proximity lookup      |
//! | [`loader`] | `load_route_csv`, `load_stops_csv` and their reader variants |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                               |
//!
//! Both `Route` and `StopRegistry` are validated at construction and never
//! mutated afterwards.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Propagates serde derives to `bus-core` types.                |

pub mod error;
pub mod loader;
pub mod route;
pub mod stops;


pub use error::{RouteError, RouteResult};
pub use loader::{load_route_csv, load_route_reader, load_stops_csv, load_stops_reader};
pub use route::Route;
pub use stops::{DEFAULT_STOP_RADIUS_M, Stop, StopRegistry};
