//! CSV route and stop loaders.
//!
//! # Route CSV
//!
//! One row per waypoint, in travel order.  Longitude comes first, matching
//! GeoJSON-style `[lon, lat]` pairs that route exports usually carry:
//!
//! ```csv
//! lon,lat
//! -77.085862,-12.054858
//! -77.085402,-12.054911
//! -77.085862,-12.054858
//! ```
//!
//! A file whose last row differs from its first is closed automatically (see
//! [`Route::closed`]).
//!
//! # Stops CSV
//!
//! One row per stop.  Row order is the match priority of the registry.
//!
//! ```csv
//! name,lat,lon
//! Odontología,-12.054874,-77.085864
//! Plaza Cívica,-12.056032,-77.084961
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use bus_core::Coordinate;

use crate::{Route, RouteError, RouteResult, StopRegistry};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WaypointRecord {
    lon: f64,
    lat: f64,
}

#[derive(Deserialize)]
struct StopRecord {
    name: String,
    lat:  f64,
    lon:  f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a closed [`Route`] from a CSV file.
pub fn load_route_csv(path: &Path) -> RouteResult<Route> {
    let file = std::fs::File::open(path)?;
    load_route_reader(file)
}

/// Like [`load_route_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for routes embedded in
/// the binary.
pub fn load_route_reader<R: Read>(reader: R) -> RouteResult<Route> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let waypoints = csv_reader
        .deserialize::<WaypointRecord>()
        .map(|row| {
            row.map(|r| Coordinate::new(r.lat, r.lon))
                .map_err(|e| RouteError::Parse(e.to_string()))
        })
        .collect::<RouteResult<Vec<_>>>()?;

    Route::closed(waypoints)
}

/// Load a [`StopRegistry`] from a CSV file.
pub fn load_stops_csv(path: &Path) -> RouteResult<StopRegistry> {
    let file = std::fs::File::open(path)?;
    load_stops_reader(file)
}

/// Like [`load_stops_csv`] but accepts any `Read` source.
pub fn load_stops_reader<R: Read>(reader: R) -> RouteResult<StopRegistry> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let stops = csv_reader
        .deserialize::<StopRecord>()
        .map(|row| {
            row.map(|r| (r.name, Coordinate::new(r.lat, r.lon)))
                .map_err(|e| RouteError::Parse(e.to_string()))
        })
        .collect::<RouteResult<Vec<_>>>()?;

    StopRegistry::new(stops)
}
