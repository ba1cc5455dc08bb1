//! `bus-output` — publisher backends for the busloop simulator.
//!
//! | Feature   | Backend      | Destination                                  |
//! |-----------|--------------|----------------------------------------------|
//! | *(none)*  | JSON lines   | any `io::Write` (stdout by default)          |
//! | *(none)*  | CSV          | `positions.csv`                              |
//! | `sqlite`  | SQLite       | `position_history` + `latest_position` tables |
//!
//! Every backend implements `bus_sim::Publisher` with
//! [`OutputError`] as its error type, so any of them can be handed straight
//! to `SimBuilder::new`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bus_output::CsvPublisher;
//!
//! let publisher = CsvPublisher::new(Path::new("./output"))?;
//! let mut sim = SimBuilder::new(config, route, publisher, SystemClock).build()?;
//! sim.run(&cancel)?;
//! ```

pub mod csv;
pub mod error;
pub mod json;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use self::csv::{CsvPublisher, POSITIONS_FILE};
pub use error::{OutputError, OutputResult};
pub use json::JsonLinesPublisher;

#[cfg(feature = "sqlite")]
pub use sqlite::SqlitePublisher;
