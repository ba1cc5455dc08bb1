//! CSV output backend.
//!
//! Appends every report to `positions.csv` in the configured directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use bus_sim::{PositionReport, Publisher};

use crate::{OutputError, OutputResult};

/// File name created inside the output directory.
pub const POSITIONS_FILE: &str = "positions.csv";

/// Writes one CSV row per report.
pub struct CsvPublisher {
    writer: Writer<File>,
}

impl CsvPublisher {
    /// Create (or truncate) `positions.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut writer = Writer::from_path(dir.join(POSITIONS_FILE))?;
        writer.write_record(["latitude", "longitude", "speed", "heading", "is_active", "timestamp"])?;
        writer.flush()?;
        Ok(Self { writer })
    }
}

impl Publisher for CsvPublisher {
    type Error = OutputError;

    fn publish(&mut self, report: &PositionReport) -> OutputResult<()> {
        self.writer.write_record(&[
            report.latitude.to_string(),
            report.longitude.to_string(),
            report.speed.to_string(),
            report.heading.to_string(),
            (report.is_active as u8).to_string(),
            report.timestamp.to_string(),
        ])?;
        // Flush per report: the file doubles as a live feed.
        self.writer.flush()?;
        Ok(())
    }
}
