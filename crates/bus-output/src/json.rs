//! Newline-delimited JSON publisher.

use std::io::{self, Write};

use bus_sim::{PositionReport, Publisher};

use crate::{OutputError, OutputResult};

/// Writes each report as one JSON object per line and flushes immediately,
/// so a downstream reader sees updates live.
pub struct JsonLinesPublisher<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesPublisher<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer after a run).
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, report: &PositionReport) -> OutputResult<()> {
        serde_json::to_writer(&mut self.writer, report)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl JsonLinesPublisher<io::Stdout> {
    /// Publish to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Publisher for JsonLinesPublisher<W> {
    type Error = OutputError;

    fn publish(&mut self, report: &PositionReport) -> OutputResult<()> {
        self.write_line(report)
    }
}
