//! SQLite output backend (feature `sqlite`).
//!
//! Creates two tables: `position_history` (every report, in publish order)
//! and `latest_position` (a single row, overwritten on each publish).

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use bus_sim::{PositionReport, Publisher};

use crate::{OutputError, OutputResult};

/// Writes reports to an SQLite database.
pub struct SqlitePublisher {
    conn: Connection,
}

impl SqlitePublisher {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> OutputResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Use an existing connection (e.g. `Connection::open_in_memory()`).
    pub fn with_connection(conn: Connection) -> OutputResult<Self> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS position_history (
                 seq       INTEGER PRIMARY KEY AUTOINCREMENT,
                 latitude  REAL    NOT NULL,
                 longitude REAL    NOT NULL,
                 speed     REAL    NOT NULL,
                 heading   REAL    NOT NULL,
                 is_active INTEGER NOT NULL,
                 timestamp INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS latest_position (
                 id        INTEGER PRIMARY KEY CHECK (id = 0),
                 latitude  REAL    NOT NULL,
                 longitude REAL    NOT NULL,
                 speed     REAL    NOT NULL,
                 heading   REAL    NOT NULL,
                 is_active INTEGER NOT NULL,
                 timestamp INTEGER NOT NULL
             );",
        )?;
        Ok(Self { conn })
    }

    /// The row consumers would read right now, if anything was published.
    pub fn latest(&self) -> OutputResult<Option<PositionReport>> {
        let row = self
            .conn
            .query_row(
                "SELECT latitude, longitude, speed, heading, is_active, timestamp \
                 FROM latest_position WHERE id = 0",
                [],
                |r| {
                    Ok(PositionReport {
                        latitude:  r.get(0)?,
                        longitude: r.get(1)?,
                        speed:     r.get(2)?,
                        heading:   r.get(3)?,
                        is_active: r.get::<_, i64>(4)? != 0,
                        timestamp: r.get(5)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// Number of rows in `position_history`.
    pub fn history_len(&self) -> OutputResult<u64> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM position_history", [], |r| r.get(0))?;
        Ok(n as u64)
    }
}

impl Publisher for SqlitePublisher {
    type Error = OutputError;

    fn publish(&mut self, report: &PositionReport) -> OutputResult<()> {
        let is_active = report.is_active as i64;
        let params = rusqlite::params![
            report.latitude,
            report.longitude,
            report.speed,
            report.heading,
            is_active,
            report.timestamp,
        ];

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO position_history \
             (latitude, longitude, speed, heading, is_active, timestamp) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params,
        )?;
        tx.execute(
            "INSERT INTO latest_position \
             (id, latitude, longitude, speed, heading, is_active, timestamp) \
             VALUES (0, ?1, ?2, ?3, ?4, ?5, ?6) \
             ON CONFLICT(id) DO UPDATE SET \
                 latitude  = excluded.latitude, \
                 longitude = excluded.longitude, \
                 speed     = excluded.speed, \
                 heading   = excluded.heading, \
                 is_active = excluded.is_active, \
                 timestamp = excluded.timestamp",
            params,
        )?;
        tx.commit()?;
        Ok(())
    }
}
