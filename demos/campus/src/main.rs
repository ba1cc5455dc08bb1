//! campus — simulated GPS feed for a shuttle circling the university loop.
//!
//! Drives one vehicle around the embedded campus circuit (or a route loaded
//! from CSV), stopping at each of the ten stops, and prints one JSON report
//! per tick to stdout.  Logs go to stderr; set `RUST_LOG=debug` to see every
//! report as it is published.
//!
//! ```text
//! campus --fast --ticks 200 --csv-dir output/campus
//! ```
//!
//! Ctrl-C ends the run after the current tick and publishes a final
//! `isActive = false` report.

mod data;

use std::fs::File;
use std::io::{self, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bus_core::{Clock, ManualClock, SystemClock, TrackerConfig};
use bus_output::{CsvPublisher, JsonLinesPublisher, OutputError};
use bus_route::{Route, StopRegistry, load_route_csv, load_route_reader, load_stops_csv, load_stops_reader};
use bus_sim::{CancelFlag, PositionReport, Publisher, SimBuilder};

#[cfg(feature = "sqlite")]
use bus_output::SqlitePublisher;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "campus", version, about = "Simulated GPS feed for a campus shuttle loop")]
struct Args {
    /// JSON file overriding tracker parameters (speed, interval, radii...).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Route CSV (`lon,lat` header) replacing the built-in campus loop.
    #[arg(long)]
    route: Option<PathBuf>,

    /// Stops CSV (`name,lat,lon` header) replacing the built-in stops.
    #[arg(long)]
    stops: Option<PathBuf>,

    /// Stop after this many reports instead of running until Ctrl-C.
    #[arg(long)]
    ticks: Option<u64>,

    /// Use a virtual clock: timestamps advance by the tick interval but
    /// nothing actually sleeps.
    #[arg(long)]
    fast: bool,

    /// Also append every report to `positions.csv` in this directory.
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Also write reports to this SQLite database.
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: Option<PathBuf>,
}

// ── Outputs ───────────────────────────────────────────────────────────────────

/// Stdout plus whichever file backends were requested.
struct Outputs {
    stdout: JsonLinesPublisher<io::Stdout>,
    csv:    Option<CsvPublisher>,
    #[cfg(feature = "sqlite")]
    sqlite: Option<SqlitePublisher>,
}

impl Outputs {
    fn open(args: &Args) -> Result<Self> {
        let csv = match &args.csv_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
                Some(CsvPublisher::new(dir)?)
            }
            None => None,
        };

        Ok(Self {
            stdout: JsonLinesPublisher::stdout(),
            csv,
            #[cfg(feature = "sqlite")]
            sqlite: args.sqlite.as_deref().map(SqlitePublisher::open).transpose()?,
        })
    }
}

impl Publisher for Outputs {
    type Error = OutputError;

    fn publish(&mut self, report: &PositionReport) -> Result<(), OutputError> {
        self.stdout.publish(report)?;
        if let Some(csv) = &mut self.csv {
            csv.publish(report)?;
        }
        #[cfg(feature = "sqlite")]
        if let Some(db) = &mut self.sqlite {
            db.publish(report)?;
        }
        Ok(())
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<TrackerConfig> {
    let Some(path) = path else {
        return Ok(TrackerConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config: TrackerConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn load_route(path: Option<&Path>) -> Result<Route> {
    let route = match path {
        Some(p) => load_route_csv(p).with_context(|| format!("loading route {}", p.display()))?,
        None => load_route_reader(Cursor::new(data::ROUTE_CSV))?,
    };
    Ok(route)
}

fn load_stops(path: Option<&Path>) -> Result<StopRegistry> {
    let stops = match path {
        Some(p) => load_stops_csv(p).with_context(|| format!("loading stops {}", p.display()))?,
        None => load_stops_reader(Cursor::new(data::STOPS_CSV))?,
    };
    Ok(stops)
}

// ── Run ───────────────────────────────────────────────────────────────────────

struct Inputs {
    config: TrackerConfig,
    route:  Route,
    stops:  StopRegistry,
}

/// Run the simulation with `clock` until the tick limit or Ctrl-C, then sign
/// off.  Returns the number of active reports published.
fn drive<C: Clock>(
    inputs:  Inputs,
    outputs: Outputs,
    clock:   C,
    ticks:   Option<u64>,
    cancel:  &CancelFlag,
) -> Result<u64> {
    let interval = inputs.config.tick_interval();
    let mut sim = SimBuilder::new(inputs.config, inputs.route, outputs, clock)
        .stops(inputs.stops)
        .build()?;

    let published = match ticks {
        Some(limit) => {
            let mut n = 0;
            while n < limit && !cancel.is_cancelled() {
                sim.step()?;
                n += 1;
                if n < limit {
                    sim.clock.sleep(interval);
                }
            }
            n
        }
        None => sim.run(cancel)?,
    };

    sim.sign_off()?;
    Ok(published)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // 1. Inputs.
    let config = load_config(args.config.as_deref())?;
    let route = load_route(args.route.as_deref())?;
    let stops = load_stops(args.stops.as_deref())?;
    info!(
        waypoints = route.waypoints().len(),
        length_m  = route.total_length_m().round(),
        stops     = stops.len(),
        speed_kmh = config.cruise_speed_kmh(),
        "route loaded"
    );

    // 2. Outputs.
    let outputs = Outputs::open(&args)?;

    // 3. Ctrl-C.
    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();
    ctrlc::set_handler(move || handler_flag.cancel())
        .context("failed to set Ctrl-C handler")?;

    // 4. Run.
    let t0 = Instant::now();
    let inputs = Inputs { config, route, stops };
    let published = if args.fast {
        let start = match inputs.config.start_unix_millis {
            0 => SystemClock.now_millis(),
            ms => ms,
        };
        drive(inputs, outputs, ManualClock::new(start), args.ticks, &cancel)?
    } else {
        drive(inputs, outputs, SystemClock, args.ticks, &cancel)?
    };

    info!(
        reports   = published,
        elapsed_s = t0.elapsed().as_secs_f64(),
        "run complete"
    );
    Ok(())
}
