//! viruspread — run the epidemic model from the command line.
//!
//! Builds a population from the reference scenario (or a JSON configuration),
//! seeds the initial infections, advances `--days` days and prints a daily
//! head count.  With `--output DIR` the run is also exported as CSV for
//! plotting.

mod logging;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use vs_core::{Configuration, Mitigation};
use vs_epidemic::Snapshot;
use vs_output::{CsvWriter, OutputWriter, SimOutputObserver};
use vs_population::PopulationGraph;
use vs_sim::{SimBuilder, SimObserver};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(version, about = "Spatial epidemic simulation over households and social groups")]
struct Args {
    /// JSON configuration file; the reference scenario is used if omitted.
    /// `reference.json` next to this crate spells that scenario out.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of days to simulate.
    #[arg(short, long, default_value_t = 30)]
    days: u32,

    /// Seed for the single RNG stream.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Directory for CSV output (created if missing).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write only daily summaries and groups, not per-individual states.
    #[arg(long)]
    summaries_only: bool,

    #[arg(long, default_value_t = 20)]
    max_group_size: u32,

    #[arg(long, default_value_t = 14)]
    quarantine_days: u32,

    #[arg(long, default_value_t = 1000)]
    inspections_per_day: u32,

    /// off, error, warn, info, debug, or trace.
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

// ── Observers ─────────────────────────────────────────────────────────────────

/// Prints one line per day and forwards every hook to an optional writer.
struct DailyReport<W: OutputWriter> {
    output: Option<SimOutputObserver<W>>,
}

impl<W: OutputWriter> SimObserver for DailyReport<W> {
    fn on_sim_start(&mut self, start: &Snapshot, graph: &PopulationGraph) {
        print_day(start);
        if let Some(out) = self.output.as_mut() {
            out.on_sim_start(start, graph);
        }
    }

    fn on_day_end(&mut self, snapshot: &Snapshot, graph: &PopulationGraph) {
        print_day(snapshot);
        if let Some(out) = self.output.as_mut() {
            out.on_day_end(snapshot, graph);
        }
    }

    fn on_sim_end(&mut self, last: &Snapshot) {
        if let Some(out) = self.output.as_mut() {
            out.on_sim_end(last);
        }
    }
}

fn print_day(snapshot: &Snapshot) {
    let s = snapshot.summary();
    let c = snapshot.changes();
    println!(
        "{:>4} {:>11} {:>6} {:>9} {:>8}   +{:<4} -{:<4} †{}",
        s.day.0, s.susceptible, s.sick, s.recovered, s.deceased,
        c.infected, c.recovered, c.died,
    );
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level)?;

    let config = match &args.config {
        Some(path) => Configuration::from_json_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Configuration::reference_scenario(),
    };
    let mitigation = Mitigation::new(
        args.max_group_size,
        args.quarantine_days,
        args.inspections_per_day,
    );

    println!("=== viruspread ===");
    println!(
        "Population: {}  |  Initially sick: {}  |  Area: {} × {} km  |  Days: {}  |  Seed: {}",
        config.population_size, config.starting_sick, config.x_km, config.y_km, args.days, args.seed,
    );
    println!();

    let t0 = Instant::now();
    let mut sim = SimBuilder::new(config)
        .seed(args.seed)
        .mitigation(mitigation)
        .build()?;
    info!("population built in {:.3} s", t0.elapsed().as_secs_f64());

    println!(
        "Households: {}  |  Groups: {}  |  Memberships: {}",
        sim.graph().household_count(),
        sim.graph().group_count(),
        sim.graph().membership_count(),
    );
    println!();
    println!(" day susceptible   sick recovered deceased   changes");
    println!("{}", "-".repeat(56));

    let output = match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let obs = SimOutputObserver::new(CsvWriter::new(dir)?);
            Some(if args.summaries_only { obs.summaries_only() } else { obs })
        }
        None => None,
    };

    let t1 = Instant::now();
    let mut report = DailyReport { output };
    sim.run_days(args.days, &mut report)?;
    let elapsed = t1.elapsed();

    if let Some(e) = report.output.as_mut().and_then(|o| o.take_error()) {
        eprintln!("output error: {e}");
    }

    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    if let Some(dir) = &args.output {
        println!("CSV written to {}", dir.display());
    }
    Ok(())
}
