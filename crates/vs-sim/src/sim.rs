//! The `Sim` struct and its day loop.

use std::sync::Arc;

use log::info;

use vs_core::{Configuration, Day, Mitigation, SimRng};
use vs_epidemic::{EpidemicModel, Snapshot};
use vs_population::PopulationGraph;

use crate::{SimObserver, SimResult};

/// The simulation runner.
///
/// Holds the static population graph, the epidemic model bound to it, the
/// run's single RNG stream, and two snapshots: the seeded day-0 state and the
/// latest one.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub(crate) config:     Configuration,
    pub(crate) mitigation: Mitigation,
    pub(crate) graph:      Arc<PopulationGraph>,
    pub(crate) model:      EpidemicModel,
    pub(crate) rng:        SimRng,
    pub(crate) start:      Snapshot,
    pub(crate) current:    Snapshot,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn mitigation(&self) -> &Mitigation {
        &self.mitigation
    }

    /// Replace the mitigation policy for subsequent days.
    pub fn set_mitigation(&mut self, mitigation: Mitigation) {
        self.mitigation = mitigation;
    }

    pub fn graph(&self) -> &PopulationGraph {
        &self.graph
    }

    pub fn model(&self) -> &EpidemicModel {
        &self.model
    }

    /// The seeded day-0 snapshot.
    pub fn starting_state(&self) -> &Snapshot {
        &self.start
    }

    /// The most recent snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    pub fn day(&self) -> Day {
        self.current.day()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one day and return the new snapshot.
    pub fn step(&mut self) -> SimResult<&Snapshot> {
        self.current = self.model.advance(&self.current, &self.mitigation, &mut self.rng)?;
        Ok(&self.current)
    }

    /// Advance `days` days, calling observer hooks around and between them.
    pub fn run_days<O: SimObserver>(&mut self, days: u32, observer: &mut O) -> SimResult<()> {
        info!("running {days} days from {}", self.current.day());
        observer.on_sim_start(&self.current, &self.graph);

        for _ in 0..days {
            self.step()?;
            observer.on_day_end(&self.current, &self.graph);
        }

        let summary = self.current.summary();
        info!(
            "{}: {} susceptible, {} sick, {} recovered, {} deceased",
            summary.day, summary.susceptible, summary.sick, summary.recovered, summary.deceased,
        );
        observer.on_sim_end(&self.current);
        Ok(())
    }
}
