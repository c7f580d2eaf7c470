//! Simulation observer trait for progress reporting and data collection.

use vs_epidemic::Snapshot;
use vs_population::PopulationGraph;

/// Callbacks invoked by [`Sim::run_days`][crate::Sim::run_days].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct SickCounter;
///
/// impl SimObserver for SickCounter {
///     fn on_day_end(&mut self, snapshot: &Snapshot, _graph: &PopulationGraph) {
///         println!("{}: {} sick", snapshot.day(), snapshot.active_sick().len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first day is advanced, with the snapshot the
    /// run starts from.
    fn on_sim_start(&mut self, _start: &Snapshot, _graph: &PopulationGraph) {}

    /// Called after every daily transition with the new snapshot.
    fn on_day_end(&mut self, _snapshot: &Snapshot, _graph: &PopulationGraph) {}

    /// Called once after the last day of the run.
    fn on_sim_end(&mut self, _last: &Snapshot) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
