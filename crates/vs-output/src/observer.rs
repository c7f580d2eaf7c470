//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use vs_core::Day;
use vs_epidemic::Snapshot;
use vs_population::PopulationGraph;
use vs_sim::SimObserver;

use crate::row::{DailySummaryRow, GroupRow, IndividualStateRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the group table once, then per-individual
/// states and a summary row for the starting day and every following day.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run_days()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:         W,
    write_states:   bool,
    groups_written: bool,
    last_day:       Option<Day>,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            write_states:   true,
            groups_written: false,
            last_day:       None,
            last_error:     None,
        }
    }

    /// Skip the per-individual table and write only summaries and groups.
    pub fn summaries_only(mut self) -> Self {
        self.write_states = false;
        self
    }

    /// Take the stored write error (if any) after `sim.run_days()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_groups(&mut self, graph: &PopulationGraph) -> OutputResult<()> {
        let rows: Vec<GroupRow> = graph
            .groups()
            .iter()
            .map(|g| GroupRow {
                group_id:     g.id.0,
                x:            g.location.x,
                y:            g.location.y,
                member_count: graph.group_members(g.id).len() as u32,
            })
            .collect();
        self.writer.write_groups(&rows)
    }

    fn write_day(&mut self, snapshot: &Snapshot, graph: &PopulationGraph) -> OutputResult<()> {
        // A second `run_days` starts from the day the previous one ended on.
        if self.last_day == Some(snapshot.day()) {
            return Ok(());
        }
        self.last_day = Some(snapshot.day());
        let day = snapshot.day().0;

        if self.write_states {
            let rows: Vec<IndividualStateRow> = graph
                .individuals()
                .map(|id| {
                    let home = graph.home_location(id);
                    let state = snapshot.state(id);
                    IndividualStateRow {
                        day,
                        individual_id:  id.0,
                        household_id:   graph.household_of(id).0,
                        x:              home.x,
                        y:              home.y,
                        status:         state.classify(),
                        sick_since_day: IndividualStateRow::sick_since(state),
                    }
                })
                .collect();
            if !rows.is_empty() {
                self.writer.write_individual_states(&rows)?;
            }
        }

        let changes = snapshot.changes();
        let row = DailySummaryRow::new(
            snapshot.summary(),
            changes.infected,
            changes.recovered,
            changes.died,
        );
        self.writer.write_daily_summary(&row)
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_sim_start(&mut self, start: &Snapshot, graph: &PopulationGraph) {
        if !self.groups_written {
            self.groups_written = true;
            let result = self.write_groups(graph);
            self.store_err(result);
        }
        let result = self.write_day(start, graph);
        self.store_err(result);
    }

    fn on_day_end(&mut self, snapshot: &Snapshot, graph: &PopulationGraph) {
        let result = self.write_day(snapshot, graph);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _last: &Snapshot) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
