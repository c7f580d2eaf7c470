//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DailySummaryRow, GroupRow, IndividualStateRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    /// Write a batch of per-individual states.
    fn write_individual_states(&mut self, rows: &[IndividualStateRow]) -> OutputResult<()>;

    /// Write one daily summary row.
    fn write_daily_summary(&mut self, row: &DailySummaryRow) -> OutputResult<()>;

    /// Write the static group table.
    fn write_groups(&mut self, rows: &[GroupRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
