//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `individual_states.csv`
//! - `daily_summaries.csv`
//! - `groups.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{DailySummaryRow, GroupRow, IndividualStateRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    states:    Writer<File>,
    summaries: Writer<File>,
    groups:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut states = Writer::from_path(dir.join("individual_states.csv"))?;
        states.write_record([
            "day", "individual_id", "household_id", "x", "y", "status", "sick_since_day",
        ])?;

        let mut summaries = Writer::from_path(dir.join("daily_summaries.csv"))?;
        summaries.write_record([
            "day", "susceptible", "sick", "recovered", "deceased",
            "new_infections", "recoveries", "deaths",
        ])?;

        let mut groups = Writer::from_path(dir.join("groups.csv"))?;
        groups.write_record(["group_id", "x", "y", "member_count"])?;

        Ok(Self {
            states,
            summaries,
            groups,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_individual_states(&mut self, rows: &[IndividualStateRow]) -> OutputResult<()> {
        for row in rows {
            self.states.write_record(&[
                row.day.to_string(),
                row.individual_id.to_string(),
                row.household_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.status_str().to_owned(),
                row.sick_since_day.map(|d| d.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_daily_summary(&mut self, row: &DailySummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.day.to_string(),
            row.susceptible.to_string(),
            row.sick.to_string(),
            row.recovered.to_string(),
            row.deceased.to_string(),
            row.new_infections.to_string(),
            row.recoveries.to_string(),
            row.deaths.to_string(),
        ])?;
        Ok(())
    }

    fn write_groups(&mut self, rows: &[GroupRow]) -> OutputResult<()> {
        for row in rows {
            self.groups.write_record(&[
                row.group_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.member_count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.states.flush()?;
        self.summaries.flush()?;
        self.groups.flush()?;
        Ok(())
    }
}
