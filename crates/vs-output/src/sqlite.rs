//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `individual_states`, `daily_summaries`, and `groups`.

use std::path::Path;

use rusqlite::Connection;

use crate::{DailySummaryRow, GroupRow, IndividualStateRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS individual_states (
                 day            INTEGER NOT NULL,
                 individual_id  INTEGER NOT NULL,
                 household_id   INTEGER NOT NULL,
                 x              INTEGER NOT NULL,
                 y              INTEGER NOT NULL,
                 status         TEXT    NOT NULL,
                 sick_since_day INTEGER
             );
             CREATE TABLE IF NOT EXISTS daily_summaries (
                 day            INTEGER PRIMARY KEY,
                 susceptible    INTEGER NOT NULL,
                 sick           INTEGER NOT NULL,
                 recovered      INTEGER NOT NULL,
                 deceased       INTEGER NOT NULL,
                 new_infections INTEGER NOT NULL,
                 recoveries     INTEGER NOT NULL,
                 deaths         INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS groups (
                 group_id     INTEGER PRIMARY KEY,
                 x            INTEGER NOT NULL,
                 y            INTEGER NOT NULL,
                 member_count INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_individual_states(&mut self, rows: &[IndividualStateRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO individual_states \
                 (day, individual_id, household_id, x, y, status, sick_since_day) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.day,
                    row.individual_id,
                    row.household_id,
                    row.x,
                    row.y,
                    row.status_str(),
                    row.sick_since_day,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_daily_summary(&mut self, row: &DailySummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO daily_summaries \
             (day, susceptible, sick, recovered, deceased, new_infections, recoveries, deaths) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                row.day,
                row.susceptible,
                row.sick,
                row.recovered,
                row.deceased,
                row.new_infections,
                row.recoveries,
                row.deaths,
            ],
        )?;
        Ok(())
    }

    fn write_groups(&mut self, rows: &[GroupRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO groups (group_id, x, y, member_count) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.group_id, row.x, row.y, row.member_count])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
