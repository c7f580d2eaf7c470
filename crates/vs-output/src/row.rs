//! Plain data row types written by output backends.

use vs_epidemic::{Classification, HealthState, SnapshotSummary};

/// One individual's health on one day, with the home location for plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndividualStateRow {
    pub day:            u32,
    pub individual_id:  u32,
    pub household_id:   u32,
    pub x:              u32,
    pub y:              u32,
    pub status:         Classification,
    /// Day of the current or last infection; `None` if never infected.
    pub sick_since_day: Option<u32>,
}

impl IndividualStateRow {
    pub fn status_str(&self) -> &'static str {
        self.status.as_str()
    }

    pub(crate) fn sick_since(state: &HealthState) -> Option<u32> {
        state.sick_since_day().map(|d| d.0)
    }
}

/// Head counts and transitions for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySummaryRow {
    pub day:            u32,
    pub susceptible:    u32,
    pub sick:           u32,
    pub recovered:      u32,
    pub deceased:       u32,
    pub new_infections: u32,
    pub recoveries:     u32,
    pub deaths:         u32,
}

impl DailySummaryRow {
    pub fn new(summary: SnapshotSummary, infected: u32, recovered: u32, died: u32) -> Self {
        Self {
            day:            summary.day.0,
            susceptible:    summary.susceptible,
            sick:           summary.sick,
            recovered:      summary.recovered,
            deceased:       summary.deceased,
            new_infections: infected,
            recoveries:     recovered,
            deaths:         died,
        }
    }
}

/// A group's fixed location and size, written once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRow {
    pub group_id:     u32,
    pub x:            u32,
    pub y:            u32,
    pub member_count: u32,
}
