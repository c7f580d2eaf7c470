//! Per-day population snapshots.
//!
//! A `Snapshot` owns everything that changes from day to day: the day number,
//! one `HealthState` per individual, and the set of individuals currently
//! sick.  The population graph is not part of it; snapshots are plain values
//! and the model clones the previous one to produce the next.
//!
//! Invariant: `active_sick` holds exactly the individuals whose status is
//! `HealthStatus::Sick`.  Every mutation goes through [`Snapshot::set_status`],
//! which keeps the two in step.

use std::collections::BTreeSet;

use vs_core::{Day, IndividualId};

use crate::{Classification, EpidemicError, EpidemicResult, HealthState, HealthStatus};

/// Transitions that happened while producing a snapshot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DayChanges {
    pub infected:  u32,
    pub recovered: u32,
    pub died:      u32,
}

/// Head counts per [`Classification`] on one day.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub day:         Day,
    pub susceptible: u32,
    pub sick:        u32,
    pub recovered:   u32,
    pub deceased:    u32,
}

impl SnapshotSummary {
    pub fn alive(&self) -> u32 {
        self.susceptible + self.sick + self.recovered
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    day:         Day,
    health:      Vec<HealthState>,
    active_sick: BTreeSet<IndividualId>,
    changes:     DayChanges,
}

impl Snapshot {
    /// Day 0 with every individual susceptible.
    pub fn initial(individual_count: usize) -> Self {
        Self {
            day:         Day::ZERO,
            health:      vec![HealthState::default(); individual_count],
            active_sick: BTreeSet::new(),
            changes:     DayChanges::default(),
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn len(&self) -> usize {
        self.health.len()
    }

    pub fn is_empty(&self) -> bool {
        self.health.is_empty()
    }

    /// Health states indexed by `IndividualId`.
    pub fn health(&self) -> &[HealthState] {
        &self.health
    }

    /// # Panics
    /// Panics if `id` is outside the population.
    #[inline]
    pub fn state(&self, id: IndividualId) -> &HealthState {
        &self.health[id.index()]
    }

    #[inline]
    pub fn status(&self, id: IndividualId) -> HealthStatus {
        self.health[id.index()].status
    }

    /// Individuals currently sick, ascending.
    pub fn active_sick(&self) -> &BTreeSet<IndividualId> {
        &self.active_sick
    }

    #[inline]
    pub fn is_sick(&self, id: IndividualId) -> bool {
        self.active_sick.contains(&id)
    }

    pub fn classify(&self, id: IndividualId) -> Classification {
        self.health[id.index()].classify()
    }

    /// Transitions recorded while this snapshot was produced.
    pub fn changes(&self) -> DayChanges {
        self.changes
    }

    pub fn summary(&self) -> SnapshotSummary {
        let mut s = SnapshotSummary { day: self.day, ..SnapshotSummary::default() };
        for state in &self.health {
            match state.classify() {
                Classification::Susceptible => s.susceptible += 1,
                Classification::Sick => s.sick += 1,
                Classification::Recovered => s.recovered += 1,
                Classification::Deceased => s.deceased += 1,
            }
        }
        s
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Overwrite one individual's status, keeping the active-sick set in step.
    ///
    /// The model uses this for every transition; callers may use it to set up
    /// a scenario before handing the snapshot to the model.
    pub fn set_status(&mut self, id: IndividualId, status: HealthStatus) -> EpidemicResult<()> {
        let state = self
            .health
            .get_mut(id.index())
            .ok_or(EpidemicError::UnknownIndividual(id))?;
        state.status = status;
        if matches!(status, HealthStatus::Sick(_)) {
            self.active_sick.insert(id);
        } else {
            self.active_sick.remove(&id);
        }
        Ok(())
    }

    /// Clone into the next day's working copy with the day advanced and the
    /// change counters reset.
    pub(crate) fn next_day(&self) -> Snapshot {
        Snapshot {
            day:         self.day.next(),
            health:      self.health.clone(),
            active_sick: self.active_sick.clone(),
            changes:     DayChanges::default(),
        }
    }

    pub(crate) fn changes_mut(&mut self) -> &mut DayChanges {
        &mut self.changes
    }
}
