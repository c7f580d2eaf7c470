//! Per-individual health state.
//!
//! Health is a tagged status rather than a cluster of independent flags, so
//! impossible combinations (a dead individual still incubating, a recovered
//! one with a pending sickness span) cannot be represented.
//!
//! ```text
//! Susceptible ──infect──▶ Sick ──resolve──▶ Recovered ──infect──▶ Sick …
//!                              └──resolve──▶ Deceased (terminal)
//! ```

use vs_core::Day;

/// One infection episode, fixed when the infection happens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Episode {
    /// Day the infection happened.
    pub since:           Day,
    /// Recorded for reporting; infectiousness is uniform over the episode.
    pub incubation_days: u32,
    pub sickness_days:   u32,
    pub will_survive:    bool,
}

impl Episode {
    /// First day on which the episode resolves.
    #[inline]
    pub fn resolves_on(&self) -> Day {
        self.since + self.sickness_days
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HealthStatus {
    #[default]
    Susceptible,
    Sick(Episode),
    /// Recovered individuals can be infected again; the day of their last
    /// infection is kept so they remain distinguishable from the never-sick.
    Recovered { last_sick_since: Day },
    Deceased { sick_since: Day },
}

/// Health of one individual on one day.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HealthState {
    pub status: HealthStatus,
    /// Reserved for a quarantine policy.  Nothing sets or reads it yet.
    pub in_quarantine: bool,
}

impl HealthState {
    pub fn is_alive(&self) -> bool {
        !matches!(self.status, HealthStatus::Deceased { .. })
    }

    pub fn is_sick(&self) -> bool {
        matches!(self.status, HealthStatus::Sick(_))
    }

    /// Alive and not currently sick.
    pub fn can_be_infected(&self) -> bool {
        matches!(self.status, HealthStatus::Susceptible | HealthStatus::Recovered { .. })
    }

    /// Day of the current or most recent infection; `None` if never infected.
    pub fn sick_since_day(&self) -> Option<Day> {
        match self.status {
            HealthStatus::Susceptible => None,
            HealthStatus::Sick(ep) => Some(ep.since),
            HealthStatus::Recovered { last_sick_since } => Some(last_sick_since),
            HealthStatus::Deceased { sick_since } => Some(sick_since),
        }
    }

    /// The running episode, if sick.
    pub fn episode(&self) -> Option<&Episode> {
        match &self.status {
            HealthStatus::Sick(ep) => Some(ep),
            _ => None,
        }
    }

    pub fn incubation_days(&self) -> u32 {
        self.episode().map_or(0, |ep| ep.incubation_days)
    }

    pub fn sickness_days(&self) -> u32 {
        self.episode().map_or(0, |ep| ep.sickness_days)
    }

    /// `false` for the deceased and for a running episode fated to end in
    /// death; `true` otherwise.
    pub fn will_survive(&self) -> bool {
        match self.status {
            HealthStatus::Sick(ep) => ep.will_survive,
            HealthStatus::Deceased { .. } => false,
            HealthStatus::Susceptible | HealthStatus::Recovered { .. } => true,
        }
    }

    pub fn classify(&self) -> Classification {
        match self.status {
            HealthStatus::Susceptible => Classification::Susceptible,
            HealthStatus::Sick(_) => Classification::Sick,
            HealthStatus::Recovered { .. } => Classification::Recovered,
            HealthStatus::Deceased { .. } => Classification::Deceased,
        }
    }
}

/// Coarse category used by renderers and output writers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    Susceptible,
    Sick,
    Recovered,
    Deceased,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Susceptible => "susceptible",
            Classification::Sick => "sick",
            Classification::Recovered => "recovered",
            Classification::Deceased => "deceased",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
