//! Model configuration and mitigation policy.
//!
//! `Configuration` is a flat bag of statistical parameters.  It can be built
//! in-process or loaded from a JSON document in which every field is required:
//!
//! ```json
//! {
//!   "population_size": 100, "starting_sick": 2, "x_km": 20, "y_km": 30,
//!   "average_family_size": 3.1, "stdv_family_size": 2.0,
//!   "infection_probability_per_minute": 0.001, "death_rate": 0.03,
//!   "average_incubation_days": 5.1, "stdv_incubation_days": 1.52,
//!   "average_sickness_days": 14.0, "stdv_sickness_days": 3.0,
//!   "average_friend_group_count": 2.0, "stdv_friend_group_count": 0.3,
//!   "average_group_size": 3.0, "stdv_group_size": 1.0,
//!   "average_friend_meeting_minutes": 60.0, "stdv_friend_meeting_minutes": 20.0,
//!   "average_group_meetings_per_day": 0.7, "stdv_group_meetings_per_day": 0.2
//! }
//! ```
//!
//! Call [`Configuration::validate`] (or [`Configuration::distributions`],
//! which validates first) before building a population.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rng::round_count;
use crate::{ConfigError, ConfigResult, ParamNormal};

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    /// Number of individuals.  Must be non-zero.
    pub population_size: u32,
    /// Number of initial infection draws.  Draws may repeat, so the number of
    /// distinct initially sick individuals can be smaller.
    pub starting_sick: u32,

    /// Bounding box width; locations are integers in `[0, x_km)`.
    pub x_km: u32,
    /// Bounding box height; locations are integers in `[0, y_km)`.
    pub y_km: u32,

    pub average_family_size: f64,
    pub stdv_family_size:    f64,

    /// Per-minute probability that one sick contact infects one susceptible.
    pub infection_probability_per_minute: f64,
    /// Probability that an infection ends in death.
    pub death_rate: f64,

    pub average_incubation_days: f64,
    pub stdv_incubation_days:    f64,
    pub average_sickness_days:   f64,
    pub stdv_sickness_days:      f64,

    /// Mean number of groups an individual wants to belong to.  Zero means
    /// no groups are created at all.
    pub average_friend_group_count: f64,
    pub stdv_friend_group_count:    f64,
    pub average_group_size:         f64,
    /// Accepted for completeness; group membership is driven by proximity,
    /// not by a sampled group size.
    pub stdv_group_size:            f64,

    pub average_friend_meeting_minutes: f64,
    pub stdv_friend_meeting_minutes:    f64,
    pub average_group_meetings_per_day: f64,
    pub stdv_group_meetings_per_day:    f64,
}

impl Configuration {
    /// The reference scenario: 100 people on a 20 × 30 km grid, two initially
    /// sick, roughly two groups of three per person.
    pub fn reference_scenario() -> Self {
        Self {
            population_size: 100,
            starting_sick:   2,
            x_km:            20,
            y_km:            30,

            average_family_size: 3.1,
            stdv_family_size:    2.0,

            infection_probability_per_minute: 0.001,
            death_rate:                       0.03,

            average_incubation_days: 5.1,
            stdv_incubation_days:    1.52,
            average_sickness_days:   14.0,
            stdv_sickness_days:      3.0,

            average_friend_group_count: 2.0,
            stdv_friend_group_count:    0.3,
            average_group_size:         3.0,
            stdv_group_size:            1.0,

            average_friend_meeting_minutes: 60.0,
            stdv_friend_meeting_minutes:    20.0,
            average_group_meetings_per_day: 0.7,
            stdv_group_meetings_per_day:    0.2,
        }
    }

    /// Parse a JSON document.  Missing or unknown fields are errors.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Number of groups created at build time:
    /// `round(population_size * average_friend_group_count / average_group_size)`.
    pub fn group_count(&self) -> u32 {
        let exact = self.population_size as f64 * self.average_friend_group_count
            / self.average_group_size;
        if exact.is_finite() { round_count(exact) } else { 0 }
    }

    /// Check every parameter, failing on the first bad one.
    pub fn validate(&self) -> ConfigResult<()> {
        self.distributions().map(|_| ())
    }

    /// Validate and build the normal distributions the model samples from.
    pub fn distributions(&self) -> ConfigResult<Distributions> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.x_km == 0 {
            return Err(ConfigError::EmptyBoundingBox { param: "x_km" });
        }
        if self.y_km == 0 {
            return Err(ConfigError::EmptyBoundingBox { param: "y_km" });
        }
        if self.starting_sick > self.population_size {
            return Err(ConfigError::TooManyStartingSick {
                starting_sick: self.starting_sick,
                population:    self.population_size,
            });
        }

        check_probability("infection_probability_per_minute", self.infection_probability_per_minute)?;
        check_probability("death_rate", self.death_rate)?;

        if !self.average_family_size.is_finite() {
            return Err(ConfigError::NotFinite { param: "average_family_size" });
        }
        if self.average_family_size < 0.5 {
            return Err(ConfigError::FamilyTooSmall {
                param: "average_family_size",
                value: self.average_family_size,
            });
        }

        if !self.average_group_size.is_finite() {
            return Err(ConfigError::NotFinite { param: "average_group_size" });
        }
        if self.average_group_size <= 0.0 {
            return Err(ConfigError::NotPositive {
                param: "average_group_size",
                value: self.average_group_size,
            });
        }
        // Accepted but unused; still has to be a sane standard deviation.
        ParamNormal::new("stdv_group_size", self.average_group_size, self.stdv_group_size)?;

        let dists = Distributions {
            family_size: ParamNormal::new(
                "stdv_family_size", self.average_family_size, self.stdv_family_size)?,
            incubation_days: ParamNormal::new(
                "stdv_incubation_days", self.average_incubation_days, self.stdv_incubation_days)?,
            sickness_days: ParamNormal::new(
                "stdv_sickness_days", self.average_sickness_days, self.stdv_sickness_days)?,
            friend_group_count: ParamNormal::new(
                "stdv_friend_group_count", self.average_friend_group_count, self.stdv_friend_group_count)?,
            meeting_minutes: ParamNormal::new(
                "stdv_friend_meeting_minutes", self.average_friend_meeting_minutes, self.stdv_friend_meeting_minutes)?,
            meetings_per_day: ParamNormal::new(
                "stdv_group_meetings_per_day", self.average_group_meetings_per_day, self.stdv_group_meetings_per_day)?,
        };

        if self.average_friend_group_count > 0.0 && self.group_count() == 0 {
            return Err(ConfigError::NoGroups {
                population:    self.population_size,
                friend_groups: self.average_friend_group_count,
                group_size:    self.average_group_size,
            });
        }

        Ok(dists)
    }
}

fn check_probability(param: &'static str, value: f64) -> ConfigResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidProbability { param, value });
    }
    Ok(())
}

// ── Distributions ─────────────────────────────────────────────────────────────

/// The validated normal distributions behind every stochastic draw.
#[derive(Clone, Copy, Debug)]
pub struct Distributions {
    pub family_size:        ParamNormal,
    pub incubation_days:    ParamNormal,
    pub sickness_days:      ParamNormal,
    pub friend_group_count: ParamNormal,
    pub meeting_minutes:    ParamNormal,
    pub meetings_per_day:   ParamNormal,
}

// ── Mitigation ────────────────────────────────────────────────────────────────

/// Mitigation policy handed to every daily transition.
///
/// The model accepts these knobs but does not act on them yet; see DESIGN.md
/// for the open question on their semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mitigation {
    pub max_group_size:      u32,
    pub quarantine_days:     u32,
    pub inspections_per_day: u32,
}

impl Mitigation {
    pub fn new(max_group_size: u32, quarantine_days: u32, inspections_per_day: u32) -> Self {
        Self { max_group_size, quarantine_days, inspections_per_day }
    }
}
