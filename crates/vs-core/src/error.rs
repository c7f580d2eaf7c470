//! Configuration error type.
//!
//! Every variant names the offending parameter so a bad input file can be
//! fixed without reading the source.  Downstream crates wrap `ConfigError`
//! as one variant of their own error enums.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("population_size must be greater than zero")]
    EmptyPopulation,

    #[error("{param} must be greater than zero (bounding box has no area)")]
    EmptyBoundingBox { param: &'static str },

    #[error("{param} must be a finite number")]
    NotFinite { param: &'static str },

    #[error("{param} must be a finite, non-negative standard deviation (got {value})")]
    InvalidStdDev { param: &'static str, value: f64 },

    #[error("{param} must be a probability in [0, 1] (got {value})")]
    InvalidProbability { param: &'static str, value: f64 },

    #[error("{param} must be greater than zero (got {value})")]
    NotPositive { param: &'static str, value: f64 },

    #[error("{param} must be at least 0.5 so that households can hold members (got {value})")]
    FamilyTooSmall { param: &'static str, value: f64 },

    #[error(
        "average_friend_group_count {friend_groups} with average_group_size {group_size} \
         rounds to zero groups for a population of {population}"
    )]
    NoGroups {
        population:    u32,
        friend_groups: f64,
        group_size:    f64,
    },

    #[error("starting_sick {starting_sick} exceeds population_size {population}")]
    TooManyStartingSick { starting_sick: u32, population: u32 },

    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for configuration handling.
pub type ConfigResult<T> = Result<T, ConfigError>;
