//! `vs-core` — foundational types for the `viruspread` epidemic model.
//!
//! This crate is a dependency of every other `vs-*` crate.  It has no `vs-*`
//! dependencies and only a handful of external ones (`rand`, `rand_distr`,
//! `thiserror`, `serde`, `serde_json`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`ids`]         | `IndividualId`, `HouseholdId`, `GroupId`                 |
//! | [`geo`]         | `Location` (integer km grid), squared distance           |
//! | [`time`]        | `Day`                                                    |
//! | [`config`]      | `Configuration`, `Distributions`, `Mitigation`          |
//! | [`rng`]         | `SimRng`, `ParamNormal`                                  |
//! | [`error`]       | `ConfigError`, `ConfigResult`                            |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Configuration, Distributions, Mitigation};
pub use error::{ConfigError, ConfigResult};
pub use geo::Location;
pub use ids::{GroupId, HouseholdId, IndividualId};
pub use rng::{ParamNormal, SimRng};
pub use time::Day;
