//! `vs-epidemic` — the epidemic state machine.
//!
//! # Daily transition
//!
//! ```text
//! advance(snapshot):
//!   ① Clone     — copy health states and the active-sick set; day += 1.
//!   ② Resolve   — episodes that have run their course end in recovery or
//!                 death; both leave the active-sick set.
//!   ③ Transmit  — every group with a sick member meets; susceptible members
//!                 roll once per sick member against the escape probability.
//!   ④ Infect    — marked individuals are infected after the whole pass, so
//!                 nobody infected today spreads the disease today.
//! ```
//!
//! # Crate layout
//!
//! | Module             | Contents                                                 |
//! |--------------------|----------------------------------------------------------|
//! | [`health`]         | `HealthStatus`, `Episode`, `HealthState`, `Classification` |
//! | [`snapshot`]       | `Snapshot`, `DayChanges`, `SnapshotSummary`              |
//! | [`model`]          | `EpidemicModel` (infect, advance)                        |
//! | [`transmission`]   | escape / infection probability formulas                  |
//! | [`error`]          | `EpidemicError`, `EpidemicResult<T>`                     |

pub mod error;
pub mod health;
pub mod model;
pub mod snapshot;
pub mod transmission;


pub use error::{EpidemicError, EpidemicResult};
pub use health::{Classification, Episode, HealthState, HealthStatus};
pub use model::EpidemicModel;
pub use snapshot::{DayChanges, Snapshot, SnapshotSummary};
pub use transmission::{daily_infection_probability, escape_probability};
