//! `vs-population` — the static contact graph of the population.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`entity`]    | `Household`, `Group` identity records                     |
//! | [`graph`]     | `PopulationGraph` (index adjacency), `PopulationGraphBuilder` |
//! | [`generate`]  | `generate` — random households and proximity-based groups |
//! | [`error`]     | `PopulationError`, `PopulationResult<T>`                  |
//!
//! The graph is built once and is read-only afterwards; the epidemic model
//! shares it across every simulated day.

pub mod entity;
pub mod error;
pub mod generate;
pub mod graph;

#[cfg(test)]
mod tests;

pub use entity::{Group, Household};
pub use error::{PopulationError, PopulationResult};
pub use generate::generate;
pub use graph::{PopulationGraph, PopulationGraphBuilder};
