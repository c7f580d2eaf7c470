//! `vs-sim` — day-by-day stepper for the viruspread epidemic model.
//!
//! # Run loop
//!
//! ```text
//! build:
//!   ① Validate  — Configuration::distributions
//!   ② Graph     — generate households and groups (or take a pre-built one)
//!   ③ Seed      — starting_sick draws of a uniform index, each infected on day 0
//! for day in 1..=n:
//!   ④ Advance   — EpidemicModel::advance(current, mitigation, rng)
//!   ⑤ Observe   — SimObserver::on_day_end(snapshot, graph)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vs_core::{Configuration, Mitigation};
//! use vs_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(Configuration::reference_scenario())
//!     .seed(42)
//!     .mitigation(Mitigation::new(20, 14, 1000))
//!     .build()?;
//! sim.run_days(30, &mut NoopObserver)?;
//! println!("{:?}", sim.current().summary());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
