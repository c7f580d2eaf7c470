//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use log::{debug, info};

use vs_core::{Configuration, IndividualId, Mitigation, SimRng};
use vs_epidemic::EpidemicModel;
use vs_population::{PopulationGraph, generate};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                  |
/// |--------------------|------------------------------------------|
/// | `.seed(s)`         | `0`                                      |
/// | `.mitigation(m)`   | `Mitigation::default()` (all zero)       |
/// | `.graph(g)`        | generated from the configuration         |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config)
///     .seed(7)
///     .mitigation(Mitigation::new(20, 14, 1000))
///     .build()?;
/// ```
pub struct SimBuilder {
    config:     Configuration,
    seed:       u64,
    mitigation: Mitigation,
    graph:      Option<Arc<PopulationGraph>>,
}

impl SimBuilder {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            seed:       0,
            mitigation: Mitigation::default(),
            graph:      None,
        }
    }

    /// Seed for the single RNG stream behind graph generation, seeding, and
    /// every daily transition.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Mitigation policy passed to every daily transition.
    pub fn mitigation(mut self, mitigation: Mitigation) -> Self {
        self.mitigation = mitigation;
        self
    }

    /// Use a pre-built population instead of generating one.
    ///
    /// The configuration's `population_size` and spatial parameters are then
    /// ignored; seeding draws indices over the supplied graph.
    pub fn graph(mut self, graph: Arc<PopulationGraph>) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Validate the configuration, build (or adopt) the graph, and seed the
    /// initial infections.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let mut rng = SimRng::new(self.seed);

        let graph = match self.graph {
            Some(g) => g,
            None => Arc::new(generate(&self.config, &mut rng)?),
        };
        let model = EpidemicModel::new(&self.config, Arc::clone(&graph))?;

        let population = graph.individual_count();
        let starting_sick = self.config.starting_sick;
        if population == 0 && starting_sick > 0 {
            return Err(SimError::EmptyPopulation { starting_sick });
        }

        // Duplicate draws are absorbed by `infect` being a no-op on the sick.
        let mut start = model.initial_snapshot();
        for _ in 0..starting_sick {
            let index = rng.gen_range(0..population);
            let id = IndividualId(index as u32);
            if !model.infect(&mut start, id, &mut rng)? {
                debug!("seed draw {id} already sick");
            }
        }

        info!(
            "sim ready: {} individuals, {} households, {} groups, {} initially sick (seed {})",
            population,
            graph.household_count(),
            graph.group_count(),
            start.active_sick().len(),
            self.seed,
        );

        Ok(Sim {
            config:     self.config,
            mitigation: self.mitigation,
            graph,
            model,
            rng,
            current:    start.clone(),
            start,
        })
    }
}
