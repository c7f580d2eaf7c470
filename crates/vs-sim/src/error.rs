use thiserror::Error;

use vs_core::ConfigError;
use vs_epidemic::EpidemicError;
use vs_population::PopulationError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("population error: {0}")]
    Population(#[from] PopulationError),

    #[error("epidemic error: {0}")]
    Epidemic(#[from] EpidemicError),

    #[error("cannot seed {starting_sick} sick individuals into an empty population")]
    EmptyPopulation { starting_sick: u32 },
}

pub type SimResult<T> = Result<T, SimError>;
