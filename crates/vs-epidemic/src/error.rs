use thiserror::Error;

use vs_core::{ConfigError, IndividualId};

#[derive(Debug, Error)]
pub enum EpidemicError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0} is outside the population")]
    UnknownIndividual(IndividualId),

    #[error("snapshot holds {got} health states but the population has {expected} individuals")]
    PopulationMismatch { expected: usize, got: usize },
}

pub type EpidemicResult<T> = Result<T, EpidemicError>;
