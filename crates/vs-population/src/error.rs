use thiserror::Error;

use vs_core::{ConfigError, GroupId, HouseholdId, IndividualId};
use vs_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum PopulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("spatial index error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("{0} does not exist")]
    UnknownHousehold(HouseholdId),

    #[error("{0} does not exist")]
    UnknownGroup(GroupId),

    #[error("{0} does not exist")]
    UnknownIndividual(IndividualId),
}

pub type PopulationResult<T> = Result<T, PopulationError>;
