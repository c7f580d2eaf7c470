//! Spatial-subsystem error type.

use thiserror::Error;

use vs_core::Location;

/// Errors produced by `vs-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no entry for {key} at {location} in spatial index")]
    MissingEntry { key: String, location: Location },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
