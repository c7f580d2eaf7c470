//! `vs-spatial` — nearest-neighbour lookup over grid locations.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`index`]   | `SpatialIndex<K>` (R-tree keyed by entity id)              |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                         |

pub mod error;
pub mod index;


pub use error::{SpatialError, SpatialResult};
pub use index::SpatialIndex;
