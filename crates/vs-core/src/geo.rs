//! Integer grid locations inside the configured bounding box.
//!
//! Households and groups sit on whole-kilometre coordinates in
//! `[0, x_km) × [0, y_km)`.  Distances are planar; no projection is involved.

use serde::{Deserialize, Serialize};

use crate::SimRng;

/// A point on the simulation grid, in kilometres.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: u32,
    pub y: u32,
}

impl Location {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Draw a uniformly random location in `[0, x_km) × [0, y_km)`.
    ///
    /// `x` is drawn before `y`.  Both sides must be non-zero; the
    /// configuration validator guarantees this.
    pub fn random(rng: &mut SimRng, x_km: u32, y_km: u32) -> Self {
        let x = rng.gen_range(0..x_km);
        let y = rng.gen_range(0..y_km);
        Self { x, y }
    }

    /// Squared Euclidean distance in km².  Exact for the grid's range.
    #[inline]
    pub fn distance_2(self, other: Location) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        dx * dx + dy * dy
    }

    /// The location as a floating-point `[x, y]` pair, the form the spatial
    /// index stores.
    #[inline]
    pub fn as_point(self) -> [f64; 2] {
        [self.x as f64, self.y as f64]
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
