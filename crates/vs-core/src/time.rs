//! Simulation time model.
//!
//! The epidemic advances in whole days.  `Day` is a plain counter starting at
//! zero (the post-seeding starting state); all episode arithmetic is integer
//! so comparisons are exact.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An absolute simulation day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// The day after `self`.
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }

    /// Return the day `n` days after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Day {
        Day(self.0.saturating_add(n))
    }
}

impl std::ops::Add<u32> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u32) -> Day {
        self.offset(rhs)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}
