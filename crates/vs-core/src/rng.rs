//! Deterministic simulation RNG and clamped normal sampling.
//!
//! # Determinism strategy
//!
//! A whole run draws from one `SimRng` seeded once.  Reproducibility therefore
//! depends on draw order, which the builder and the epidemic model keep fixed:
//!
//! 1. per household: size, location x, location y
//! 2. per group: location x, location y
//! 3. per individual: desired group count
//! 4. seeding: individual index, then that individual's infection draws
//! 5. per day, per visited group: meeting count, meeting durations, infection
//!    rolls; then infection draws for every marked individual in mark order
//!
//! `SimRng` is `Clone` so tests can fork an identical stream and compare two
//! runs draw for draw.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::{ConfigError, ConfigResult};

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.  Single-threaded by design: the model never splits
/// work across threads, so one stream covers the whole run.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    /// For `f64` the range is `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── ParamNormal ───────────────────────────────────────────────────────────────

/// A normal distribution built from one `average_*` / `stdv_*` pair of the
/// configuration.
///
/// Every quantity the model draws from a normal is non-negative, so samples
/// are clamped at zero here, at the sampling boundary, and never checked again
/// downstream.
#[derive(Clone, Copy, Debug)]
pub struct ParamNormal {
    normal: Normal<f64>,
}

impl ParamNormal {
    /// Build the distribution, naming `param` in the error if the mean is not
    /// finite or the standard deviation is negative or not finite.
    pub fn new(param: &'static str, mean: f64, std_dev: f64) -> ConfigResult<Self> {
        if !mean.is_finite() {
            return Err(ConfigError::NotFinite { param });
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(ConfigError::InvalidStdDev { param, value: std_dev });
        }
        let normal = Normal::new(mean, std_dev)
            .map_err(|_| ConfigError::InvalidStdDev { param, value: std_dev })?;
        Ok(Self { normal })
    }

    pub fn mean(&self) -> f64 {
        self.normal.mean()
    }

    pub fn std_dev(&self) -> f64 {
        self.normal.std_dev()
    }

    /// One draw, clamped at zero.  Used for continuous quantities such as
    /// meeting minutes.
    #[inline]
    pub fn sample_clamped(&self, rng: &mut SimRng) -> f64 {
        self.normal.sample(rng.inner()).max(0.0)
    }

    /// One draw, clamped at zero and rounded to the nearest integer (halves
    /// round away from zero).  Used for sizes, counts, and day spans.
    #[inline]
    pub fn sample_count(&self, rng: &mut SimRng) -> u32 {
        round_count(self.sample_clamped(rng))
    }
}

/// Round a non-negative real to a count, saturating at `u32::MAX`.
#[inline]
pub fn round_count(value: f64) -> u32 {
    let rounded = value.max(0.0).round();
    if rounded >= u32::MAX as f64 {
        u32::MAX
    } else {
        rounded as u32
    }
}
