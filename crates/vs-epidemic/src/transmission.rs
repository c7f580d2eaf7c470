//! Contact-exposure transmission formulas.
//!
//! Exposure is measured in whole minutes: the accumulated meeting time of a
//! group is truncated before it is used as an exponent.

/// Probability that a susceptible individual escapes infection from one sick
/// contact after `minutes` of shared meeting time:
/// `(1 − p)^⌊minutes⌋`.
///
/// Zero minutes always escape, even when `p == 1`.
#[inline]
pub fn escape_probability(infection_probability_per_minute: f64, minutes: f64) -> f64 {
    (1.0 - infection_probability_per_minute).powf(minutes.max(0.0).trunc())
}

/// Probability that a susceptible individual is infected in one group on one
/// day when `sick_members` sick individuals attend.
///
/// Each sick member rolls independently, so the escape probability compounds:
/// `1 − escape^sick_members`.
#[inline]
pub fn daily_infection_probability(
    infection_probability_per_minute: f64,
    minutes: f64,
    sick_members: u32,
) -> f64 {
    let escape = escape_probability(infection_probability_per_minute, minutes);
    1.0 - escape.powf(sick_members as f64)
}
