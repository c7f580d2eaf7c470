//! Immutable identity records for households and groups.
//!
//! Individuals carry no data beyond their `IndividualId`, so they have no
//! record type of their own.

use vs_core::{GroupId, HouseholdId, Location};

/// A family sharing living quarters at a fixed location.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Household {
    pub id:       HouseholdId,
    pub location: Location,
}

/// A recurring voluntary social cluster (school, workplace, club, …) at a
/// fixed location.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub id:       GroupId,
    pub location: Location,
}
