//! Random population generation from a [`Configuration`].
//!
//! # Households
//!
//! Individuals are handed out in index order.  Each round draws a household
//! size (normal, clamped at zero, rounded), places a new household at a
//! uniformly random grid point, and moves that many individuals into it.  When
//! a size asks for more individuals than remain, the rest go into that
//! household and generation stops, so the last household may be partially
//! filled or even empty.  Zero-size households drawn earlier stay in the
//! graph as empty households.
//!
//! # Groups
//!
//! `config.group_count()` groups are placed uniformly at random.  Each
//! individual, in index order, draws how many groups it wants and joins that
//! many of the groups nearest its home, skipping any group a household-mate
//! already joined.  The skip is done by pulling the mates' groups out of a
//! working R-tree for the duration of the query and putting them back
//! afterwards; it keeps families from piling into the same nearby cluster.

use std::collections::BTreeSet;

use log::debug;

use vs_core::{Configuration, Distributions, GroupId, IndividualId, Location, SimRng};
use vs_spatial::SpatialIndex;

use crate::{PopulationGraph, PopulationGraphBuilder, PopulationResult};

/// Validate `config` and generate a population graph, drawing from `rng`.
///
/// Fails fast on any invalid parameter; see [`Configuration::validate`].
pub fn generate(config: &Configuration, rng: &mut SimRng) -> PopulationResult<PopulationGraph> {
    let dists = config.distributions()?;

    let mut builder = PopulationGraphBuilder::with_capacity(config.population_size as usize);
    build_households(config, &dists, rng, &mut builder)?;
    build_groups(config, &dists, rng, &mut builder)?;

    let graph = builder.build();
    debug!(
        "generated population: {} individuals, {} households, {} groups, {} memberships",
        graph.individual_count(),
        graph.household_count(),
        graph.group_count(),
        graph.membership_count(),
    );
    Ok(graph)
}

fn build_households(
    config:  &Configuration,
    dists:   &Distributions,
    rng:     &mut SimRng,
    builder: &mut PopulationGraphBuilder,
) -> PopulationResult<()> {
    let population = config.population_size as usize;

    loop {
        let size = dists.family_size.sample_count(rng) as usize;
        let location = Location::random(rng, config.x_km, config.y_km);
        let household = builder.add_household(location);

        let remaining = population - builder.individual_count();
        let take = size.min(remaining);
        for _ in 0..take {
            builder.add_individual(household)?;
        }
        if size > take {
            return Ok(());
        }
    }
}

fn build_groups(
    config:  &Configuration,
    dists:   &Distributions,
    rng:     &mut SimRng,
    builder: &mut PopulationGraphBuilder,
) -> PopulationResult<()> {
    let mut available: SpatialIndex<GroupId> = SpatialIndex::new();
    for _ in 0..config.group_count() {
        let location = Location::random(rng, config.x_km, config.y_km);
        let group = builder.add_group(location);
        available.insert(group, location);
    }

    for i in 0..builder.individual_count() {
        let individual = IndividualId(i as u32);
        let wanted = dists.friend_group_count.sample_count(rng) as usize;

        let household = builder.household_of(individual);
        let home = builder.household_location(household);

        let sibling_groups: BTreeSet<GroupId> = builder
            .household_members(household)
            .iter()
            .filter(|&&mate| mate != individual)
            .flat_map(|&mate| builder.groups_of(mate).iter().copied())
            .collect();

        for &group in &sibling_groups {
            available.remove(group, builder.group_location(group))?;
        }
        let nearest = available.k_nearest(home, wanted);
        for &group in &sibling_groups {
            available.insert(group, builder.group_location(group));
        }

        for group in nearest {
            builder.join_group(individual, group)?;
        }
    }
    Ok(())
}
