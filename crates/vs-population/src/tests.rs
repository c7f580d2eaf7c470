//! Unit tests for vs-population.

#[cfg(test)]
mod helpers {
    use vs_core::Configuration;

    /// Deterministic household and group sizes: every household has two
    /// members and every individual wants one group of one.
    pub fn pairs_config(population: u32) -> Configuration {
        Configuration {
            population_size: population,
            starting_sick:   0,
            average_family_size: 2.0,
            stdv_family_size:    0.0,
            average_friend_group_count: 1.0,
            stdv_friend_group_count:    0.0,
            average_group_size:         1.0,
            ..Configuration::reference_scenario()
        }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use vs_core::{GroupId, HouseholdId, IndividualId, Location};
    use crate::{PopulationError, PopulationGraphBuilder};

    #[test]
    fn empty_build() {
        let graph = PopulationGraphBuilder::new().build();
        assert_eq!(graph.individual_count(), 0);
        assert_eq!(graph.household_count(), 0);
        assert_eq!(graph.group_count(), 0);
    }

    #[test]
    fn ids_are_sequential() {
        let mut b = PopulationGraphBuilder::new();
        assert_eq!(b.add_household(Location::new(0, 0)), HouseholdId(0));
        assert_eq!(b.add_household(Location::new(1, 1)), HouseholdId(1));
        assert_eq!(b.add_group(Location::new(2, 2)), GroupId(0));
        assert_eq!(b.add_individual(HouseholdId(1)).unwrap(), IndividualId(0));
        assert_eq!(b.add_individual(HouseholdId(0)).unwrap(), IndividualId(1));
    }

    #[test]
    fn unknown_household_rejected() {
        let mut b = PopulationGraphBuilder::new();
        b.add_household(Location::new(0, 0));
        let err = b.add_individual(HouseholdId(5)).unwrap_err();
        assert!(matches!(err, PopulationError::UnknownHousehold(HouseholdId(5))));
        assert_eq!(b.individual_count(), 0);
    }

    #[test]
    fn unknown_group_or_individual_rejected() {
        let mut b = PopulationGraphBuilder::new();
        let h = b.add_household(Location::new(0, 0));
        let g = b.add_group(Location::new(0, 0));
        let a = b.add_individual(h).unwrap();
        assert!(matches!(b.join_group(a, GroupId(9)), Err(PopulationError::UnknownGroup(_))));
        assert!(matches!(
            b.join_group(IndividualId(9), g),
            Err(PopulationError::UnknownIndividual(_))
        ));
    }

    #[test]
    fn double_join_is_noop() {
        let mut b = PopulationGraphBuilder::new();
        let h = b.add_household(Location::new(0, 0));
        let g = b.add_group(Location::new(0, 0));
        let a = b.add_individual(h).unwrap();
        b.join_group(a, g).unwrap();
        b.join_group(a, g).unwrap();
        let graph = b.build();
        assert_eq!(graph.groups_of(a), &[g]);
        assert_eq!(graph.group_members(g), &[a]);
    }

    #[test]
    fn group_members_are_ascending() {
        let mut b = PopulationGraphBuilder::new();
        let h = b.add_household(Location::new(0, 0));
        let g = b.add_group(Location::new(0, 0));
        let ids: Vec<_> = (0..4).map(|_| b.add_individual(h).unwrap()).collect();
        // Join in reverse order; the finished graph lists members by index.
        for &id in ids.iter().rev() {
            b.join_group(id, g).unwrap();
        }
        let graph = b.build();
        assert_eq!(graph.group_members(g), ids.as_slice());
    }

    #[test]
    fn home_location_and_spatial_queries() {
        let mut b = PopulationGraphBuilder::new();
        let near = b.add_household(Location::new(1, 1));
        let far = b.add_household(Location::new(9, 9));
        let g_far = b.add_group(Location::new(8, 8));
        let g_near = b.add_group(Location::new(0, 0));
        let a = b.add_individual(far).unwrap();
        let graph = b.build();
        assert_eq!(graph.home_location(a), Location::new(9, 9));
        assert_eq!(graph.nearest_households(Location::new(0, 0), 1), vec![near]);
        assert_eq!(graph.nearest_groups(Location::new(0, 0), 2), vec![g_near, g_far]);
    }
}

// ── Random generation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod generation {
    use std::collections::BTreeSet;

    use vs_core::{Configuration, ConfigError, IndividualId, SimRng};
    use crate::{PopulationError, PopulationGraph, generate};

    /// Every individual is in exactly one household and the household member
    /// lists cover the whole population without duplicates.
    fn assert_partition(graph: &PopulationGraph) {
        let mut seen = BTreeSet::new();
        for h in graph.households() {
            for &member in graph.household_members(h.id) {
                assert!(seen.insert(member), "{member} listed in two households");
                assert_eq!(graph.household_of(member), h.id);
            }
        }
        let all: BTreeSet<IndividualId> = graph.individuals().collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn reference_scenario_partitions_population() {
        let cfg = Configuration::reference_scenario();
        for seed in 0..20 {
            let graph = generate(&cfg, &mut SimRng::new(seed)).unwrap();
            assert_eq!(graph.individual_count(), 100);
            assert_partition(&graph);
            assert_eq!(graph.group_count(), cfg.group_count() as usize);
        }
    }

    #[test]
    fn locations_inside_bounding_box() {
        let cfg = Configuration::reference_scenario();
        let graph = generate(&cfg, &mut SimRng::new(3)).unwrap();
        for h in graph.households() {
            assert!(h.location.x < cfg.x_km && h.location.y < cfg.y_km);
        }
        for g in graph.groups() {
            assert!(g.location.x < cfg.x_km && g.location.y < cfg.y_km);
        }
    }

    #[test]
    fn fixed_family_size_fills_households_exactly() {
        let cfg = super::helpers::pairs_config(10);
        let graph = generate(&cfg, &mut SimRng::new(1)).unwrap();
        // Five full pairs, then a sixth household asks for two members and
        // finds the population exhausted.
        assert_eq!(graph.household_count(), 6);
        for h in &graph.households()[..5] {
            assert_eq!(graph.household_members(h.id).len(), 2);
        }
        assert!(graph.household_members(graph.households()[5].id).is_empty());
        assert_partition(&graph);
    }

    #[test]
    fn partially_filled_last_household() {
        let cfg = Configuration {
            average_family_size: 4.0,
            stdv_family_size:    0.0,
            ..super::helpers::pairs_config(10)
        };
        let graph = generate(&cfg, &mut SimRng::new(1)).unwrap();
        let sizes: Vec<usize> = graph
            .households()
            .iter()
            .map(|h| graph.household_members(h.id).len())
            .collect();
        assert_eq!(sizes, vec![4, 4, 2]);
    }

    #[test]
    fn negative_size_samples_give_empty_households() {
        // Wide spread around a small mean: many draws fall below zero.
        let cfg = Configuration {
            average_family_size:     0.5,
            stdv_family_size:        5.0,
            average_friend_group_count: 0.0,
            ..Configuration::reference_scenario()
        };
        let graph = generate(&cfg, &mut SimRng::new(11)).unwrap();
        assert_partition(&graph);
        let empty = graph
            .households()
            .iter()
            .filter(|h| graph.household_members(h.id).is_empty())
            .count();
        assert!(empty > 0, "expected some zero-member households");
    }

    #[test]
    fn negative_group_count_samples_join_nothing() {
        let cfg = Configuration {
            average_friend_group_count: 0.5,
            stdv_friend_group_count:    20.0,
            ..Configuration::reference_scenario()
        };
        let graph = generate(&cfg, &mut SimRng::new(5)).unwrap();
        let loners = graph.individuals().filter(|&i| graph.groups_of(i).is_empty()).count();
        assert!(loners > 0);
    }

    #[test]
    fn no_friend_groups_means_no_memberships() {
        let cfg = Configuration {
            population_size: 10,
            starting_sick:   1,
            average_friend_group_count: 0.0,
            ..Configuration::reference_scenario()
        };
        let graph = generate(&cfg, &mut SimRng::new(2)).unwrap();
        assert_eq!(graph.group_count(), 0);
        assert_eq!(graph.membership_count(), 0);
    }

    #[test]
    fn household_mates_never_share_a_group_when_alternatives_exist() {
        // Ten groups of one, ten people in pairs, one group each: the second
        // member of a pair must skip the first member's group.
        let cfg = super::helpers::pairs_config(10);
        let graph = generate(&cfg, &mut SimRng::new(8)).unwrap();
        for h in graph.households() {
            let members = graph.household_members(h.id);
            if members.len() == 2 {
                let a: BTreeSet<_> = graph.groups_of(members[0]).iter().collect();
                let b: BTreeSet<_> = graph.groups_of(members[1]).iter().collect();
                assert_eq!(a.len(), 1);
                assert_eq!(b.len(), 1);
                assert!(a.is_disjoint(&b), "{} mates share a group", h.id);
            }
        }
    }

    #[test]
    fn joined_groups_are_the_nearest_eligible() {
        let cfg = Configuration::reference_scenario();
        let graph = generate(&cfg, &mut SimRng::new(21)).unwrap();

        for individual in graph.individuals() {
            let home = graph.home_location(individual);
            let household = graph.household_of(individual);

            // Mates processed earlier (lower index) had already joined.
            let excluded: BTreeSet<_> = graph
                .household_members(household)
                .iter()
                .filter(|&&m| m < individual)
                .flat_map(|&m| graph.groups_of(m).iter().copied())
                .collect();

            let joined = graph.groups_of(individual);
            let Some(max_joined) = joined
                .iter()
                .map(|&g| graph.group(g).location.distance_2(home))
                .reduce(f64::max)
            else {
                continue;
            };

            for g in graph.groups() {
                if joined.contains(&g.id) {
                    assert!(!excluded.contains(&g.id), "joined a sibling group");
                } else if !excluded.contains(&g.id) {
                    assert!(
                        g.location.distance_2(home) >= max_joined,
                        "{individual} skipped a nearer group {}",
                        g.id
                    );
                }
            }
        }
    }

    #[test]
    fn same_seed_same_graph() {
        let cfg = Configuration::reference_scenario();
        let a = generate(&cfg, &mut SimRng::new(77)).unwrap();
        let b = generate(&cfg, &mut SimRng::new(77)).unwrap();
        assert_eq!(a.households(), b.households());
        assert_eq!(a.groups(), b.groups());
        for i in a.individuals() {
            assert_eq!(a.household_of(i), b.household_of(i));
            assert_eq!(a.groups_of(i), b.groups_of(i));
        }
    }

    #[test]
    fn invalid_config_fails_fast() {
        let cfg = Configuration { x_km: 0, ..Configuration::reference_scenario() };
        let err = generate(&cfg, &mut SimRng::new(0)).err().unwrap();
        assert!(matches!(err, PopulationError::Config(ConfigError::EmptyBoundingBox { .. })));
    }
}
