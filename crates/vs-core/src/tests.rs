//! Unit tests for vs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{GroupId, HouseholdId, IndividualId};

    #[test]
    fn index_roundtrip() {
        let id = IndividualId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(IndividualId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(IndividualId(0) < IndividualId(1));
        assert!(GroupId(100) > GroupId(99));
    }

    #[test]
    fn display() {
        assert_eq!(IndividualId(7).to_string(), "IndividualId(7)");
        assert_eq!(HouseholdId(3).to_string(), "HouseholdId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Location, SimRng};

    #[test]
    fn squared_distance() {
        let a = Location::new(0, 0);
        let b = Location::new(3, 4);
        assert_eq!(a.distance_2(b), 25.0);
        assert_eq!(b.distance_2(a), 25.0);
        assert_eq!(a.distance_2(a), 0.0);
    }

    #[test]
    fn random_stays_in_box() {
        let mut rng = SimRng::new(7);
        for _ in 0..1_000 {
            let loc = Location::random(&mut rng, 20, 30);
            assert!(loc.x < 20);
            assert!(loc.y < 30);
        }
    }

    #[test]
    fn one_by_one_box_is_origin() {
        let mut rng = SimRng::new(7);
        assert_eq!(Location::random(&mut rng, 1, 1), Location::new(0, 0));
    }
}

#[cfg(test)]
mod time {
    use crate::Day;

    #[test]
    fn day_arithmetic() {
        let d = Day(10);
        assert_eq!(d + 5, Day(15));
        assert_eq!(d.offset(3), Day(13));
        assert_eq!(d.next(), Day(11));
        assert_eq!(Day(u32::MAX).offset(1), Day(u32::MAX));
    }

    #[test]
    fn display() {
        assert_eq!(Day(4).to_string(), "day 4");
    }
}

#[cfg(test)]
mod rng {
    use approx::assert_relative_eq;

    use crate::rng::round_count;
    use crate::{ParamNormal, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn clone_forks_identical_stream() {
        let mut r1 = SimRng::new(9);
        let _: u64 = r1.random();
        let mut r2 = r1.clone();
        for _ in 0..50 {
            assert_eq!(r1.gen_range(0..1_000u32), r2.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(1.5), "p is clamped to 1");
    }

    #[test]
    fn zero_std_dev_is_the_mean() {
        let normal = ParamNormal::new("stdv_test", 3.4, 0.0).unwrap();
        let mut rng = SimRng::new(1);
        assert_relative_eq!(normal.sample_clamped(&mut rng), 3.4);
        assert_eq!(normal.sample_count(&mut rng), 3);
    }

    #[test]
    fn negative_samples_clamp_to_zero() {
        let normal = ParamNormal::new("stdv_test", -50.0, 1.0).unwrap();
        let mut rng = SimRng::new(2);
        for _ in 0..200 {
            assert_eq!(normal.sample_clamped(&mut rng), 0.0);
            assert_eq!(normal.sample_count(&mut rng), 0);
        }
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_count(2.5), 3);
        assert_eq!(round_count(2.49), 2);
        assert_eq!(round_count(0.5), 1);
        assert_eq!(round_count(-3.0), 0);
        assert_eq!(round_count(1e20), u32::MAX);
    }

    #[test]
    fn rejects_bad_std_dev() {
        assert!(ParamNormal::new("stdv_test", 1.0, -0.1).is_err());
        assert!(ParamNormal::new("stdv_test", 1.0, f64::NAN).is_err());
        assert!(ParamNormal::new("stdv_test", f64::INFINITY, 1.0).is_err());
    }
}

#[cfg(test)]
mod config {
    use std::io::Write;

    use crate::{ConfigError, Configuration, Mitigation};

    #[test]
    fn reference_scenario_is_valid() {
        let cfg = Configuration::reference_scenario();
        cfg.validate().unwrap();
        // 100 * 2 / 3 = 66.67
        assert_eq!(cfg.group_count(), 67);
    }

    #[test]
    fn demo_json_matches_reference_scenario() {
        let json = include_str!("../../../demos/viruspread/reference.json");
        let cfg = Configuration::from_json_str(json).unwrap();
        assert_eq!(cfg, Configuration::reference_scenario());
    }

    #[test]
    fn zero_population_rejected() {
        let cfg = Configuration { population_size: 0, starting_sick: 0, ..Configuration::reference_scenario() };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyPopulation)));
    }

    #[test]
    fn empty_bounding_box_names_the_side() {
        let cfg = Configuration { y_km: 0, ..Configuration::reference_scenario() };
        match cfg.validate() {
            Err(ConfigError::EmptyBoundingBox { param }) => assert_eq!(param, "y_km"),
            other => panic!("expected EmptyBoundingBox, got {other:?}"),
        }
    }

    #[test]
    fn probabilities_checked() {
        let cfg = Configuration { death_rate: 1.2, ..Configuration::reference_scenario() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidProbability { param: "death_rate", .. })
        ));
        let cfg = Configuration {
            infection_probability_per_minute: f64::NAN,
            ..Configuration::reference_scenario()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_std_dev_names_the_parameter() {
        let cfg = Configuration { stdv_sickness_days: -1.0, ..Configuration::reference_scenario() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("stdv_sickness_days"), "got: {err}");
    }

    #[test]
    fn zero_group_size_rejected() {
        let cfg = Configuration { average_group_size: 0.0, ..Configuration::reference_scenario() };
        assert!(matches!(cfg.validate(), Err(ConfigError::NotPositive { .. })));
    }

    #[test]
    fn groups_requested_but_none_created_rejected() {
        let cfg = Configuration {
            population_size: 1,
            starting_sick:   0,
            average_friend_group_count: 0.1,
            average_group_size: 50.0,
            ..Configuration::reference_scenario()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NoGroups { .. })));
    }

    #[test]
    fn no_friend_groups_is_allowed() {
        let cfg = Configuration {
            average_friend_group_count: 0.0,
            ..Configuration::reference_scenario()
        };
        cfg.validate().unwrap();
        assert_eq!(cfg.group_count(), 0);
    }

    #[test]
    fn tiny_families_rejected() {
        let cfg = Configuration { average_family_size: 0.2, ..Configuration::reference_scenario() };
        assert!(matches!(cfg.validate(), Err(ConfigError::FamilyTooSmall { .. })));
    }

    #[test]
    fn starting_sick_bounded_by_population() {
        let cfg = Configuration { starting_sick: 101, ..Configuration::reference_scenario() };
        assert!(matches!(cfg.validate(), Err(ConfigError::TooManyStartingSick { .. })));
    }

    #[test]
    fn json_round_trip() {
        let cfg = Configuration::reference_scenario();
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(Configuration::from_json_str(&json).unwrap(), cfg);
    }

    #[test]
    fn json_missing_field_rejected() {
        let err = Configuration::from_json_str(r#"{ "population_size": 10 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn json_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&Configuration::reference_scenario()).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let cfg = Configuration::from_json_file(file.path()).unwrap();
        assert_eq!(cfg.population_size, 100);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Configuration::from_json_file(std::path::Path::new("/nonexistent/vs.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn mitigation_default_is_zero() {
        assert_eq!(Mitigation::default(), Mitigation::new(0, 0, 0));
    }
}
