//! Unit tests for flow-forecast.

#[cfg(test)]
mod predict {
    use flow_core::SimRng;

    use crate::TrafficEstimator;

    #[test]
    fn output_in_bounds_over_full_domain() {
        let est = TrafficEstimator::new();
        let mut rng = SimRng::new(7);
        for hour in 0..24 {
            for weekday in 0..7 {
                for is_holiday in [false, true] {
                    let level = est.predict(hour, weekday, is_holiday, &mut rng);
                    assert!(
                        (0.1..=1.0).contains(&level),
                        "predict({hour}, {weekday}, {is_holiday}) = {level}"
                    );
                }
            }
        }
    }

    #[test]
    fn deterministic_with_same_seed() {
        let est = TrafficEstimator::new();
        let mut r1 = SimRng::new(99);
        let mut r2 = SimRng::new(99);
        for hour in 0..24 {
            assert_eq!(
                est.predict(hour, 2, false, &mut r1),
                est.predict(hour, 2, false, &mut r2)
            );
        }
    }

    #[test]
    fn out_of_range_inputs_masked() {
        let est = TrafficEstimator::new();
        let mut rng = SimRng::new(0);
        // hour 27 ≡ hour 3, weekday 12 clamps to Sunday; never panics.
        let level = est.predict(27, 12, false, &mut rng);
        assert!((0.1..=1.0).contains(&level));
    }

    #[test]
    fn rush_hour_beats_dead_of_night() {
        let est = TrafficEstimator::new();
        let mut rng = SimRng::new(1);
        for _ in 0..100 {
            // Tuesday 08:00 (base 0.9): worst-case jitter leaves ≥ 0.81.
            assert!(est.predict(8, 1, false, &mut rng) >= 0.8);
            // Tuesday 02:00 (base 0.1): best-case jitter stays ≤ 0.11.
            assert!(est.predict(2, 1, false, &mut rng) <= 0.12);
        }
    }

    #[test]
    fn holiday_reduces_traffic() {
        let est = TrafficEstimator::new();
        let mut rng = SimRng::new(2);
        for _ in 0..100 {
            let regular = est.predict(8, 0, false, &mut rng);
            let holiday = est.predict(8, 0, true, &mut rng);
            // 0.9·0.6·1.1 < 0.9·0.9 — the bands cannot overlap.
            assert!(holiday < regular);
        }
    }

    #[test]
    fn weekend_multipliers_bite() {
        let est = TrafficEstimator::new();
        let mut rng = SimRng::new(3);
        for _ in 0..100 {
            // Sunday 08:00: 0.9·0.6·1.1 ≤ 0.594.
            assert!(est.predict(8, 6, false, &mut rng) <= 0.6);
        }
    }
}

#[cfg(test)]
mod for_road {
    use flow_core::{RoadClass, SimRng};

    use crate::TrafficEstimator;

    #[test]
    fn class_factor_applied() {
        let est = TrafficEstimator::new();
        assert!((est.for_road(RoadClass::Expressway, 0.5) - 0.4).abs() < 1e-6);
        assert!((est.for_road(RoadClass::Arterial, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn reclamped_after_factor() {
        let est = TrafficEstimator::new();
        // Busy trunk highway pushes past 1.0 → clamped down.
        assert_eq!(est.for_road(RoadClass::TrunkHighway, 0.95), 1.0);
        // Quiet expressway drops below the floor → clamped up.
        assert_eq!(est.for_road(RoadClass::Expressway, 0.1), 0.1);
    }

    #[test]
    fn output_in_bounds_for_all_classes() {
        let est = TrafficEstimator::new();
        let mut rng = SimRng::new(11);
        for _ in 0..200 {
            let base = rng.gen_range(0.0f32..2.0);
            for class in [
                RoadClass::TrunkHighway,
                RoadClass::Connector,
                RoadClass::Arterial,
                RoadClass::RegionalHighway,
                RoadClass::Expressway,
                RoadClass::Unclassified,
            ] {
                let level = est.for_road(class, base);
                assert!((0.1..=1.0).contains(&level));
            }
        }
    }
}

#[cfg(test)]
mod forecast {
    use flow_core::{CivilTime, SimClock, SimRng};

    use crate::TrafficEstimator;

    #[test]
    fn hourly_points_anchored_at_clock() {
        let est = TrafficEstimator::new();
        let clock = SimClock::new(1_700_000_000, 3600);
        let mut rng = SimRng::new(5);
        let points = est.forecast(&clock, 6, &mut rng);

        assert_eq!(points.len(), 6);
        assert_eq!(points[0].unix_secs, 1_700_000_000);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.unix_secs, 1_700_000_000 + i as i64 * 3_600);
            assert!((0.1..=1.0).contains(&p.level));
        }
    }

    #[test]
    fn hours_advance_across_midnight() {
        let est = TrafficEstimator::new();
        // 23:00 on some day: the second point must be 00:00 the next day.
        let clock = SimClock::new(23 * 3_600, 3600);
        let mut rng = SimRng::new(5);
        let points = est.forecast(&clock, 2, &mut rng);
        assert_eq!(CivilTime::from_unix(points[0].unix_secs).hour, 23);
        assert_eq!(CivilTime::from_unix(points[1].unix_secs).hour, 0);
    }

    #[test]
    fn deterministic_with_same_seed() {
        let est = TrafficEstimator::new();
        let clock = SimClock::new(0, 3600);
        let a = est.forecast(&clock, 8, &mut SimRng::new(42));
        let b = est.forecast(&clock, 8, &mut SimRng::new(42));
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod weather {
    use flow_core::SimRng;

    use crate::{Season, WeatherCondition, WeatherModel, IMPACT_CEILING};

    #[test]
    fn season_from_month() {
        for m in [12, 1, 2] {
            assert_eq!(Season::from_month(m), Season::Winter);
        }
        for m in 3..=6 {
            assert_eq!(Season::from_month(m), Season::Summer);
        }
        for m in 7..=11 {
            assert_eq!(Season::from_month(m), Season::Monsoon);
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let model = WeatherModel::new();
        let mut r1 = SimRng::new(8);
        let mut r2 = SimRng::new(8);
        for _ in 0..50 {
            assert_eq!(
                model.sample(Season::Monsoon, &mut r1),
                model.sample(Season::Monsoon, &mut r2)
            );
        }
    }

    #[test]
    fn no_snow_outside_winter() {
        let model = WeatherModel::new();
        let mut rng = SimRng::new(13);
        for _ in 0..2000 {
            assert_ne!(model.sample(Season::Summer, &mut rng), WeatherCondition::Snow);
            assert_ne!(model.sample(Season::Monsoon, &mut rng), WeatherCondition::Snow);
        }
    }

    #[test]
    fn winter_reaches_every_condition() {
        let model = WeatherModel::new();
        let mut rng = SimRng::new(21);
        let mut seen = [false; 5];
        for _ in 0..2000 {
            let c = model.sample(Season::Winter, &mut rng);
            seen[c as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "winter distribution covers all conditions");
    }

    #[test]
    fn impact_never_exceeds_ceiling() {
        let model = WeatherModel::new();
        for base in [0.0, 0.5, 0.9, 1.0, 10.0, 1.0e6] {
            for c in crate::ALL_CONDITIONS {
                assert!(model.apply_impact(base, c) <= IMPACT_CEILING);
            }
        }
    }

    #[test]
    fn clear_weather_passes_small_bases_through() {
        let model = WeatherModel::new();
        assert_eq!(model.apply_impact(0.4, WeatherCondition::Clear), 0.4);
        // Snow on a moderately busy road hits the ceiling.
        assert_eq!(model.apply_impact(0.9, WeatherCondition::Snow), 0.95);
    }

    // Reports carry `&'static str` fields, so they are serialize-only;
    // the bound check fails to compile if a Deserialize derive sneaks back.
    #[cfg(feature = "serde")]
    #[test]
    fn reports_are_serializable() {
        fn assert_serialize<T: serde::Serialize>() {}
        assert_serialize::<crate::WeatherReport>();
        assert_serialize::<crate::ForecastPoint>();
    }

    #[test]
    fn report_bundles_plain_values() {
        let model = WeatherModel::new();
        let report = model.report(Season::Winter, WeatherCondition::Fog);
        assert_eq!(report.condition, WeatherCondition::Fog);
        assert_eq!(report.impact, 1.4);
        assert_eq!(report.description, "Reduced visibility, slower traffic");
        assert!(!report.icon.is_empty());
    }
}
