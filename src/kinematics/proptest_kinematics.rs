//! Property-based tests for orbital angle advancement.

use proptest::prelude::*;

use super::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A body with twice the period advances exactly half as far.
    #[test]
    fn prop_double_period_half_advance(
        period in 0.1f64..100_000.0,
        time_scale in 0.001f64..100.0,
        delta in 0.0f64..0.25,
    ) {
        let short = angle_advance(period, time_scale, delta);
        let long = angle_advance(period * 2.0, time_scale, delta);
        prop_assert!(
            (short - 2.0 * long).abs() <= 1e-12 * short.abs().max(1.0),
            "period {} advanced {}, period {} advanced {}", period, short, period * 2.0, long
        );
    }

    /// Paused time never moves anything, whatever the frame delta.
    #[test]
    fn prop_paused_is_still(
        period in -100_000.0f64..100_000.0,
        time_scale in -10.0f64..=0.0,
        delta in 0.0f64..10.0,
    ) {
        prop_assert_eq!(angle_advance(period, time_scale, delta), 0.0);
    }

    /// Accumulated angle equals 2π × simulated days / period, independent of
    /// how the time is split into frames.
    #[test]
    fn prop_advance_matches_simulated_days(
        period in 0.5f64..5_000.0,
        time_scale in 0.01f64..30.0,
        deltas in prop::collection::vec(0.0f64..0.1, 1..50),
    ) {
        let mut angle = 0.0;
        let mut days = 0.0;
        for dt in &deltas {
            angle += angle_advance(period, time_scale, *dt);
            days += dt * time_scale;
        }
        let expected = TAU * days / period;
        prop_assert!((angle - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    /// Orbit direction follows the sign of the period.
    #[test]
    fn prop_direction_follows_sign(
        period in 0.1f64..1_000.0,
        time_scale in 0.01f64..30.0,
        delta in 0.001f64..0.25,
    ) {
        prop_assert!(angle_advance(period, time_scale, delta) > 0.0);
        prop_assert!(angle_advance(-period, time_scale, delta) < 0.0);
    }
}
