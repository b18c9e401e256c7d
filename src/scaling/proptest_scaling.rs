//! Property-based tests for the scale mapper.

use proptest::prelude::*;

use super::*;
use crate::bodies::BodyKind;

fn any_mode() -> impl Strategy<Value = ScaleMode> {
    prop_oneof![
        Just(ScaleMode::Realistic),
        Just(ScaleMode::Visible),
        Just(ScaleMode::Logarithmic),
    ]
}

fn any_non_star() -> impl Strategy<Value = BodyKind> {
    prop_oneof![
        Just(BodyKind::Planet),
        Just(BodyKind::Moon),
        Just(BodyKind::DwarfPlanet),
        Just(BodyKind::Asteroid),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Within one tier a larger radius never renders smaller.
    #[test]
    fn prop_size_monotonic_within_tier(
        mode in any_mode(),
        kind in any_non_star(),
        a in 1.0f64..100_000.0,
        b in 1.0f64..100_000.0,
    ) {
        let tuning = ScaleTuning::default();
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let same_tier = size_tier(&tuning, small) == size_tier(&tuning, large);
        prop_assume!(same_tier);

        let s_small = render_size(&tuning, mode, kind, small);
        let s_large = render_size(&tuning, mode, kind, large);
        prop_assert!(
            s_large >= s_small,
            "radius {} -> {}, radius {} -> {}", small, s_small, large, s_large
        );
    }

    /// Sizes are always finite and positive.
    #[test]
    fn prop_size_finite_positive(
        mode in any_mode(),
        kind in any_non_star(),
        radius in 0.0f64..1_000_000.0,
    ) {
        let s = render_size(&ScaleTuning::default(), mode, kind, radius);
        prop_assert!(s.is_finite());
        prop_assert!(s > 0.0);
    }

    /// Distance mapping preserves ordering from the Sun.
    #[test]
    fn prop_distance_monotonic(
        mode in any_mode(),
        a in 0.0f64..100.0,
        b in 0.0f64..100.0,
    ) {
        let tuning = ScaleTuning::default();
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            render_distance(&tuning, mode, Some(near)) <= render_distance(&tuning, mode, Some(far))
        );
    }

    /// The mapping is deterministic.
    #[test]
    fn prop_size_is_pure(mode in any_mode(), radius in 0.0f64..100_000.0) {
        let tuning = ScaleTuning::default();
        let first = render_size(&tuning, mode, BodyKind::Planet, radius);
        let second = render_size(&tuning, mode, BodyKind::Planet, radius);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}
