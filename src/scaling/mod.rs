//! Scale mapper: physical distances and radii to render units.
//!
//! All functions here are pure. They take the tuning constants explicitly so
//! the same mapping is used by the report pass, the asteroid belt and tests.

use crate::bodies::{BodyKind, CelestialBodyData};
use crate::config::{ScaleTuning, SizeTier};
use crate::types::{EARTH_RADIUS_KM, ScaleMode};

#[cfg(test)]
mod proptest_scaling;

// === Distances ===

/// Render distance from the origin for a body `distance_au` from the Sun.
///
/// Bodies without an orbit sit at the origin in every mode.
pub fn render_distance(tuning: &ScaleTuning, mode: ScaleMode, distance_au: Option<f64>) -> f64 {
    let Some(au) = distance_au else {
        return 0.0;
    };
    match mode {
        ScaleMode::Realistic => au * tuning.realistic_distance_factor * tuning.distance_unit,
        ScaleMode::Visible => au * tuning.visible_distance_factor * tuning.distance_unit,
        // ln(1) = 0, so the Sun stays at the origin without a special case
        ScaleMode::Logarithmic => (au + 1.0).ln() * tuning.log_distance_factor,
    }
}

// === Sizes ===

/// Radius relative to Earth's.
pub fn relative_radius(radius_km: f64) -> f64 {
    radius_km / EARTH_RADIUS_KM
}

/// The tier a physical radius falls into. Thresholds are exclusive, and the
/// last tier catches everything below the others.
pub fn size_tier(tuning: &ScaleTuning, radius_km: f64) -> Option<&SizeTier> {
    tuning
        .tiers
        .iter()
        .find(|tier| radius_km > tier.min_radius_km)
        .or_else(|| tuning.tiers.last())
}

/// Rendered size (sphere radius in render units) for a body of the given kind
/// and physical radius.
pub fn render_size(tuning: &ScaleTuning, mode: ScaleMode, kind: BodyKind, radius_km: f64) -> f64 {
    if kind == BodyKind::Star {
        return tuning.star_size;
    }

    let rel = relative_radius(radius_km);
    let tiered = |factor: f64| {
        size_tier(tuning, radius_km)
            .map(|tier| (rel * tier.multiplier).max(tier.floor))
            .unwrap_or(rel)
            * factor
    };

    match mode {
        ScaleMode::Realistic => tiered(tuning.realistic_size_factor),
        ScaleMode::Visible => tiered(tuning.visible_size_factor),
        ScaleMode::Logarithmic => ((rel + 1.0).ln() * tuning.log_size_factor).max(tuning.log_min_size),
    }
}

/// Rendered size of a registry body.
pub fn body_size(tuning: &ScaleTuning, mode: ScaleMode, body: &CelestialBodyData) -> f64 {
    render_size(tuning, mode, body.kind, body.radius_km)
}

/// Distance of a top-level body from the origin.
pub fn body_distance(tuning: &ScaleTuning, mode: ScaleMode, body: &CelestialBodyData) -> f64 {
    render_distance(tuning, mode, body.distance_au())
}

// === Moons ===

/// Orbit radius of the `index`-th moon around a parent of rendered size
/// `parent_size`. Moons are spaced outward in list order.
pub fn moon_orbit_radius(tuning: &ScaleTuning, parent_size: f64, index: usize) -> f64 {
    parent_size * (tuning.moon_distance_base + index as f64 * tuning.moon_distance_step)
}

/// Rendered size of a moon, relative to its parent.
pub fn moon_size(tuning: &ScaleTuning, parent_size: f64) -> f64 {
    parent_size * tuning.moon_size_ratio
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::bodies::{BodyId, SolarSystem};

    fn size_of(id: BodyId, mode: ScaleMode) -> f64 {
        let body = SolarSystem::default().find(id).unwrap();
        body_size(&ScaleTuning::default(), mode, body)
    }

    #[test]
    fn earth_distance_per_mode() {
        let tuning = ScaleTuning::default();
        assert_relative_eq!(
            render_distance(&tuning, ScaleMode::Realistic, Some(1.0)),
            37.5
        );
        assert_relative_eq!(render_distance(&tuning, ScaleMode::Visible, Some(1.0)), 50.0);
        assert_relative_eq!(
            render_distance(&tuning, ScaleMode::Logarithmic, Some(1.0)),
            2.0f64.ln() * 20.0
        );
    }

    #[test]
    fn earth_visible_size() {
        // rel = 1, large-terrestrial tier: max(1.6, 1.2) * 1.2
        assert_relative_eq!(size_of(BodyId::Earth, ScaleMode::Visible), 1.92, epsilon = 1e-12);
    }

    #[test]
    fn jupiter_visible_size() {
        let rel = 69_911.0 / 6371.0;
        let expected = (rel * 0.65f64).max(2.2) * 1.2;
        assert_relative_eq!(size_of(BodyId::Jupiter, ScaleMode::Visible), expected);
        assert!((expected - 8.56).abs() < 0.01);
    }

    #[test]
    fn tiny_moons_hit_the_floor() {
        // Phobos: rel * 3 is far below 0.7
        assert_relative_eq!(size_of(BodyId::Phobos, ScaleMode::Realistic), 0.7 * 0.8);
    }

    #[test]
    fn star_size_is_fixed_in_every_mode() {
        for mode in ScaleMode::ALL {
            assert_eq!(size_of(BodyId::Sun, mode), 8.0);
        }
    }

    #[test]
    fn sun_is_finite_in_logarithmic_mode() {
        let tuning = ScaleTuning::default();
        let sun = SolarSystem::default().find(BodyId::Sun).unwrap();
        let d = body_distance(&tuning, ScaleMode::Logarithmic, sun);
        let s = body_size(&tuning, ScaleMode::Logarithmic, sun);
        assert!(d.is_finite() && s.is_finite());
        assert_eq!(d, 0.0);
        assert_eq!(s, 8.0);
        // Same answer when an explicit zero distance is given
        assert_eq!(render_distance(&tuning, ScaleMode::Logarithmic, Some(0.0)), 0.0);
    }

    #[test]
    fn logarithmic_size_has_a_floor() {
        let tuning = ScaleTuning::default();
        let s = render_size(&tuning, ScaleMode::Logarithmic, BodyKind::Moon, 6.2);
        assert_eq!(s, tuning.log_min_size);
    }

    #[test]
    fn tier_thresholds_are_exclusive() {
        let tuning = ScaleTuning::default();
        assert_eq!(size_tier(&tuning, 20_000.0).unwrap().multiplier, 1.6);
        assert_eq!(size_tier(&tuning, 20_000.1).unwrap().multiplier, 0.65);
        assert_eq!(size_tier(&tuning, 1500.0).unwrap().multiplier, 3.0);
        assert_eq!(size_tier(&tuning, 0.0).unwrap().multiplier, 3.0);
    }

    #[test]
    fn moon_layout_scales_with_parent() {
        let tuning = ScaleTuning::default();
        assert_relative_eq!(moon_orbit_radius(&tuning, 2.0, 0), 4.0);
        assert_relative_eq!(moon_orbit_radius(&tuning, 2.0, 2), 10.0);
        assert_relative_eq!(moon_size(&tuning, 2.0), 0.4);
    }
}
