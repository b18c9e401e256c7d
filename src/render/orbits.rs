//! Orbit path rendering using Bevy Gizmos.
//!
//! Orbits are drawn as circles in the ecliptic (XZ) plane at each top-level
//! body's mapped distance. Moons are laid out relative to their parent's
//! rendered size and get no path.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::bodies::{BodyKind, SolarSystem};
use crate::config::ScaleTuning;
use crate::scaling;
use crate::types::SimulationState;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>();
    }
}

/// Settings for orbit path rendering. Visibility itself lives in
/// [`SimulationState::show_orbits`].
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Number of segments for a full circle.
    pub segments: usize,
    /// Alpha for planet orbits.
    pub alpha: f32,
    /// Alpha for dwarf planets and asteroids.
    pub minor_alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            segments: 128,
            alpha: 0.2,
            minor_alpha: 0.1,
        }
    }
}

/// Closed polyline approximating a circle of `radius` around the origin in
/// the XZ plane. The first point is repeated at the end.
pub fn orbit_circle(radius: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(8);
    (0..=segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * TAU;
            Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
        })
        .collect()
}

/// Draw orbit circles for every top-level orbiting body.
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    system: Res<SolarSystem>,
    tuning: Res<ScaleTuning>,
    sim: Res<SimulationState>,
) {
    if !sim.show_orbits {
        return;
    }

    for body in system.top_level() {
        if body.orbit.is_none() {
            continue;
        }
        let radius = scaling::body_distance(&tuning, sim.scale_mode, body) as f32;
        if !radius.is_finite() || radius <= 0.0 {
            continue;
        }
        let alpha = match body.kind {
            BodyKind::Planet => settings.alpha,
            _ => settings.minor_alpha,
        };
        gizmos.linestrip(
            orbit_circle(radius, settings.segments),
            Color::srgba(0.53, 0.53, 0.53, alpha),
        );
    }
}
