//! Planetary ring systems.
//!
//! Rings are flat annuli attached to the body anchor, so their radii are in
//! units of the body's rendered size. Bevy's `Annulus` lies in the XY plane;
//! tilting by `-π/2 + axial_tilt` about X lays it near the equator.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::bodies::BodyId;
use crate::kinematics::rate_advance;
use crate::types::SimulationState;

/// Ring spin in radians per calibrated frame at time scale 1.
pub const RING_SPIN_RATE: f64 = 0.1;

/// Geometry and fallback appearance of one ring system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    /// Inner radius in body radii.
    pub inner: f32,
    /// Outer radius in body radii.
    pub outer: f32,
    pub color: Color,
    pub alpha: f32,
}

/// Ring dimensions for a ringed body.
pub fn ring_spec(id: BodyId) -> RingSpec {
    match id {
        BodyId::Saturn => RingSpec {
            inner: 1.2,
            outer: 2.2,
            color: Color::srgb_u8(0xD8, 0xC4, 0x9A),
            alpha: 0.8,
        },
        // Uranus' rings are narrow and almost black
        BodyId::Uranus => RingSpec {
            inner: 1.6,
            outer: 2.1,
            color: Color::srgb_u8(0x44, 0x44, 0x44),
            alpha: 0.3,
        },
        _ => RingSpec {
            inner: 1.2,
            outer: 2.0,
            color: Color::srgb_u8(0xCC, 0xCC, 0xCC),
            alpha: 0.6,
        },
    }
}

/// Orientation of a ring plane for an axial tilt in degrees and a spin angle.
pub fn ring_rotation(axial_tilt_deg: f64, spin: f64) -> Quat {
    let tilt = (axial_tilt_deg as f32).to_radians();
    Quat::from_rotation_x(-FRAC_PI_2 + tilt) * Quat::from_rotation_z(spin as f32)
}

/// Ring system child of a body anchor.
#[derive(Component, Clone, Copy, Debug)]
pub struct RingSystem {
    pub axial_tilt_deg: f64,
    pub spin: f64,
}

/// Double-sided translucent fallback material for a ring.
pub fn ring_material(spec: &RingSpec) -> StandardMaterial {
    StandardMaterial {
        base_color: spec.color.with_alpha(spec.alpha),
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        perceptual_roughness: 0.9,
        ..default()
    }
}

pub fn ring_mesh(spec: &RingSpec) -> Mesh {
    Mesh::from(Annulus::new(spec.inner, spec.outer))
}

/// Turn every ring system about its own normal.
pub fn spin_rings(
    sim: Res<SimulationState>,
    time: Res<Time>,
    mut rings: Query<(&mut RingSystem, &mut Transform)>,
) {
    let step = rate_advance(RING_SPIN_RATE, sim.time_scale, time.delta_secs_f64());
    if step == 0.0 {
        return;
    }
    for (mut ring, mut transform) in rings.iter_mut() {
        ring.spin += step;
        transform.rotation = ring_rotation(ring.axial_tilt_deg, ring.spin);
    }
}
