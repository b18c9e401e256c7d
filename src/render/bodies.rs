//! Visual children for celestial bodies.
//!
//! The logical entity spawned by kinematics is the anchor: its translation is
//! the reported position and its scale is the rendered size. Everything here
//! is a child drawn in unit-sphere coordinates, so meshes are shared and
//! scale-mode changes need no remeshing.

use std::f64::consts::TAU;

use bevy::prelude::*;

use crate::bodies::{BodyId, SolarSystem};
use crate::config::PulseTuning;
use crate::kinematics::{CelestialBody, OrbitalMotion, rate_advance};
use crate::render::rings::{self, RingSystem};
use crate::render::textures::{self, TextureRequests, TextureTarget};
use crate::types::{CameraMode, NavigationState, SimulationState};

/// Glow shell radius relative to the surface.
const GLOW_SCALE: f32 = 1.02;
const GLOW_ALPHA: f32 = 0.1;
/// Cloud shell radius relative to the surface.
const CLOUD_SCALE: f32 = 1.005;
const CLOUD_ALPHA: f32 = 0.5;
/// Cloud spin in radians per calibrated frame at time scale 1.
pub const CLOUD_SPIN_RATE: f64 = 0.3;

/// The textured sphere of a body.
#[derive(Component, Clone, Copy, Debug)]
pub struct BodySurface {
    pub id: BodyId,
    pub anchor: Entity,
    pub axial_tilt_deg: f64,
}

/// Translucent halo around bodies with a thick atmosphere.
#[derive(Component)]
pub struct AtmosphereGlow;

/// Earth's cloud shell.
#[derive(Component, Clone, Copy, Debug)]
pub struct CloudLayer {
    pub axial_tilt_deg: f64,
    pub spin: f64,
}

/// Shared unit sphere.
#[derive(Resource)]
pub struct BodyMeshes {
    pub sphere: Handle<Mesh>,
}

impl FromWorld for BodyMeshes {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        Self {
            sphere: meshes.add(Sphere::new(1.0).mesh().uv(64, 32)),
        }
    }
}

/// Orientation of a body surface: axial tilt about Z, then spin about the
/// tilted axis.
pub fn surface_rotation(axial_tilt_deg: f64, spin: f64) -> Quat {
    let tilt = (axial_tilt_deg as f32).to_radians();
    Quat::from_rotation_z(tilt) * Quat::from_rotation_y(spin.rem_euclid(TAU) as f32)
}

/// Scale factor of the selection pulse at a wall-clock time.
pub fn pulse_scale(tuning: &PulseTuning, wall_secs: f32) -> f32 {
    1.0 + (wall_secs * tuning.frequency).sin() * tuning.amplitude
}

/// Whether a body should pulse. The followed body stays still so the camera
/// does not see it breathe.
pub fn pulse_active(id: BodyId, sim: &SimulationState, nav: &NavigationState) -> bool {
    if sim.selected_body != Some(id) {
        return false;
    }
    !(nav.camera_mode == CameraMode::Follow && nav.target == Some(id))
}

/// Spawn surface, glow, clouds and rings under each new body anchor.
#[allow(clippy::too_many_arguments)]
pub fn attach_body_visuals(
    mut commands: Commands,
    system: Res<SolarSystem>,
    body_meshes: Res<BodyMeshes>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut requests: ResMut<TextureRequests>,
    anchors: Query<(Entity, &CelestialBody), Added<CelestialBody>>,
) {
    let mut count = 0;
    for (anchor, body) in anchors.iter() {
        let Some(data) = system.find(body.id) else {
            warn!("No registry entry for {}; skipping visuals", body.id);
            continue;
        };
        let id = data.id;

        let surface_material = materials.add(textures::surface_material(id));
        requests.request(
            &asset_server,
            textures::surface_texture_path(id),
            surface_material.clone(),
            TextureTarget::Surface,
        );
        commands.spawn((
            Name::new(format!("{} surface", data.name)),
            BodySurface {
                id,
                anchor,
                axial_tilt_deg: data.axial_tilt_deg,
            },
            Mesh3d(body_meshes.sphere.clone()),
            MeshMaterial3d(surface_material),
            Transform::from_rotation(surface_rotation(data.axial_tilt_deg, 0.0)),
            ChildOf(anchor),
        ));

        if textures::has_atmosphere_glow(id) {
            let glow = materials.add(StandardMaterial {
                base_color: textures::fallback_color(id).with_alpha(GLOW_ALPHA),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            });
            commands.spawn((
                AtmosphereGlow,
                Mesh3d(body_meshes.sphere.clone()),
                MeshMaterial3d(glow),
                Transform::from_scale(Vec3::splat(GLOW_SCALE)),
                ChildOf(anchor),
            ));
        }

        if id == BodyId::Earth {
            let clouds = materials.add(StandardMaterial {
                base_color: Color::WHITE.with_alpha(CLOUD_ALPHA),
                alpha_mode: AlphaMode::Blend,
                perceptual_roughness: 1.0,
                ..default()
            });
            let cloud_entity = commands
                .spawn((
                    CloudLayer {
                        axial_tilt_deg: data.axial_tilt_deg,
                        spin: 0.0,
                    },
                    Mesh3d(body_meshes.sphere.clone()),
                    MeshMaterial3d(clouds.clone()),
                    Transform::from_scale(Vec3::splat(CLOUD_SCALE))
                        .with_rotation(surface_rotation(data.axial_tilt_deg, 0.0)),
                    Visibility::Hidden,
                    ChildOf(anchor),
                ))
                .id();
            requests.request(
                &asset_server,
                textures::EARTH_CLOUDS_PATH,
                clouds,
                TextureTarget::Clouds(cloud_entity),
            );
        }

        if data.has_rings {
            let spec = rings::ring_spec(id);
            let ring_material = materials.add(rings::ring_material(&spec));
            if let Some(path) = textures::ring_texture_path(id) {
                requests.request(
                    &asset_server,
                    path,
                    ring_material.clone(),
                    TextureTarget::Rings,
                );
            }
            commands.spawn((
                Name::new(format!("{} rings", data.name)),
                RingSystem {
                    axial_tilt_deg: data.axial_tilt_deg,
                    spin: 0.0,
                },
                Mesh3d(meshes.add(rings::ring_mesh(&spec))),
                MeshMaterial3d(ring_material),
                Transform::from_rotation(rings::ring_rotation(data.axial_tilt_deg, 0.0)),
                ChildOf(anchor),
            ));
        }

        count += 1;
    }

    if count > 0 {
        info!("Attached visuals to {} bodies", count);
    }
}

/// Apply spin and the selection pulse to body surfaces.
pub fn animate_surfaces(
    sim: Res<SimulationState>,
    nav: Res<NavigationState>,
    pulse: Res<PulseTuning>,
    real_time: Res<Time<Real>>,
    anchors: Query<&OrbitalMotion>,
    mut surfaces: Query<(&BodySurface, &mut Transform)>,
) {
    let wall_secs = real_time.elapsed_secs();
    for (surface, mut transform) in surfaces.iter_mut() {
        if let Ok(motion) = anchors.get(surface.anchor) {
            transform.rotation = surface_rotation(surface.axial_tilt_deg, motion.spin_angle);
        }
        let scale = if pulse_active(surface.id, &sim, &nav) {
            pulse_scale(&pulse, wall_secs)
        } else {
            1.0
        };
        transform.scale = Vec3::splat(scale);
    }
}

pub fn spin_clouds(
    sim: Res<SimulationState>,
    time: Res<Time>,
    mut clouds: Query<(&mut CloudLayer, &mut Transform)>,
) {
    let step = rate_advance(CLOUD_SPIN_RATE, sim.time_scale, time.delta_secs_f64());
    if step == 0.0 {
        return;
    }
    for (mut layer, mut transform) in clouds.iter_mut() {
        layer.spin += step;
        transform.rotation = surface_rotation(layer.axial_tilt_deg, layer.spin);
    }
}
