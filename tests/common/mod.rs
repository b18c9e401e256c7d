//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use orrery::bodies::BodyId;
use orrery::camera::{CameraController, MainCamera, OrbitInput, drive_camera};
use orrery::config::{FollowTuning, OrbitControlTuning};
use orrery::controls::{ControlAction, ControlsPlugin};
use orrery::kinematics::{CelestialBody, KinematicsPlugin, OrbitSeed, OrbitalMotion};
use orrery::types::FrameSet;

/// Fixed frame length for deterministic updates.
pub const FRAME: Duration = Duration::from_micros(16_667);

/// Headless app with controls, kinematics and the camera driver, but no
/// window, renderer or input devices.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(OrbitSeed(Some(42)))
        .add_plugins((ControlsPlugin, KinematicsPlugin))
        .init_resource::<CameraController>()
        .init_resource::<OrbitInput>()
        .init_resource::<FollowTuning>()
        .init_resource::<OrbitControlTuning>()
        .add_systems(Update, drive_camera.in_set(FrameSet::Camera));
    app.world_mut().spawn((
        MainCamera,
        Transform::from_translation(orrery::camera::CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    // Startup, plus one frame so time deltas are non-zero from here on
    app.update();
    app.update();
    app
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

pub fn send(app: &mut App, action: ControlAction) {
    app.world_mut().write_message(action);
}

/// Current orbit angle of every body.
pub fn orbit_angles(app: &mut App) -> HashMap<BodyId, f64> {
    let mut query = app.world_mut().query::<(&CelestialBody, &OrbitalMotion)>();
    query
        .iter(app.world())
        .map(|(body, motion)| (body.id, motion.orbit_angle))
        .collect()
}

pub fn spin_angle(app: &mut App, id: BodyId) -> f64 {
    let mut query = app.world_mut().query::<(&CelestialBody, &OrbitalMotion)>();
    query
        .iter(app.world())
        .find(|(body, _)| body.id == id)
        .map(|(_, motion)| motion.spin_angle)
        .unwrap_or(f64::NAN)
}

pub fn camera_transform(app: &mut App) -> Transform {
    let mut query = app
        .world_mut()
        .query_filtered::<&Transform, With<MainCamera>>();
    *query.single(app.world()).expect("one main camera")
}
