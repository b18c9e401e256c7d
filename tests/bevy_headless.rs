//! Headless Bevy integration tests.
//!
//! These tests run the control, kinematics, report and camera passes in a
//! real schedule without a window or GPU.

mod common;

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use bevy::prelude::*;
use orrery::bodies::{BodyId, SolarSystem};
use orrery::camera::CameraController;
use orrery::controls::ControlAction;
use orrery::kinematics::BodyReports;
use orrery::types::{
    CameraMode, DEFAULT_TIME_SCALE, NavigationState, SimulationClock, SimulationState,
};

use common::{camera_transform, headless_app, orbit_angles, run_frames, send, spin_angle};

#[test]
fn every_registry_body_is_spawned_and_reported() {
    let mut app = headless_app();
    let expected = SolarSystem::default().walk().count();

    assert_eq!(orbit_angles(&mut app).len(), expected);
    let reports = app.world().resource::<BodyReports>();
    assert_eq!(reports.len(), expected);
    assert_eq!(
        reports.get(BodyId::Sun).map(|r| r.position),
        Some(Vec3::ZERO)
    );
}

#[test]
fn paused_simulation_does_not_move() {
    let mut app = headless_app();
    send(&mut app, ControlAction::SetTimeScale(0.0));
    app.update();

    let before = orbit_angles(&mut app);
    let clock_before = app.world().resource::<SimulationClock>().elapsed_days;
    let spin_before = spin_angle(&mut app, BodyId::Earth);

    run_frames(&mut app, 20);

    assert_eq!(orbit_angles(&mut app), before);
    assert_eq!(
        app.world().resource::<SimulationClock>().elapsed_days,
        clock_before
    );
    assert_eq!(spin_angle(&mut app, BodyId::Earth), spin_before);
}

#[test]
fn angles_advance_in_inverse_proportion_to_period() {
    let mut app = headless_app();
    send(&mut app, ControlAction::SetTimeScale(7.0));
    app.update();

    let before = orbit_angles(&mut app);
    run_frames(&mut app, 60);
    let after = orbit_angles(&mut app);

    let earth = after[&BodyId::Earth] - before[&BodyId::Earth];
    let mars = after[&BodyId::Mars] - before[&BodyId::Mars];
    let system = SolarSystem::default();
    let period = |id| system.find(id).and_then(|b| b.orbital_period_days()).unwrap();

    assert!(earth > 0.0);
    assert_relative_eq!(
        earth / mars,
        period(BodyId::Mars) / period(BodyId::Earth),
        max_relative = 1e-9
    );
}

#[test]
fn orbit_angle_tracks_the_simulated_clock() {
    let mut app = headless_app();
    send(&mut app, ControlAction::SetTimeScale(1.0));
    app.update();

    let before = orbit_angles(&mut app)[&BodyId::Earth];
    let clock_before = app.world().resource::<SimulationClock>().elapsed_days;
    run_frames(&mut app, 90);
    let after = orbit_angles(&mut app)[&BodyId::Earth];
    let days = app.world().resource::<SimulationClock>().elapsed_days - clock_before;

    assert!(days > 0.0);
    assert_relative_eq!(after - before, TAU * days / 365.25, max_relative = 1e-9);
}

#[test]
fn triton_orbits_backwards() {
    let mut app = headless_app();
    send(&mut app, ControlAction::SetTimeScale(1.0));
    app.update();

    let before = orbit_angles(&mut app)[&BodyId::Triton];
    run_frames(&mut app, 10);
    let after = orbit_angles(&mut app)[&BodyId::Triton];
    assert!(after < before);
}

#[test]
fn selecting_a_body_switches_to_follow() {
    let mut app = headless_app();
    send(&mut app, ControlAction::SetCameraMode(CameraMode::Free));
    app.update();
    send(&mut app, ControlAction::Select(Some(BodyId::Mars)));
    app.update();

    let sim = app.world().resource::<SimulationState>();
    let nav = app.world().resource::<NavigationState>();
    assert_eq!(sim.selected_body, Some(BodyId::Mars));
    assert_eq!(nav.camera_mode, CameraMode::Follow);
    assert_eq!(nav.target, Some(BodyId::Mars));
}

#[test]
fn camera_looks_at_this_frames_position() {
    let mut app = headless_app();
    // Fast enough that a one-frame lag would be visible
    send(&mut app, ControlAction::SetTimeScale(30.0));
    send(&mut app, ControlAction::Select(Some(BodyId::Mercury)));
    run_frames(&mut app, 5);

    let target = app
        .world()
        .resource::<BodyReports>()
        .get(BodyId::Mercury)
        .map(|r| r.position)
        .unwrap();
    let camera = camera_transform(&mut app);
    let to_target = (target - camera.translation).normalize();
    assert_relative_eq!(camera.forward().dot(to_target), 1.0, epsilon = 1e-5);
}

#[test]
fn free_mode_keeps_eye_and_tracks_last_followed_body() {
    let mut app = headless_app();
    send(&mut app, ControlAction::SetTimeScale(30.0));
    send(&mut app, ControlAction::Select(Some(BodyId::Venus)));
    run_frames(&mut app, 10);

    send(&mut app, ControlAction::SetCameraMode(CameraMode::Free));
    app.update();
    let eye = camera_transform(&mut app).translation;

    run_frames(&mut app, 10);
    let camera = camera_transform(&mut app);
    let venus = app
        .world()
        .resource::<BodyReports>()
        .get(BodyId::Venus)
        .map(|r| r.position)
        .unwrap();

    assert_eq!(camera.translation, eye);
    assert_eq!(
        app.world().resource::<CameraController>().last_followed,
        Some(BodyId::Venus)
    );
    let to_venus = (venus - camera.translation).normalize();
    assert_relative_eq!(camera.forward().dot(to_venus), 1.0, epsilon = 1e-5);
}

#[test]
fn navigation_transition_completes() {
    let mut app = headless_app();
    send(&mut app, ControlAction::SetTimeScale(0.0));
    send(&mut app, ControlAction::NavigateTo(BodyId::Earth));
    send(&mut app, ControlAction::Select(Some(BodyId::Earth)));
    app.update();
    assert!(app.world().resource::<NavigationState>().transitioning);

    run_frames(&mut app, 600);
    assert!(!app.world().resource::<NavigationState>().transitioning);
}

/// Frames until the transition flag clears, if it does within `limit`.
fn frames_until_arrival(app: &mut App, limit: usize) -> Option<usize> {
    (1..=limit).find(|_| {
        app.update();
        !app.world().resource::<NavigationState>().transitioning
    })
}

fn report_position(app: &App, id: BodyId) -> Vec3 {
    app.world()
        .resource::<BodyReports>()
        .get(id)
        .map(|r| r.position)
        .unwrap()
}

#[test]
fn navigation_completes_on_a_fast_moon() {
    let mut app = headless_app();
    send(&mut app, ControlAction::SetTimeScale(DEFAULT_TIME_SCALE));
    send(&mut app, ControlAction::NavigateTo(BodyId::Phobos));
    send(&mut app, ControlAction::Select(Some(BodyId::Phobos)));
    app.update();
    assert!(app.world().resource::<NavigationState>().transitioning);

    let start = report_position(&app, BodyId::Phobos);
    let frames = frames_until_arrival(&mut app, 3000);
    assert!(frames.is_some(), "transition never completed");
    assert!(report_position(&app, BodyId::Phobos).distance(start) > 0.1);
}

#[test]
fn navigation_completes_on_a_planet_at_speed() {
    let mut app = headless_app();
    send(&mut app, ControlAction::SetTimeScale(7.0));
    send(&mut app, ControlAction::NavigateTo(BodyId::Earth));
    send(&mut app, ControlAction::Select(Some(BodyId::Earth)));
    app.update();
    assert!(app.world().resource::<NavigationState>().transitioning);

    assert!(frames_until_arrival(&mut app, 3000).is_some());
}

#[test]
fn deselecting_stops_the_chase() {
    let mut app = headless_app();
    send(&mut app, ControlAction::SetTimeScale(7.0));
    send(&mut app, ControlAction::Select(Some(BodyId::Mars)));
    run_frames(&mut app, 30);

    send(&mut app, ControlAction::Select(None));
    app.update();
    let eye = camera_transform(&mut app).translation;
    let mars = report_position(&app, BodyId::Mars);

    run_frames(&mut app, 30);
    assert_eq!(camera_transform(&mut app).translation, eye);
    assert!(report_position(&app, BodyId::Mars).distance(mars) > 0.0);
    assert_eq!(app.world().resource::<NavigationState>().target, None);
}
