//! Orbital kinematics: per-frame angle accumulators and the position report.
//!
//! Motion is closed-form. Each body keeps an orbital angle and a spin angle
//! that advance every frame by
//!
//! ```text
//! advance = (2π × 60 / period_days) × (time_scale / 60) × delta_secs
//! ```
//!
//! so relative angular velocities are period-correct. The 60s are a
//! frame-rate calibration and cancel out. After the update, one report pass
//! walks the registry tree (parents first) and publishes every body's world
//! position and rendered size into [`BodyReports`].

use std::collections::HashMap;
use std::f64::consts::TAU;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bodies::{BodyId, CelestialBodyData, SolarSystem};
use crate::config::ScaleTuning;
use crate::scaling;
use crate::types::{
    FRAME_RATE_CALIBRATION, FrameSet, HOURS_PER_DAY, SimulationClock, SimulationState,
};

#[cfg(test)]
mod proptest_kinematics;

// === Pure motion ===

/// Radians per calibrated frame at time scale 1 for a body with the given
/// period. Zero or non-finite periods do not move. A negative period turns
/// the other way.
pub fn angular_speed(period_days: f64) -> f64 {
    if period_days == 0.0 || !period_days.is_finite() {
        return 0.0;
    }
    TAU * FRAME_RATE_CALIBRATION / period_days
}

/// Angle change over one frame. Nothing moves while `time_scale <= 0`.
pub fn angle_advance(period_days: f64, time_scale: f64, delta_secs: f64) -> f64 {
    if time_scale <= 0.0 {
        return 0.0;
    }
    angular_speed(period_days) * (time_scale / FRAME_RATE_CALIBRATION) * delta_secs
}

/// Angle change for a fixed rate in radians per calibrated frame, used by
/// cloud and ring spin. Paused by the same rule as orbits.
pub fn rate_advance(rate: f64, time_scale: f64, delta_secs: f64) -> f64 {
    if time_scale <= 0.0 {
        return 0.0;
    }
    rate * (time_scale / FRAME_RATE_CALIBRATION) * delta_secs
}

/// Offset in the ecliptic (XZ) plane for an orbit angle and radius.
pub fn orbit_offset(angle: f64, radius: f64) -> Vec3 {
    Vec3::new(
        (angle.cos() * radius) as f32,
        0.0,
        (angle.sin() * radius) as f32,
    )
}

// === Components ===

/// Logical body entity. Visual children hang off this entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct CelestialBody {
    pub id: BodyId,
    pub parent: Option<BodyId>,
    /// Position in the parent's moon list (or the top level).
    pub index: usize,
}

/// Orbit and spin accumulators for one body.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct OrbitalMotion {
    /// Radians around the parent.
    pub orbit_angle: f64,
    /// Radians around the body's own axis.
    pub spin_angle: f64,
    /// `None` for bodies that do not orbit (the Sun).
    pub orbital_period_days: Option<f64>,
    /// Rotation period converted to days. Signed.
    pub rotation_period_days: f64,
}

impl OrbitalMotion {
    /// Motion for a registry body, starting at the given orbit angle.
    pub fn new(body: &CelestialBodyData, initial_angle: f64) -> Self {
        Self {
            orbit_angle: initial_angle,
            spin_angle: 0.0,
            orbital_period_days: body.orbital_period_days(),
            rotation_period_days: body.rotation_period_hours / HOURS_PER_DAY,
        }
    }

    /// Advance both accumulators by one frame.
    pub fn advance(&mut self, time_scale: f64, delta_secs: f64) {
        if let Some(period) = self.orbital_period_days {
            self.orbit_angle += angle_advance(period, time_scale, delta_secs);
        }
        self.spin_angle += angle_advance(self.rotation_period_days, time_scale, delta_secs);
    }
}

/// Seed for initial orbit angles. Random when `None`.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct OrbitSeed(pub Option<u64>);

// === Report ===

/// Where a body is this frame and how large it is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyReport {
    pub position: Vec3,
    pub size: f32,
}

/// Per-frame blackboard of body positions and sizes, written once by
/// [`report_positions`] and read by the camera, picking and visuals.
#[derive(Resource, Default, Debug)]
pub struct BodyReports {
    reports: HashMap<BodyId, BodyReport>,
}

impl BodyReports {
    pub fn get(&self, id: BodyId) -> Option<BodyReport> {
        self.reports.get(&id).copied()
    }

    pub fn insert(&mut self, id: BodyId, report: BodyReport) {
        self.reports.insert(id, report);
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, BodyReport)> + '_ {
        self.reports.iter().map(|(id, report)| (*id, *report))
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Compute every body's report from its orbit angle, walking parents before
/// moons so a moon can be placed around its planet's final position.
pub fn compute_reports(
    system: &SolarSystem,
    tuning: &ScaleTuning,
    sim: &SimulationState,
    angles: &HashMap<BodyId, f64>,
) -> BodyReports {
    let mode = sim.scale_mode;
    let mut out = BodyReports::default();

    for visit in system.walk() {
        let angle = angles.get(&visit.body.id).copied().unwrap_or(0.0);
        let report = match visit.parent.and_then(|p| out.get(p.id)) {
            Some(parent) => {
                let parent_size = f64::from(parent.size);
                let radius = scaling::moon_orbit_radius(tuning, parent_size, visit.index);
                BodyReport {
                    position: parent.position + orbit_offset(angle, radius),
                    size: scaling::moon_size(tuning, parent_size) as f32,
                }
            }
            None => {
                let distance = scaling::body_distance(tuning, mode, visit.body);
                BodyReport {
                    position: orbit_offset(angle, distance),
                    size: scaling::body_size(tuning, mode, visit.body) as f32,
                }
            }
        };
        out.insert(visit.body.id, report);
    }

    out
}

// === Plugin ===

/// Plugin providing orbital motion, the simulated clock and the report pass.
pub struct KinematicsPlugin;

impl Plugin for KinematicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SolarSystem>()
            .init_resource::<SimulationState>()
            .init_resource::<SimulationClock>()
            .init_resource::<ScaleTuning>()
            .init_resource::<OrbitSeed>()
            .init_resource::<BodyReports>()
            .register_type::<SimulationClock>()
            .configure_sets(
                Update,
                (
                    FrameSet::Controls,
                    FrameSet::Kinematics,
                    FrameSet::Report,
                    FrameSet::Camera,
                    FrameSet::Visuals,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_bodies)
            .add_systems(
                Update,
                (
                    (advance_clock, advance_motion).in_set(FrameSet::Kinematics),
                    report_positions.in_set(FrameSet::Report),
                ),
            );
    }
}

/// Spawn one logical entity per registry body with a random orbit phase.
pub fn spawn_bodies(mut commands: Commands, system: Res<SolarSystem>, seed: Res<OrbitSeed>) {
    let mut rng = match seed.0 {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut count = 0;
    for visit in system.walk() {
        let body = visit.body;
        commands.spawn((
            Name::new(body.name),
            CelestialBody {
                id: body.id,
                parent: visit.parent.map(|p| p.id),
                index: visit.index,
            },
            OrbitalMotion::new(body, rng.gen_range(0.0..TAU)),
            Transform::default(),
            Visibility::default(),
        ));
        count += 1;
    }

    info!("Spawned {} celestial bodies", count);
}

fn advance_clock(sim: Res<SimulationState>, time: Res<Time>, mut clock: ResMut<SimulationClock>) {
    if sim.is_paused() {
        return;
    }
    clock.elapsed_days += time.delta_secs_f64() * sim.time_scale;
}

fn advance_motion(sim: Res<SimulationState>, time: Res<Time>, mut bodies: Query<&mut OrbitalMotion>) {
    if sim.is_paused() {
        return;
    }
    let dt = time.delta_secs_f64();
    for mut motion in bodies.iter_mut() {
        motion.advance(sim.time_scale, dt);
    }
}

/// Publish positions and sizes, and move each body's anchor to match.
pub fn report_positions(
    system: Res<SolarSystem>,
    tuning: Res<ScaleTuning>,
    sim: Res<SimulationState>,
    mut reports: ResMut<BodyReports>,
    mut bodies: Query<(&CelestialBody, &OrbitalMotion, &mut Transform)>,
) {
    let angles: HashMap<BodyId, f64> = bodies
        .iter()
        .map(|(body, motion, _)| (body.id, motion.orbit_angle))
        .collect();

    *reports = compute_reports(&system, &tuning, &sim, &angles);

    for (body, _, mut transform) in bodies.iter_mut() {
        if let Some(report) = reports.get(body.id) {
            transform.translation = report.position;
            transform.scale = Vec3::splat(report.size);
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::types::ScaleMode;

    #[test]
    fn double_period_advances_half_as_far() {
        let fast = angle_advance(100.0, 1.0, 0.016);
        let slow = angle_advance(200.0, 1.0, 0.016);
        assert_eq!(fast, 2.0 * slow);
    }

    #[test]
    fn paused_time_does_not_move() {
        for period in [0.32, 27.3, 365.25, -5.88] {
            assert_eq!(angle_advance(period, 0.0, 0.5), 0.0);
            assert_eq!(angle_advance(period, -1.0, 0.5), 0.0);
        }
    }

    #[test]
    fn one_period_of_simulated_time_is_a_full_turn() {
        // 365.25 simulated days at 1 day per second
        let turn = angle_advance(365.25, 1.0, 365.25);
        assert_relative_eq!(turn, TAU, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_periods_do_not_move() {
        assert_eq!(angular_speed(0.0), 0.0);
        assert_eq!(angular_speed(f64::NAN), 0.0);
        assert_eq!(angular_speed(f64::INFINITY), 0.0);
    }

    #[test]
    fn retrograde_period_turns_backwards() {
        assert!(angle_advance(-5.88, 1.0, 1.0) < 0.0);
    }

    #[test]
    fn sun_spins_but_does_not_orbit() {
        let system = SolarSystem::default();
        let sun = system.find(BodyId::Sun).unwrap();
        let mut motion = OrbitalMotion::new(sun, 1.0);
        motion.advance(1.0, 1.0);
        assert_eq!(motion.orbit_angle, 1.0);
        assert!(motion.spin_angle > 0.0);
    }

    #[test]
    fn rotation_uses_hours_as_days() {
        let system = SolarSystem::default();
        let earth = system.find(BodyId::Earth).unwrap();
        let mut motion = OrbitalMotion::new(earth, 0.0);
        // One simulated day
        motion.advance(1.0, 1.0);
        assert_relative_eq!(motion.spin_angle, TAU, epsilon = 1e-9);
    }

    #[test]
    fn reports_place_moons_around_their_planet() {
        let system = SolarSystem::default();
        let tuning = ScaleTuning::default();
        let sim = SimulationState::default();
        let angles = HashMap::new();
        let reports = compute_reports(&system, &tuning, &sim, &angles);

        assert_eq!(reports.len(), BodyId::ALL.len());

        let earth = reports.get(BodyId::Earth).unwrap();
        let moon = reports.get(BodyId::Moon).unwrap();
        assert_relative_eq!(earth.position.x, 50.0);
        assert_relative_eq!(moon.size, earth.size * 0.2, epsilon = 1e-6);
        assert_relative_eq!(
            moon.position.distance(earth.position),
            earth.size * 2.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn sun_reports_at_origin_in_every_mode() {
        let system = SolarSystem::default();
        let tuning = ScaleTuning::default();
        for mode in ScaleMode::ALL {
            let sim = SimulationState {
                scale_mode: mode,
                ..default()
            };
            let mut angles = HashMap::new();
            angles.insert(BodyId::Sun, 2.0);
            let reports = compute_reports(&system, &tuning, &sim, &angles);
            let sun = reports.get(BodyId::Sun).unwrap();
            assert_eq!(sun.position, Vec3::ZERO);
            assert_eq!(sun.size, 8.0);
        }
    }

    #[test]
    fn orbit_offset_lies_in_the_ecliptic() {
        let p = orbit_offset(1.234, 10.0);
        assert_eq!(p.y, 0.0);
        assert_relative_eq!(p.length(), 10.0, epsilon = 1e-5);
    }
}
