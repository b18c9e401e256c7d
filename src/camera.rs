//! Camera controller for the solar system view.
//!
//! Two modes:
//! - **Follow**: the eye eases towards an offset from the navigation target,
//!   sized by the target's rendered size, and always looks at the target.
//! - **Free**: orbit, pan and zoom around a pivot. The eye only moves on user
//!   input. The pivot stays anchored on the last-followed body as it orbits.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::bodies::BodyId;
use crate::config::{FollowTuning, OrbitControlTuning};
use crate::controls::ControlAction;
use crate::kinematics::BodyReports;
use crate::types::{CameraMode, FrameSet, NavigationState};

/// Initial eye position, looking at the origin.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 20.0, 50.0);

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;

pub const NEAR_PLANE: f32 = 0.05;

/// Far enough to keep the sky sphere in view from the outer planets.
pub const FAR_PLANE: f32 = 20_000.0;

/// Radians of orbit per pixel of drag at rotate speed 1.
const ROTATE_PER_PIXEL: f32 = 0.005;

/// Fraction of the orbit radius panned per pixel at pan speed 1.
const PAN_PER_PIXEL: f32 = 0.001;

/// Fractional radius change per scroll line at zoom speed 1.
const ZOOM_STEP: f32 = 0.1;

/// Keep the eye off the poles so `look_at` stays well defined.
const MAX_PITCH: f32 = 1.55;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Controller state carried between frames.
#[derive(Resource, Debug, Default)]
pub struct CameraController {
    /// Body the camera followed most recently. Free mode keeps orbiting it.
    pub last_followed: Option<BodyId>,
    /// Point the camera looks at and orbits around.
    pub pivot: Vec3,
    /// User pan accumulated in free mode, relative to the anchor body.
    pub pan_offset: Vec3,
    /// Eye-to-goal distance on the previous follow frame, for the same target.
    pub chase_gap: Option<f32>,
}

/// Mouse input gathered this frame for free-look. Cleared once consumed.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct OrbitInput {
    /// Drag in pixels.
    pub rotate: Vec2,
    /// Drag in pixels.
    pub pan: Vec2,
    /// Scroll lines, positive zooms in.
    pub zoom: f32,
}

impl OrbitInput {
    pub fn is_idle(&self) -> bool {
        self.rotate == Vec2::ZERO && self.pan == Vec2::ZERO && self.zoom == 0.0
    }
}

/// Outcome of one controller step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraStep {
    pub eye: Vec3,
    pub look_at: Vec3,
    /// The eye is within the arrival distance of its goal.
    pub arrived: bool,
}

/// Plugin providing the camera and its controller.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraController>()
            .init_resource::<OrbitInput>()
            .init_resource::<FollowTuning>()
            .init_resource::<OrbitControlTuning>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    collect_orbit_input.in_set(FrameSet::Controls),
                    drive_camera.in_set(FrameSet::Camera),
                ),
            );
    }
}

// === Pure controller ===

/// Follow distance for a target of the given rendered size.
pub fn follow_distance(tuning: &FollowTuning, size: f32) -> f32 {
    tuning
        .bands
        .iter()
        .find(|band| size >= band.min_size)
        .or_else(|| tuning.bands.last())
        .map(|band| (size * band.multiplier).max(band.min_distance))
        .unwrap_or(size)
}

/// Where the eye should sit to frame a target.
pub fn follow_ideal_eye(tuning: &FollowTuning, target: Vec3, size: f32) -> Vec3 {
    target + Vec3::from_array(tuning.offset) * follow_distance(tuning, size)
}

/// Move `current` a fixed fraction of the way to `ideal`.
pub fn smooth_toward(current: Vec3, ideal: Vec3, factor: f32) -> Vec3 {
    current.lerp(ideal, factor)
}

/// Whether a follow chase has reached its goal.
///
/// A moving target keeps the eased eye a steady distance behind the ideal
/// position, so the chase also counts as arrived once that distance stops
/// changing by more than the easing step would close within the arrival
/// distance.
pub fn chase_arrived(tuning: &FollowTuning, previous_gap: Option<f32>, gap: f32) -> bool {
    if gap <= tuning.arrival_distance {
        return true;
    }
    previous_gap.is_some_and(|previous| {
        (previous - gap).abs() <= tuning.smoothing * tuning.arrival_distance
    })
}

/// Result of applying free-look input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitStep {
    pub eye: Vec3,
    /// How far the pivot moved due to panning.
    pub pan: Vec3,
}

/// Apply orbit, pan and zoom input around `pivot`.
pub fn orbit_eye(eye: Vec3, pivot: Vec3, input: OrbitInput, tuning: &OrbitControlTuning) -> OrbitStep {
    if input.is_idle() {
        return OrbitStep {
            eye,
            pan: Vec3::ZERO,
        };
    }

    let offset = eye - pivot;
    let radius = offset.length().max(f32::EPSILON);
    let mut yaw = offset.x.atan2(offset.z);
    let mut pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();

    yaw -= input.rotate.x * ROTATE_PER_PIXEL * tuning.rotate_speed;
    pitch = (pitch + input.rotate.y * ROTATE_PER_PIXEL * tuning.rotate_speed)
        .clamp(-MAX_PITCH, MAX_PITCH);

    let zoom_factor = (1.0 - ZOOM_STEP * tuning.zoom_speed).powf(input.zoom);
    let radius = (radius * zoom_factor).clamp(tuning.min_distance, tuning.max_distance);

    let direction = Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos());

    let forward = -direction;
    let right = forward.cross(Vec3::Y).normalize_or_zero();
    let up = right.cross(forward).normalize_or_zero();
    let pan = (-right * input.pan.x + up * input.pan.y) * PAN_PER_PIXEL * tuning.pan_speed * radius;

    OrbitStep {
        eye: pivot + pan + direction * radius,
        pan,
    }
}

/// Advance the controller by one frame.
pub fn step_camera(
    controller: &mut CameraController,
    eye: Vec3,
    nav: &NavigationState,
    reports: &BodyReports,
    follow: &FollowTuning,
    orbit: &OrbitControlTuning,
    input: OrbitInput,
) -> CameraStep {
    match nav.camera_mode {
        CameraMode::Follow => {
            let Some((id, report)) = nav
                .target
                .and_then(|id| reports.get(id).map(|report| (id, report)))
            else {
                // Nothing to follow: hold still
                return CameraStep {
                    eye,
                    look_at: controller.pivot,
                    arrived: true,
                };
            };

            let previous_gap = controller
                .chase_gap
                .filter(|_| controller.last_followed == Some(id));
            controller.last_followed = Some(id);
            controller.pivot = report.position;
            controller.pan_offset = Vec3::ZERO;

            let ideal = follow_ideal_eye(follow, report.position, report.size);
            let eye = smooth_toward(eye, ideal, follow.smoothing);
            let gap = eye.distance(ideal);
            controller.chase_gap = Some(gap);
            CameraStep {
                eye,
                look_at: report.position,
                arrived: chase_arrived(follow, previous_gap, gap),
            }
        }
        CameraMode::Free => {
            controller.chase_gap = None;
            let anchor = controller
                .last_followed
                .and_then(|id| reports.get(id))
                .map(|report| report.position)
                .unwrap_or(Vec3::ZERO);
            controller.pivot = anchor + controller.pan_offset;

            let step = orbit_eye(eye, controller.pivot, input, orbit);
            controller.pan_offset += step.pan;
            controller.pivot += step.pan;

            CameraStep {
                eye: step.eye,
                look_at: controller.pivot,
                arrived: true,
            }
        }
    }
}

// === Systems ===

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Gather mouse drag and scroll for free-look. Ignored while egui has the
/// pointer or the camera is following.
fn collect_orbit_input(
    nav: Res<NavigationState>,
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut contexts: EguiContexts,
    mut input: ResMut<OrbitInput>,
) {
    if nav.camera_mode != CameraMode::Free {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() || ctx.is_pointer_over_area() {
            return;
        }
    }

    if buttons.pressed(MouseButton::Left) {
        input.rotate += motion.delta;
    }
    if buttons.pressed(MouseButton::Right) || buttons.pressed(MouseButton::Middle) {
        input.pan += motion.delta;
    }
    input.zoom += scroll.delta.y;
}

/// Position the camera from this frame's body reports.
pub fn drive_camera(
    nav: Res<NavigationState>,
    reports: Res<BodyReports>,
    follow: Res<FollowTuning>,
    orbit: Res<OrbitControlTuning>,
    mut controller: ResMut<CameraController>,
    mut input: ResMut<OrbitInput>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
    mut actions: MessageWriter<ControlAction>,
) {
    let frame_input = std::mem::take(&mut *input);

    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    let step = step_camera(
        &mut controller,
        transform.translation,
        &nav,
        &reports,
        &follow,
        &orbit,
        frame_input,
    );

    transform.translation = step.eye;
    if step.eye.distance_squared(step.look_at) > f32::EPSILON {
        transform.look_at(step.look_at, Vec3::Y);
    }

    if nav.transitioning && step.arrived {
        actions.write(ControlAction::NavigationComplete);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::test_utils::assertions::assert_vec3_near;
    use crate::test_utils::fixtures::{follow_nav, free_nav, reports_with};

    #[test]
    fn follow_distance_bands() {
        let t = FollowTuning::default();
        assert_relative_eq!(follow_distance(&t, 8.0), 20.0);
        assert_relative_eq!(follow_distance(&t, 10.0), 25.0);
        assert_relative_eq!(follow_distance(&t, 2.0), 8.0);
        assert_relative_eq!(follow_distance(&t, 5.0), 11.0);
        assert_relative_eq!(follow_distance(&t, 1.0), 4.0);
        assert_relative_eq!(follow_distance(&t, 0.4), 2.5);
    }

    #[test]
    fn ideal_eye_uses_offset_direction() {
        let t = FollowTuning::default();
        let eye = follow_ideal_eye(&t, Vec3::new(10.0, 0.0, 0.0), 1.0);
        assert_relative_eq!(eye.x, 10.0 + 0.7 * 4.0);
        assert_relative_eq!(eye.y, 0.5 * 4.0);
        assert_relative_eq!(eye.z, 1.2 * 4.0);
    }

    #[test]
    fn follow_moves_two_percent_of_the_gap() {
        let follow = FollowTuning::default();
        let orbit = OrbitControlTuning::default();
        let nav = follow_nav(BodyId::Earth);
        let mut controller = CameraController::default();

        // Frame 1: target at the origin
        let start = CAMERA_START;
        let r1 = reports_with(BodyId::Earth, Vec3::ZERO, 1.0);
        let s1 = step_camera(&mut controller, start, &nav, &r1, &follow, &orbit, default());

        // Frame 2: target jumped to (10, 0, 0)
        let r2 = reports_with(BodyId::Earth, Vec3::new(10.0, 0.0, 0.0), 1.0);
        let s2 = step_camera(&mut controller, s1.eye, &nav, &r2, &follow, &orbit, default());

        let ideal = follow_ideal_eye(&follow, Vec3::new(10.0, 0.0, 0.0), 1.0);
        let expected = s1.eye + 0.02 * (ideal - s1.eye);
        assert_vec3_near(s2.eye, expected, 1e-4);
        // Not a snap
        assert!(s2.eye.distance(ideal) > 1.0);
        assert_eq!(s2.look_at, Vec3::new(10.0, 0.0, 0.0));
        assert!(!s2.arrived);
    }

    #[test]
    fn follow_converges_and_reports_arrival() {
        let follow = FollowTuning::default();
        let orbit = OrbitControlTuning::default();
        let nav = follow_nav(BodyId::Mars);
        let reports = reports_with(BodyId::Mars, Vec3::new(76.0, 0.0, 0.0), 1.2);
        let mut controller = CameraController::default();

        let mut eye = CAMERA_START;
        let mut arrived = false;
        for _ in 0..1000 {
            let step = step_camera(&mut controller, eye, &nav, &reports, &follow, &orbit, default());
            eye = step.eye;
            if step.arrived {
                arrived = true;
                break;
            }
        }
        assert!(arrived);
    }

    #[test]
    fn follow_arrives_on_a_moving_target() {
        let follow = FollowTuning::default();
        let orbit = OrbitControlTuning::default();
        let nav = follow_nav(BodyId::Phobos);
        let mut controller = CameraController::default();

        // Small fast orbit: the eased eye settles a fixed distance behind
        let center = Vec3::new(76.0, 0.0, 0.0);
        let radius = 2.9;
        let step_angle = 0.0136;

        let mut eye = CAMERA_START;
        let mut arrived_at = None;
        for frame in 0..2000 {
            let angle = frame as f32 * step_angle;
            let position = center + Vec3::new(angle.cos(), 0.0, angle.sin()) * radius;
            let reports = reports_with(BodyId::Phobos, position, 0.29);
            let step = step_camera(&mut controller, eye, &nav, &reports, &follow, &orbit, default());
            eye = step.eye;
            if step.arrived {
                arrived_at = Some((frame, step.eye.distance(follow_ideal_eye(&follow, position, 0.29))));
                break;
            }
        }

        let (frame, gap) = arrived_at.expect("chase should settle");
        assert!(frame > 50, "arrived too early at frame {frame}");
        assert!(gap > follow.arrival_distance);
    }

    #[test]
    fn switching_target_restarts_the_chase() {
        let follow = FollowTuning::default();
        let orbit = OrbitControlTuning::default();
        let mut controller = CameraController {
            last_followed: Some(BodyId::Venus),
            chase_gap: Some(40.0),
            ..default()
        };
        let nav = follow_nav(BodyId::Mars);
        let reports = reports_with(BodyId::Mars, Vec3::new(76.0, 0.0, 0.0), 1.2);
        let step = step_camera(&mut controller, CAMERA_START, &nav, &reports, &follow, &orbit, default());
        assert!(!step.arrived);
        assert!(controller.chase_gap.is_some());
    }

    #[test]
    fn chase_arrival_rules() {
        let t = FollowTuning::default();
        assert!(chase_arrived(&t, None, 0.4));
        assert!(!chase_arrived(&t, None, 3.0));
        assert!(chase_arrived(&t, Some(3.005), 3.0));
        assert!(!chase_arrived(&t, Some(3.5), 3.0));
        // Falling further behind is not arrival
        assert!(!chase_arrived(&t, Some(2.5), 3.0));
    }

    #[test]
    fn free_mode_keeps_pivot_on_last_followed_body() {
        let follow = FollowTuning::default();
        let orbit = OrbitControlTuning::default();
        let mut controller = CameraController::default();
        let body_pos = Vec3::new(30.0, 0.0, -12.0);
        let reports = reports_with(BodyId::Saturn, body_pos, 5.0);

        let mut nav = follow_nav(BodyId::Saturn);
        let s1 = step_camera(&mut controller, CAMERA_START, &nav, &reports, &follow, &orbit, default());

        nav.camera_mode = CameraMode::Free;
        let s2 = step_camera(&mut controller, s1.eye, &nav, &reports, &follow, &orbit, default());

        assert_eq!(controller.last_followed, Some(BodyId::Saturn));
        assert_relative_eq!(controller.pivot.distance(body_pos), 0.0, epsilon = 1e-6);
        assert_eq!(s2.look_at, body_pos);
        // Without input the eye stays put
        assert_eq!(s2.eye, s1.eye);
    }

    #[test]
    fn free_pivot_tracks_the_body_as_it_moves() {
        let follow = FollowTuning::default();
        let orbit = OrbitControlTuning::default();
        let mut controller = CameraController {
            last_followed: Some(BodyId::Venus),
            ..default()
        };
        let nav = free_nav();
        let moved = Vec3::new(-20.0, 0.0, 33.0);
        let reports = reports_with(BodyId::Venus, moved, 1.9);
        let eye = Vec3::new(5.0, 5.0, 5.0);
        let step = step_camera(&mut controller, eye, &nav, &reports, &follow, &orbit, default());
        assert_eq!(step.eye, eye);
        assert_eq!(step.look_at, moved);
    }

    #[test]
    fn free_mode_without_history_orbits_origin() {
        let mut controller = CameraController::default();
        let nav = free_nav();
        let step = step_camera(
            &mut controller,
            CAMERA_START,
            &nav,
            &BodyReports::default(),
            &FollowTuning::default(),
            &OrbitControlTuning::default(),
            default(),
        );
        assert_eq!(step.look_at, Vec3::ZERO);
        assert_eq!(step.eye, CAMERA_START);
    }

    #[test]
    fn zoom_is_clamped() {
        let tuning = OrbitControlTuning::default();
        let pivot = Vec3::ZERO;
        let far = orbit_eye(
            Vec3::new(0.0, 0.0, 1500.0),
            pivot,
            OrbitInput {
                zoom: -100.0,
                ..default()
            },
            &tuning,
        );
        assert_relative_eq!(far.eye.length(), tuning.max_distance, epsilon = 1e-2);

        let near = orbit_eye(
            Vec3::new(0.0, 0.0, 3.0),
            pivot,
            OrbitInput {
                zoom: 100.0,
                ..default()
            },
            &tuning,
        );
        assert_relative_eq!(near.eye.length(), tuning.min_distance, epsilon = 1e-4);
    }

    #[test]
    fn rotation_preserves_radius() {
        let tuning = OrbitControlTuning::default();
        let pivot = Vec3::new(1.0, 2.0, 3.0);
        let eye = pivot + Vec3::new(0.0, 10.0, 40.0);
        let step = orbit_eye(
            eye,
            pivot,
            OrbitInput {
                rotate: Vec2::new(120.0, -40.0),
                ..default()
            },
            &tuning,
        );
        assert_relative_eq!(step.eye.distance(pivot), eye.distance(pivot), epsilon = 1e-3);
        assert_eq!(step.pan, Vec3::ZERO);
        assert!(step.eye.distance(eye) > 1.0);
    }

    #[test]
    fn panning_moves_the_pivot() {
        let tuning = OrbitControlTuning::default();
        let step = orbit_eye(
            Vec3::new(0.0, 0.0, 50.0),
            Vec3::ZERO,
            OrbitInput {
                pan: Vec2::new(100.0, 0.0),
                ..default()
            },
            &tuning,
        );
        assert!(step.pan.length() > 0.0);
        assert_relative_eq!(step.pan.y, 0.0, epsilon = 1e-5);
    }
}
