//! Keyboard shortcuts and click-to-select picking.
//!
//! Every shortcut turns into a [`ControlAction`]; nothing here touches
//! simulation state directly.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::bodies::BodyId;
use crate::camera::MainCamera;
use crate::controls::ControlAction;
use crate::kinematics::BodyReports;
use crate::types::{FrameSet, NavigationState, SimulationState, TIME_PRESETS};

/// Cursor travel, in pixels, that turns a click into a drag.
pub const CLICK_DRAG_THRESHOLD: f32 = 5.0;

/// Where the left button went down, to tell clicks from orbit drags.
#[derive(Resource, Default)]
pub struct ClickTracker {
    pub pressed_at: Option<Vec2>,
}

/// Plugin providing keyboard shortcuts and body picking.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClickTracker>().add_systems(
            Update,
            (keyboard_shortcuts, pick_body_on_click).in_set(FrameSet::Controls),
        );
    }
}

/// Keys for the time presets, in preset order.
const PRESET_KEYS: [KeyCode; 6] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
];

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    sim: Res<SimulationState>,
    nav: Res<NavigationState>,
    mut contexts: EguiContexts,
    mut actions: MessageWriter<ControlAction>,
) {
    // Typing into the search box must not trigger shortcuts
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_keyboard_input() {
            return;
        }
    }

    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        actions.write(ControlAction::TogglePause);
    }

    for (key, preset) in PRESET_KEYS.iter().zip(TIME_PRESETS.iter()) {
        if keys.just_pressed(*key) {
            info!("Time preset: {}", preset.label);
            actions.write(ControlAction::SetTimeScale(preset.scale));
        }
    }

    if keys.just_pressed(KeyCode::KeyO) {
        actions.write(ControlAction::SetShowOrbits(!sim.show_orbits));
    }
    if keys.just_pressed(KeyCode::KeyL) {
        actions.write(ControlAction::SetShowLabels(!sim.show_labels));
    }
    if keys.just_pressed(KeyCode::KeyC) {
        actions.write(ControlAction::SetCameraMode(nav.camera_mode.toggled()));
    }

    // H: home to the Sun
    if keys.just_pressed(KeyCode::KeyH) {
        actions.write(ControlAction::NavigateTo(BodyId::Sun));
        actions.write(ControlAction::Select(Some(BodyId::Sun)));
    }

    if keys.just_pressed(KeyCode::Escape) {
        actions.write(ControlAction::Select(None));
    }
}

/// Distance along the ray to the first intersection with a sphere, if any.
/// `dir` must be normalized. Hits behind the origin are ignored.
pub fn ray_sphere_hit(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt = disc.sqrt();
    let near = -b - sqrt;
    let far = -b + sqrt;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        // Origin inside the sphere
        Some(far)
    } else {
        None
    }
}

/// Nearest body hit by a ray, using each body's reported position and size.
pub fn pick_body(origin: Vec3, dir: Vec3, reports: &BodyReports) -> Option<BodyId> {
    reports
        .iter()
        .filter_map(|(id, report)| {
            ray_sphere_hit(origin, dir, report.position, report.size).map(|t| (id, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Select the body under the cursor on a left click (not a drag).
fn pick_body_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    window: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    reports: Res<BodyReports>,
    mut tracker: ResMut<ClickTracker>,
    mut contexts: EguiContexts,
    mut actions: MessageWriter<ControlAction>,
) {
    let Ok(window) = window.single() else {
        return;
    };
    let cursor = window.cursor_position();

    if buttons.just_pressed(MouseButton::Left) {
        let over_ui = contexts
            .ctx_mut()
            .map(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
            .unwrap_or(false);
        tracker.pressed_at = if over_ui { None } else { cursor };
        return;
    }

    if !buttons.just_released(MouseButton::Left) {
        return;
    }

    let (Some(pressed_at), Some(cursor)) = (tracker.pressed_at.take(), cursor) else {
        return;
    };
    if pressed_at.distance(cursor) > CLICK_DRAG_THRESHOLD {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    // Clicking empty space keeps the current selection
    if let Some(id) = pick_body(ray.origin, *ray.direction, &reports) {
        actions.write(ControlAction::Select(Some(id)));
    }
}
