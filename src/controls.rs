//! Control actions: the only path that mutates simulation and navigation state.
//!
//! UI panels and keyboard shortcuts write [`ControlAction`] messages. A single
//! system applies them in order at the start of each frame through
//! [`apply_action`], which is a plain function and can be tested without an app.

use bevy::prelude::*;

use crate::bodies::BodyId;
use crate::types::{CameraMode, FrameSet, NavigationState, ScaleMode, SimulationState};

/// A user intent that changes simulation or navigation state.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum ControlAction {
    /// Select a body (and follow it), or clear the selection and stop following.
    Select(Option<BodyId>),
    /// Start a camera transition towards a body.
    NavigateTo(BodyId),
    /// Simulated days per real second.
    SetTimeScale(f64),
    /// Switch between paused and the last running scale.
    TogglePause,
    SetScaleMode(ScaleMode),
    SetShowOrbits(bool),
    SetShowLabels(bool),
    SetCameraMode(CameraMode),
    /// The camera reached its navigation target.
    NavigationComplete,
}

/// Plugin applying control actions before anything else runs in a frame.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ControlAction>()
            .init_resource::<SimulationState>()
            .init_resource::<NavigationState>()
            .register_type::<SimulationState>()
            .register_type::<NavigationState>()
            .add_systems(Update, apply_control_actions.in_set(FrameSet::Controls));
    }
}

/// Apply one action to the state pair.
pub fn apply_action(sim: &mut SimulationState, nav: &mut NavigationState, action: ControlAction) {
    match action {
        ControlAction::Select(Some(id)) => {
            sim.selected_body = Some(id);
            nav.target = Some(id);
            nav.camera_mode = CameraMode::Follow;
        }
        ControlAction::Select(None) => {
            sim.selected_body = None;
            // Follow tracks the selection, so there is nothing left to chase
            nav.target = None;
            nav.transitioning = false;
        }
        ControlAction::NavigateTo(id) => {
            nav.target = Some(id);
            nav.transitioning = true;
        }
        ControlAction::SetTimeScale(scale) => {
            let scale = sanitize_time_scale(scale);
            sim.time_scale = scale;
            if scale > 0.0 {
                sim.resume_time_scale = scale;
            }
        }
        ControlAction::TogglePause => {
            if sim.is_paused() {
                sim.time_scale = sim.resume_time_scale;
            } else {
                sim.resume_time_scale = sim.time_scale;
                sim.time_scale = 0.0;
            }
        }
        ControlAction::SetScaleMode(mode) => sim.scale_mode = mode,
        ControlAction::SetShowOrbits(show) => sim.show_orbits = show,
        ControlAction::SetShowLabels(show) => sim.show_labels = show,
        ControlAction::SetCameraMode(mode) => {
            nav.camera_mode = mode;
            if mode == CameraMode::Free {
                nav.transitioning = false;
            }
        }
        ControlAction::NavigationComplete => nav.transitioning = false,
    }
}

/// Reverse playback is not supported: negative and non-finite scales pause.
fn sanitize_time_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale >= 0.0 {
        scale
    } else {
        warn!("Rejected time scale {scale}, pausing instead");
        0.0
    }
}

fn apply_control_actions(
    mut actions: MessageReader<ControlAction>,
    mut sim: ResMut<SimulationState>,
    mut nav: ResMut<NavigationState>,
) {
    for action in actions.read() {
        apply_action(&mut sim, &mut nav, *action);
        match action {
            ControlAction::Select(Some(id)) => info!("Selected {id}"),
            ControlAction::SetTimeScale(_) | ControlAction::TogglePause => {
                if sim.is_paused() {
                    info!("Simulation paused");
                } else {
                    info!("Time scale: {:.4} days/s", sim.time_scale);
                }
            }
            ControlAction::SetScaleMode(mode) => info!("Scale mode: {}", mode.label()),
            ControlAction::SetCameraMode(mode) => info!("Camera mode: {}", mode.label()),
            _ => debug!("Applied {action:?}"),
        }
    }
}
