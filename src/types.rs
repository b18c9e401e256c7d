//! Shared simulation state, constants and frame ordering.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bodies::BodyId;

/// Per-frame ordering of everything that touches body positions.
///
/// Sets are chained, so every body's position is reported before the
/// camera reads it and before visuals are derived from it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Apply queued control actions.
    Controls,
    /// Advance orbital and spin angles.
    Kinematics,
    /// Publish world positions and rendered sizes.
    Report,
    /// Move the camera from the reported positions.
    Camera,
    /// Pulse, rings, clouds, labels and other derived visuals.
    Visuals,
}

/// Kilometres per astronomical unit.
pub const AU_TO_KM: f64 = 149_597_870.7;

/// Mean Earth radius in km, the reference for relative body sizes.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Frame-rate calibration baked into the angular speed formula.
pub const FRAME_RATE_CALIBRATION: f64 = 60.0;

pub const HOURS_PER_DAY: f64 = 24.0;

/// Default time scale: one simulated hour per real second.
pub const DEFAULT_TIME_SCALE: f64 = 1.0 / 24.0;

/// How physical distances and radii are mapped into render units.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    Realistic,
    #[default]
    Visible,
    Logarithmic,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 3] = [
        ScaleMode::Realistic,
        ScaleMode::Visible,
        ScaleMode::Logarithmic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScaleMode::Realistic => "Realistic",
            ScaleMode::Visible => "Visible",
            ScaleMode::Logarithmic => "Logarithmic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScaleMode::Realistic => "Closer to true proportions, small bodies are hard to see",
            ScaleMode::Visible => "Exaggerated sizes so every body stays visible",
            ScaleMode::Logarithmic => "Compressed distances, the whole system fits on screen",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CameraMode {
    /// User-driven orbit, pan and zoom.
    Free,
    /// Camera tracks the navigation target.
    #[default]
    Follow,
}

impl CameraMode {
    pub fn label(&self) -> &'static str {
        match self {
            CameraMode::Free => "Free",
            CameraMode::Follow => "Follow",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            CameraMode::Free => CameraMode::Follow,
            CameraMode::Follow => CameraMode::Free,
        }
    }
}

/// Process-wide simulation settings. Only [`crate::controls::apply_action`]
/// mutates this.
#[derive(Resource, Reflect, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct SimulationState {
    /// Simulated days per real second. Zero means paused.
    pub time_scale: f64,
    pub scale_mode: ScaleMode,
    pub show_orbits: bool,
    pub show_labels: bool,
    pub selected_body: Option<BodyId>,
    /// Scale restored when unpausing.
    pub resume_time_scale: f64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            time_scale: DEFAULT_TIME_SCALE,
            scale_mode: ScaleMode::default(),
            show_orbits: true,
            show_labels: true,
            selected_body: None,
            resume_time_scale: DEFAULT_TIME_SCALE,
        }
    }
}

impl SimulationState {
    pub fn is_paused(&self) -> bool {
        self.time_scale <= 0.0
    }
}

/// Camera navigation state, paired with [`SimulationState`].
#[derive(Resource, Reflect, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct NavigationState {
    pub camera_mode: CameraMode,
    pub target: Option<BodyId>,
    /// Set by a navigate-to request, cleared once the camera arrives.
    pub transitioning: bool,
}

/// Accumulated simulated time. An animation clock only, never a calendar.
#[derive(Resource, Reflect, Clone, Copy, Debug, Default, PartialEq)]
#[reflect(Resource)]
pub struct SimulationClock {
    pub elapsed_days: f64,
}

/// A named time-scale preset shown in the control panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimePreset {
    pub label: &'static str,
    /// Simulated days per real second.
    pub scale: f64,
    /// Speed relative to real time, for display.
    pub multiplier: &'static str,
}

pub const TIME_PRESETS: [TimePreset; 6] = [
    TimePreset {
        label: "Paused",
        scale: 0.0,
        multiplier: "0x",
    },
    TimePreset {
        label: "1 sec = 1 hour",
        scale: 1.0 / 24.0,
        multiplier: "24x",
    },
    TimePreset {
        label: "1 sec = 12 hours",
        scale: 0.5,
        multiplier: "48x",
    },
    TimePreset {
        label: "1 sec = 1 day",
        scale: 1.0,
        multiplier: "1440x",
    },
    TimePreset {
        label: "1 sec = 1 week",
        scale: 7.0,
        multiplier: "10080x",
    },
    TimePreset {
        label: "1 sec = 1 month",
        scale: 30.0,
        multiplier: "43200x",
    },
];

/// Real-time playback: one simulated second per real second.
pub const REAL_TIME_SCALE: f64 = 1.0 / 86_400.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_view() {
        let sim = SimulationState::default();
        assert_eq!(sim.time_scale, 1.0 / 24.0);
        assert_eq!(sim.scale_mode, ScaleMode::Visible);
        assert!(sim.show_orbits);
        assert!(sim.show_labels);
        assert!(sim.selected_body.is_none());
        assert!(!sim.is_paused());

        let nav = NavigationState::default();
        assert_eq!(nav.camera_mode, CameraMode::Follow);
        assert!(nav.target.is_none());
        assert!(!nav.transitioning);
    }

    #[test]
    fn non_positive_scale_is_paused() {
        let mut sim = SimulationState::default();
        sim.time_scale = 0.0;
        assert!(sim.is_paused());
        sim.time_scale = -1.0;
        assert!(sim.is_paused());
    }

    #[test]
    fn presets_are_ascending() {
        for pair in TIME_PRESETS.windows(2) {
            assert!(pair[0].scale < pair[1].scale);
        }
        assert_eq!(TIME_PRESETS[0].scale, 0.0);
    }

    #[test]
    fn state_round_trips_through_toml() {
        let mut sim = SimulationState::default();
        sim.selected_body = Some(BodyId::Moon);
        sim.scale_mode = ScaleMode::Logarithmic;
        let text = toml::to_string(&sim).unwrap();
        assert!(text.contains("selected_body = \"moon\""));
        let back: SimulationState = toml::from_str(&text).unwrap();
        assert_eq!(back, sim);
    }
}
