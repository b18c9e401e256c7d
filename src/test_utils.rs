//! Test utilities shared by unit tests.
//!
//! Provides fixtures for body reports and navigation states, and assertions
//! for vectors.

use bevy::prelude::*;

use crate::bodies::BodyId;
use crate::kinematics::{BodyReport, BodyReports};
use crate::types::{CameraMode, NavigationState};

/// Fixtures for building per-frame state without an app.
pub mod fixtures {
    use super::*;

    /// Reports containing the given bodies.
    pub fn reports(entries: &[(BodyId, Vec3, f32)]) -> BodyReports {
        let mut reports = BodyReports::default();
        for &(id, position, size) in entries {
            reports.insert(id, BodyReport { position, size });
        }
        reports
    }

    /// Reports containing a single body.
    pub fn reports_with(id: BodyId, position: Vec3, size: f32) -> BodyReports {
        reports(&[(id, position, size)])
    }

    /// Follow mode locked on `target`, not transitioning.
    pub fn follow_nav(target: BodyId) -> NavigationState {
        NavigationState {
            camera_mode: CameraMode::Follow,
            target: Some(target),
            transitioning: false,
        }
    }

    /// Free mode with no target.
    pub fn free_nav() -> NavigationState {
        NavigationState {
            camera_mode: CameraMode::Free,
            ..default()
        }
    }
}

/// Assertions for vector quantities.
pub mod assertions {
    use super::*;

    /// Assert two vectors are within `epsilon` of each other.
    pub fn assert_vec3_near(actual: Vec3, expected: Vec3, epsilon: f32) {
        let distance = actual.distance(expected);
        assert!(
            distance <= epsilon,
            "expected {expected:?}, got {actual:?} (off by {distance})"
        );
    }
}
