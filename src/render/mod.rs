//! Rendering systems for the solar system explorer.
//!
//! This module turns the per-frame body reports into a scene: textured
//! spheres with rings, atmospheres and clouds, orbit paths, labels, the
//! asteroid belt and the starfield.

mod background;
pub mod belt;
pub mod bodies;
mod labels;
mod orbits;
pub mod rings;
pub mod textures;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use self::background::BackgroundPlugin;
use self::belt::BeltPlugin;
use self::bodies::{BodyMeshes, animate_surfaces, attach_body_visuals, spin_clouds};
use self::labels::{LabelSettings, draw_body_labels};
use self::orbits::{OrbitPathPlugin, draw_orbit_paths};
use self::textures::TexturePlugin;
use crate::config::PulseTuning;
use crate::types::FrameSet;

pub use self::background::{BRIGHT_STARS, CatalogStar, ra_dec_to_cartesian};
pub use self::textures::TextureRequests;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BackgroundPlugin, BeltPlugin, OrbitPathPlugin, TexturePlugin))
            .init_resource::<BodyMeshes>()
            .init_resource::<PulseTuning>()
            .init_resource::<LabelSettings>()
            // Visuals read the body reports, so they run after the camera pass:
            // 1. attach_body_visuals - children for anchors spawned at startup
            // 2. animate_surfaces / spin_clouds / spin_rings - spin and pulse
            // 3. draw_orbit_paths - gizmo circles at mapped distances
            .add_systems(
                Update,
                (
                    attach_body_visuals,
                    (
                        animate_surfaces,
                        spin_clouds,
                        rings::spin_rings,
                        draw_orbit_paths,
                    ),
                )
                    .chain()
                    .in_set(FrameSet::Visuals),
            )
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}
