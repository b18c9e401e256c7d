//! Phosphor icon definitions for the UI.
//!
//! Icons are glyphs in the Phosphor font, registered with egui by
//! `setup_fonts` on the first UI pass.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::bodies::BodyKind;

/// Whether the icon font has been registered with egui.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Register the Phosphor icon font.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

pub const PLAY: &str = egui_phosphor::regular::PLAY;
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
pub const CLOSE: &str = egui_phosphor::regular::X;
pub const SEARCH: &str = egui_phosphor::regular::MAGNIFYING_GLASS;
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
pub const EYE: &str = egui_phosphor::regular::EYE;
pub const CAMERA: &str = egui_phosphor::regular::VIDEO_CAMERA;
pub const INFO: &str = egui_phosphor::regular::INFO;
pub const ATOM: &str = egui_phosphor::regular::ATOM;
pub const GLOBE: &str = egui_phosphor::regular::GLOBE;
pub const VIDEO: &str = egui_phosphor::regular::FILM_STRIP;
pub const IMAGE: &str = egui_phosphor::regular::IMAGE;
pub const CUBE: &str = egui_phosphor::regular::CUBE;
pub const TARGET: &str = egui_phosphor::regular::CROSSHAIR;
pub const CURSOR: &str = egui_phosphor::regular::CURSOR_CLICK;

// Celestial body icons
pub const SUN: &str = egui_phosphor::regular::SUN;
pub const PLANET: &str = egui_phosphor::regular::GLOBE_HEMISPHERE_WEST;
pub const MOON: &str = egui_phosphor::regular::MOON;
/// Dwarf planets and asteroids
pub const ASTEROID: &str = egui_phosphor::regular::ASTERISK;

/// Icon for a kind of body.
pub fn body_icon(kind: BodyKind) -> &'static str {
    match kind {
        BodyKind::Star => SUN,
        BodyKind::Planet => PLANET,
        BodyKind::Moon => MOON,
        BodyKind::DwarfPlanet | BodyKind::Asteroid => ASTEROID,
    }
}
