//! UI module providing the egui-based interface.
//!
//! Panels never mutate simulation state directly; they write
//! [`ControlAction`](crate::controls::ControlAction) messages.

pub mod control_panel;
pub mod format;
mod hints;
pub mod icons;
pub mod info_panel;
pub mod navigation_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use self::control_panel::ControlTab;
use self::info_panel::InfoTab;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    navigation_panel::navigation_panel_system,
                    info_panel::info_panel_system,
                    control_panel::control_panel_system,
                    hints::hint_bar_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Panel state that is purely presentational.
#[derive(Resource, Default)]
pub struct UiState {
    pub search: String,
    pub control_tab: ControlTab,
    pub info_tab: InfoTab,
}

/// Colors shared by the panels.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(18, 20, 32, 230);
    pub const CARD_BG: Color32 = Color32::from_rgb(30, 34, 52);
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    pub const ACCENT: Color32 = Color32::from_rgb(85, 153, 221);
    pub const MUTED: Color32 = Color32::from_rgb(150, 155, 170);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
}
