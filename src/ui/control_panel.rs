//! Control panel with Time, View and Camera tabs.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::controls::ControlAction;
use crate::types::{
    CameraMode, NavigationState, REAL_TIME_SCALE, ScaleMode, SimulationClock, SimulationState,
    TIME_PRESETS, TimePreset,
};

use super::{UiState, colors, icons};

/// Tabs of the control panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlTab {
    #[default]
    Time,
    View,
    Camera,
}

impl ControlTab {
    pub const ALL: [ControlTab; 3] = [ControlTab::Time, ControlTab::View, ControlTab::Camera];

    pub fn label(&self) -> String {
        match self {
            ControlTab::Time => format!("{} Time", icons::CLOCK),
            ControlTab::View => format!("{} View", icons::EYE),
            ControlTab::Camera => format!("{} Camera", icons::CAMERA),
        }
    }
}

/// Whether a preset matches the running time scale.
pub fn preset_active(preset: &TimePreset, time_scale: f64) -> bool {
    (preset.scale - time_scale).abs() < 1e-9
}

/// Elapsed simulated time as days, switching to years past one year.
pub fn format_elapsed(days: f64) -> String {
    if days >= 365.25 {
        format!("{:.2} years", days / 365.25)
    } else {
        format!("{days:.1} days")
    }
}

/// System that renders the control panel.
pub fn control_panel_system(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    sim: Res<SimulationState>,
    nav: Res<NavigationState>,
    clock: Res<SimulationClock>,
    mut actions: MessageWriter<ControlAction>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Controls")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(12))
                .stroke(egui::Stroke::new(1.0, colors::BORDER))
                .corner_radius(6.0),
        )
        .show(ctx, |ui| {
            ui.set_width(280.0);

            ui.horizontal(|ui| {
                for tab in ControlTab::ALL {
                    ui.selectable_value(&mut ui_state.control_tab, tab, tab.label());
                }
            });
            ui.separator();

            match ui_state.control_tab {
                ControlTab::Time => time_tab(ui, &sim, &clock, &mut actions),
                ControlTab::View => view_tab(ui, &sim, &mut actions),
                ControlTab::Camera => camera_tab(ui, &nav, &mut actions),
            }
        });
}

fn time_tab(
    ui: &mut egui::Ui,
    sim: &SimulationState,
    clock: &SimulationClock,
    actions: &mut MessageWriter<ControlAction>,
) {
    ui.horizontal(|ui| {
        let (icon, hint) = if sim.is_paused() {
            (icons::PLAY, "Resume (Space)")
        } else {
            (icons::PAUSE, "Pause (Space)")
        };
        if ui
            .button(egui::RichText::new(icon).size(18.0))
            .on_hover_text(hint)
            .clicked()
        {
            actions.write(ControlAction::TogglePause);
        }
        if ui
            .button("Real Time")
            .on_hover_text("One simulated second per real second")
            .clicked()
        {
            actions.write(ControlAction::SetTimeScale(REAL_TIME_SCALE));
        }
    });

    ui.add_space(6.0);

    for (i, preset) in TIME_PRESETS.iter().enumerate() {
        ui.horizontal(|ui| {
            let active = preset_active(preset, sim.time_scale);
            if ui
                .selectable_label(active, preset.label)
                .on_hover_text(format!("Key {}", i + 1))
                .clicked()
            {
                actions.write(ControlAction::SetTimeScale(preset.scale));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(preset.multiplier).color(colors::MUTED));
            });
        });
    }

    ui.separator();
    ui.label(
        egui::RichText::new(format!("Elapsed: {}", format_elapsed(clock.elapsed_days)))
            .monospace(),
    );
}

fn view_tab(ui: &mut egui::Ui, sim: &SimulationState, actions: &mut MessageWriter<ControlAction>) {
    let mut show_orbits = sim.show_orbits;
    if ui.checkbox(&mut show_orbits, "Show orbits (O)").changed() {
        actions.write(ControlAction::SetShowOrbits(show_orbits));
    }
    let mut show_labels = sim.show_labels;
    if ui.checkbox(&mut show_labels, "Show labels (L)").changed() {
        actions.write(ControlAction::SetShowLabels(show_labels));
    }

    ui.add_space(6.0);
    ui.label(egui::RichText::new("Scale").strong());
    for mode in ScaleMode::ALL {
        if ui
            .radio(sim.scale_mode == mode, mode.label())
            .on_hover_text(mode.description())
            .clicked()
            && sim.scale_mode != mode
        {
            actions.write(ControlAction::SetScaleMode(mode));
        }
    }
}

fn camera_tab(ui: &mut egui::Ui, nav: &NavigationState, actions: &mut MessageWriter<ControlAction>) {
    for mode in [CameraMode::Follow, CameraMode::Free] {
        if ui.radio(nav.camera_mode == mode, mode.label()).clicked() && nav.camera_mode != mode {
            actions.write(ControlAction::SetCameraMode(mode));
        }
    }

    ui.add_space(6.0);
    let hint = match nav.camera_mode {
        CameraMode::Follow => "The camera tracks the selected body.",
        CameraMode::Free => "Left drag to orbit, right drag to pan, scroll to zoom.",
    };
    ui.label(egui::RichText::new(hint).size(12.0).color(colors::MUTED));
    ui.label(egui::RichText::new("C toggles the camera mode.").size(12.0).color(colors::MUTED));
}
