//! Left-hand navigation panel: search and the body list.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::bodies::{BodyId, CelestialBodyData, SolarSystem};
use crate::controls::ControlAction;
use crate::types::SimulationState;

use super::{UiState, colors, icons};

const PANEL_WIDTH: f32 = 260.0;

/// Secondary line under a body name, e.g. `planet · 2 moons`.
pub fn body_subtitle(body: &CelestialBodyData) -> String {
    match body.moons.len() {
        0 => body.kind.label().to_string(),
        1 => format!("{} · 1 moon", body.kind.label()),
        n => format!("{} · {n} moons", body.kind.label()),
    }
}

/// Caption for a moon in the list.
pub fn moon_caption(parent: &CelestialBodyData) -> String {
    format!("{}'s moon", parent.name)
}

/// Actions issued when the user picks a body from the list.
pub fn navigate_actions(id: BodyId) -> [ControlAction; 2] {
    [ControlAction::NavigateTo(id), ControlAction::Select(Some(id))]
}

/// System that renders the navigation panel.
pub fn navigation_panel_system(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    system: Res<SolarSystem>,
    sim: Res<SimulationState>,
    mut actions: MessageWriter<ControlAction>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut picked: Option<BodyId> = None;

    egui::SidePanel::left("navigation")
        .resizable(false)
        .exact_width(PANEL_WIDTH)
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("Solar System").strong().size(18.0));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label(icons::SEARCH);
                ui.add(
                    egui::TextEdit::singleline(&mut ui_state.search)
                        .hint_text("Search planets and moons"),
                );
            });
            ui.add_space(6.0);

            if ui
                .button(format!("{} View the Sun", icons::SUN))
                .on_hover_text("Fly to the Sun (H)")
                .clicked()
            {
                picked = Some(BodyId::Sun);
            }

            ui.separator();

            let results = system.search(&ui_state.search);
            egui::ScrollArea::vertical().show(ui, |ui| {
                if results.is_empty() {
                    ui.label(egui::RichText::new("No matches").color(colors::MUTED));
                    return;
                }

                for body in &results.bodies {
                    if body_row(ui, body, &body_subtitle(body), sim.selected_body) {
                        picked = Some(body.id);
                    }
                }

                if !results.moons.is_empty() {
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("Moons").strong().color(colors::MUTED));
                    for (moon, parent) in &results.moons {
                        if body_row(ui, moon, &moon_caption(parent), sim.selected_body) {
                            picked = Some(moon.id);
                        }
                    }
                }
            });
        });

    if let Some(id) = picked {
        info!("Navigating to {}", id);
        actions.write_batch(navigate_actions(id));
    }
}

/// One clickable row. Returns true when clicked.
fn body_row(
    ui: &mut egui::Ui,
    body: &CelestialBodyData,
    subtitle: &str,
    selected: Option<BodyId>,
) -> bool {
    let is_selected = selected == Some(body.id);
    let text = egui::RichText::new(format!("{}  {}", icons::body_icon(body.kind), body.name))
        .size(15.0);
    let response = ui.selectable_label(is_selected, text);
    ui.label(
        egui::RichText::new(subtitle)
            .size(11.0)
            .color(colors::MUTED),
    );
    response.clicked()
}
