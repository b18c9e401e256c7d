//! Info panel for the selected body.
//!
//! Four tabs: Overview, Statistics, Discovery and Media. Closing the panel
//! clears the selection.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::bodies::{CelestialBodyData, SolarSystem};
use crate::controls::ControlAction;
use crate::types::{HOURS_PER_DAY, SimulationState};

use super::format::{au_to_km, format_distance, format_number, format_scientific};
use super::{UiState, colors, icons};

/// Tabs of the info panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InfoTab {
    #[default]
    Overview,
    Statistics,
    Discovery,
    Media,
}

impl InfoTab {
    pub const ALL: [InfoTab; 4] = [
        InfoTab::Overview,
        InfoTab::Statistics,
        InfoTab::Discovery,
        InfoTab::Media,
    ];

    pub fn label(&self) -> String {
        match self {
            InfoTab::Overview => format!("{} Overview", icons::INFO),
            InfoTab::Statistics => format!("{} Statistics", icons::ATOM),
            InfoTab::Discovery => format!("{} Discovery", icons::GLOBE),
            InfoTab::Media => format!("{} Media", icons::VIDEO),
        }
    }
}

/// One labelled value on the Statistics tab.
#[derive(Clone, Debug, PartialEq)]
pub struct StatRow {
    pub label: &'static str,
    pub value: String,
}

fn row(label: &'static str, value: String) -> StatRow {
    StatRow { label, value }
}

/// Physical and orbital statistics, in display order. Orbital rows are
/// omitted for bodies that do not orbit.
pub fn statistics_rows(body: &CelestialBodyData) -> Vec<StatRow> {
    let mut rows = vec![
        row("Radius", format_distance(body.radius_km)),
        row("Mass", format!("{} kg", format_scientific(body.mass_kg))),
        row("Density", format!("{:.2} g/cm³", body.density)),
        row("Gravity", format!("{:.2} m/s²", body.gravity)),
        row("Escape Velocity", format!("{:.2} km/s", body.escape_velocity)),
    ];
    if let Some(orbit) = body.orbit {
        rows.push(row(
            "Distance from Sun",
            format_distance(au_to_km(orbit.distance_au)),
        ));
        let retrograde = if orbit.period_days < 0.0 {
            " (retrograde)"
        } else {
            ""
        };
        rows.push(row(
            "Orbital Period",
            format!("{} Earth days{retrograde}", format_number(orbit.period_days.abs())),
        ));
    }
    rows.push(row(
        "Rotation Period",
        format!("{:.1} Earth days", body.rotation_period_hours / HOURS_PER_DAY),
    ));
    rows.push(row("Axial Tilt", format!("{:.1}°", body.axial_tilt_deg)));
    if let Some(e) = body.eccentricity {
        rows.push(row("Eccentricity", format!("{e:.3}")));
    }
    rows
}

/// System that renders the info panel for the selected body.
pub fn info_panel_system(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    system: Res<SolarSystem>,
    sim: Res<SimulationState>,
    mut actions: MessageWriter<ControlAction>,
) {
    let Some(selected) = sim.selected_body else {
        return;
    };
    let Some(body) = system.find(selected) else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut close = false;

    egui::Window::new("Body info")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(12))
                .stroke(egui::Stroke::new(1.0, colors::BORDER))
                .corner_radius(6.0),
        )
        .show(ctx, |ui| {
            ui.set_width(340.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icons::body_icon(body.kind)).size(20.0));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(body.name).strong().size(20.0));
                    let parent = system
                        .parent_of(body.id)
                        .map(|p| format!(" of {}", p.name))
                        .unwrap_or_default();
                    ui.label(
                        egui::RichText::new(format!("{}{parent}", body.kind.label()))
                            .color(colors::MUTED),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    if ui.button(icons::CLOSE).on_hover_text("Close (Esc)").clicked() {
                        close = true;
                    }
                });
            });

            ui.horizontal(|ui| {
                for tab in InfoTab::ALL {
                    ui.selectable_value(&mut ui_state.info_tab, tab, tab.label());
                }
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(460.0)
                .show(ui, |ui| match ui_state.info_tab {
                    InfoTab::Overview => overview_tab(ui, body),
                    InfoTab::Statistics => statistics_tab(ui, body),
                    InfoTab::Discovery => discovery_tab(ui, body),
                    InfoTab::Media => media_tab(ui, body),
                });
        });

    if close {
        actions.write(ControlAction::Select(None));
    }
}

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(egui::RichText::new(text).strong().size(15.0));
}

fn bullet_list(ui: &mut egui::Ui, items: &[&str]) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("•").color(colors::ACCENT));
            ui.label(*item);
        });
    }
}

fn overview_tab(ui: &mut egui::Ui, body: &CelestialBodyData) {
    heading(ui, "Description");
    ui.label(body.description);

    heading(ui, "Key Facts");
    bullet_list(ui, body.key_facts);

    heading(ui, "Fun Facts");
    for fact in body.fun_facts {
        egui::Frame::new()
            .fill(colors::CARD_BG)
            .inner_margin(egui::Margin::same(8))
            .corner_radius(4.0)
            .show(ui, |ui| {
                ui.label(*fact);
            });
    }

    if !body.earth_comparison.is_empty() {
        heading(ui, "Compared to Earth");
        ui.label(body.earth_comparison);
    }
}

fn statistics_tab(ui: &mut egui::Ui, body: &CelestialBodyData) {
    egui::Grid::new("body_stats")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for stat in statistics_rows(body) {
                ui.label(egui::RichText::new(stat.label).color(colors::MUTED));
                ui.label(stat.value);
                ui.end_row();
            }
        });

    if let Some(atmosphere) = body.atmosphere {
        heading(ui, "Atmosphere");
        ui.label(format!("Pressure: {} Earth atmospheres", atmosphere.pressure_atm));
        let t = atmosphere.temperature;
        ui.label(format!(
            "Temperature: {}°C average ({}°C to {}°C)",
            t.average, t.min, t.max
        ));
        for (gas, percent) in atmosphere.composition {
            ui.horizontal(|ui| {
                ui.label(*gas);
                ui.add(
                    egui::ProgressBar::new((*percent / 100.0) as f32)
                        .desired_width(160.0)
                        .text(format!("{percent}%")),
                );
            });
        }
    }
}

fn discovery_tab(ui: &mut egui::Ui, body: &CelestialBodyData) {
    heading(ui, "Discovery Information");
    egui::Grid::new("body_discovery").num_columns(2).show(ui, |ui| {
        ui.label(egui::RichText::new("Discovered by").color(colors::MUTED));
        ui.label(body.discovery.by);
        ui.end_row();
        ui.label(egui::RichText::new("Discovery date").color(colors::MUTED));
        ui.label(body.discovery.date);
        ui.end_row();
        ui.label(egui::RichText::new("Method").color(colors::MUTED));
        ui.label(body.discovery.method);
        ui.end_row();
    });

    if !body.moons.is_empty() {
        heading(ui, "Moons");
        for moon in body.moons {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(moon.name).strong());
                ui.label(
                    egui::RichText::new(format!("{} radius", format_distance(moon.radius_km)))
                        .color(colors::MUTED),
                );
            });
            ui.label(egui::RichText::new(moon.description).size(12.0));
        }
    }

    if body.has_rings {
        heading(ui, "Ring System");
        ui.label(format!(
            "{} has a ring system composed of ice and rock particles.",
            body.name
        ));
    }
}

fn placeholder(ui: &mut egui::Ui, icon: &str, title: &str, caption: &str) {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(egui::Stroke::new(1.0, colors::BORDER))
        .inner_margin(egui::Margin::same(16))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(icon).size(28.0).color(colors::MUTED));
                ui.label(title);
                ui.label(egui::RichText::new(caption).size(11.0).color(colors::MUTED));
            });
        });
}

fn media_tab(ui: &mut egui::Ui, body: &CelestialBodyData) {
    heading(ui, "Educational Video");
    let caption = if body.video.is_empty() {
        "Video content will be added here"
    } else {
        body.video
    };
    placeholder(ui, icons::VIDEO, "Video content placeholder", caption);

    heading(ui, "Image Gallery");
    for image in body.images {
        placeholder(ui, icons::IMAGE, "Image", image);
    }

    heading(ui, "3D Model Viewer");
    placeholder(
        ui,
        icons::CUBE,
        "Interactive 3D model",
        "Detailed model viewer will be available here",
    );
}
