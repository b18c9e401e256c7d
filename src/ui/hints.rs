//! Bottom hint bar and texture loading progress.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::render::TextureRequests;
use crate::types::SimulationState;

use super::{colors, icons};

pub const SELECT_HINT: &str = "Click on any celestial body to learn more about it";

/// Progress caption while textures are still arriving.
pub fn loading_caption(requests: &TextureRequests) -> Option<String> {
    if requests.is_done() {
        return None;
    }
    Some(progress_caption(
        requests.loaded(),
        requests.failed(),
        requests.requested(),
    ))
}

/// Missing textures count as resolved; they keep their fallback colour.
fn progress_caption(loaded: usize, failed: usize, requested: usize) -> String {
    let resolved = loaded + failed;
    if failed == 0 {
        format!("Loading textures {resolved}/{requested}")
    } else {
        format!("Loading textures {resolved}/{requested} ({failed} missing)")
    }
}

/// System that renders the hint bar and loading progress.
pub fn hint_bar_system(
    mut contexts: EguiContexts,
    sim: Res<SimulationState>,
    requests: Res<TextureRequests>,
) {
    let loading = loading_caption(&requests);
    if sim.selected_body.is_some() && loading.is_none() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("hint_bar"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -16.0])
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(14, 8))
                .corner_radius(16.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        if let Some(caption) = &loading {
                            ui.add(
                                egui::ProgressBar::new(requests.progress())
                                    .desired_width(220.0)
                                    .text(caption.as_str()),
                            );
                        }
                        if sim.selected_body.is_none() {
                            ui.label(
                                egui::RichText::new(format!("{}  {SELECT_HINT}", icons::CURSOR))
                                    .color(colors::TEXT),
                            );
                        }
                    });
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_caption_once_loading_is_done() {
        assert_eq!(loading_caption(&TextureRequests::default()), None);
    }

    #[test]
    fn caption_counts_missing_textures() {
        assert_eq!(progress_caption(3, 0, 12), "Loading textures 3/12");
        assert_eq!(progress_caption(3, 2, 12), "Loading textures 5/12 (2 missing)");
    }
}
