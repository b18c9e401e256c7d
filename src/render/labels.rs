//! Body labels using egui for text rendering.
//!
//! Renders each body's name just above its rendered sphere.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::bodies::{BodyKind, SolarSystem};
use crate::camera::MainCamera;
use crate::kinematics::BodyReports;
use crate::types::SimulationState;

/// Settings for label rendering. Visibility lives in
/// [`SimulationState::show_labels`].
#[derive(Resource)]
pub struct LabelSettings {
    /// Gap between the top of the sphere and the label anchor, in world units.
    pub lift: f32,
    pub font_size: f32,
    pub moon_font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            lift: 1.0,
            font_size: 14.0,
            moon_font_size: 11.0,
        }
    }
}

/// World-space point a label hangs from.
pub fn label_anchor(position: Vec3, size: f32, lift: f32) -> Vec3 {
    position + Vec3::Y * (size + lift)
}

/// Draw labels for all celestial bodies.
pub fn draw_body_labels(
    mut contexts: EguiContexts,
    system: Res<SolarSystem>,
    reports: Res<BodyReports>,
    sim: Res<SimulationState>,
    settings: Res<LabelSettings>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    if !sim.show_labels {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("body_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .interactable(false)
        .show(ctx, |ui| {
            let painter = ui.painter();

            for visit in system.walk() {
                let body = visit.body;
                let Some(report) = reports.get(body.id) else {
                    continue;
                };

                let anchor = label_anchor(report.position, report.size, settings.lift);
                // Points behind the camera fail to project
                let Ok(screen) = camera.world_to_viewport(camera_transform, anchor) else {
                    continue;
                };

                let pos = egui::pos2(screen.x, screen.y);
                let size = if body.kind == BodyKind::Moon {
                    settings.moon_font_size
                } else {
                    settings.font_size
                };
                let font = egui::FontId::proportional(size);

                // Shadow
                painter.text(
                    pos + egui::vec2(1.0, 1.0),
                    egui::Align2::CENTER_BOTTOM,
                    body.name,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
                );

                painter.text(
                    pos,
                    egui::Align2::CENTER_BOTTOM,
                    body.name,
                    font,
                    egui::Color32::from_rgba_unmultiplied(255, 255, 255, 230),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_sits_above_sphere() {
        let anchor = label_anchor(Vec3::new(10.0, 0.0, 5.0), 2.0, 1.0);
        assert_eq!(anchor, Vec3::new(10.0, 3.0, 5.0));
    }
}
