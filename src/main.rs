//! Orrery - Interactive Solar System Explorer
//!
//! A desktop application for exploring the Sun, planets, major moons and
//! asteroids, with adjustable time and scale.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::config::ConfigPlugin;
use orrery::controls::ControlsPlugin;
use orrery::input::InputPlugin;
use orrery::kinematics::KinematicsPlugin;
use orrery::render::RenderPlugin;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Tuning resources go in before the plugins that would default them
        .add_plugins(ConfigPlugin::default())
        .add_plugins((
            ControlsPlugin,
            KinematicsPlugin,
            CameraPlugin,
            InputPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run();
}
