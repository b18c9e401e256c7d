//! Orrery - Interactive Solar System Explorer
//!
//! A library crate providing the simulation, rendering and UI plugins,
//! exposed for testing and integration purposes.

pub mod bodies;
pub mod camera;
pub mod config;
pub mod controls;
pub mod input;
pub mod kinematics;
pub mod render;
pub mod scaling;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
