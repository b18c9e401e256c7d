//! Tuning parameters for scaling, camera follow, pulse and the asteroid belt.
//!
//! Every value has a built-in default. An optional `orrery.toml` in the working
//! directory can override any subset of them:
//!
//! ```toml
//! [follow]
//! smoothing = 0.05
//!
//! [scale]
//! star_size = 10.0
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the tuning file.
pub const CONFIG_FILE: &str = "orrery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid tuning file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn is_missing_file(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// One size tier: bodies with a radius above `min_radius_km` use this tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeTier {
    pub min_radius_km: f64,
    /// Applied to the radius relative to Earth's.
    pub multiplier: f64,
    /// Smallest size the tier produces before the mode factor.
    pub floor: f64,
}

/// Constants of the scale mapper.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleTuning {
    /// Render units per AU before the mode factor.
    pub distance_unit: f64,
    pub realistic_distance_factor: f64,
    pub visible_distance_factor: f64,
    pub realistic_size_factor: f64,
    pub visible_size_factor: f64,
    pub log_distance_factor: f64,
    pub log_size_factor: f64,
    pub log_min_size: f64,
    /// Rendered size of the star in every mode.
    pub star_size: f64,
    /// Tiers ordered from largest threshold to smallest. The last tier
    /// catches everything.
    pub tiers: Vec<SizeTier>,
    /// Moon orbit radius is `parent_size * (moon_distance_base + index * moon_distance_step)`.
    pub moon_distance_base: f64,
    pub moon_distance_step: f64,
    /// Moon size relative to its parent's rendered size.
    pub moon_size_ratio: f64,
}

impl Default for ScaleTuning {
    fn default() -> Self {
        Self {
            distance_unit: 25.0,
            realistic_distance_factor: 1.5,
            visible_distance_factor: 2.0,
            realistic_size_factor: 0.8,
            visible_size_factor: 1.2,
            log_distance_factor: 20.0,
            log_size_factor: 2.0,
            log_min_size: 0.4,
            star_size: 8.0,
            tiers: vec![
                // Gas giants
                SizeTier {
                    min_radius_km: 20_000.0,
                    multiplier: 0.65,
                    floor: 2.2,
                },
                // Earth and Venus
                SizeTier {
                    min_radius_km: 3000.0,
                    multiplier: 1.6,
                    floor: 1.2,
                },
                // Mercury and the largest moons
                SizeTier {
                    min_radius_km: 1500.0,
                    multiplier: 2.0,
                    floor: 0.9,
                },
                SizeTier {
                    min_radius_km: 0.0,
                    multiplier: 3.0,
                    floor: 0.7,
                },
            ],
            moon_distance_base: 2.0,
            moon_distance_step: 1.5,
            moon_size_ratio: 0.2,
        }
    }
}

/// One follow-camera distance band keyed by rendered size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FollowBand {
    pub min_size: f32,
    pub multiplier: f32,
    pub min_distance: f32,
}

#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowTuning {
    /// Fraction of the remaining gap the eye covers each frame.
    pub smoothing: f32,
    /// Offset direction from the target, scaled by the band distance.
    pub offset: [f32; 3],
    /// Bands ordered from largest `min_size` to smallest.
    pub bands: Vec<FollowBand>,
    /// A navigation transition ends once the eye is this close to its goal,
    /// or once a chase of a moving goal holds within this much of a steady lag.
    pub arrival_distance: f32,
}

impl Default for FollowTuning {
    fn default() -> Self {
        Self {
            smoothing: 0.02,
            offset: [0.7, 0.5, 1.2],
            bands: vec![
                FollowBand {
                    min_size: 6.0,
                    multiplier: 2.5,
                    min_distance: 20.0,
                },
                FollowBand {
                    min_size: 2.0,
                    multiplier: 2.2,
                    min_distance: 8.0,
                },
                FollowBand {
                    min_size: 1.0,
                    multiplier: 1.8,
                    min_distance: 4.0,
                },
                FollowBand {
                    min_size: 0.0,
                    multiplier: 1.5,
                    min_distance: 2.5,
                },
            ],
            arrival_distance: 0.5,
        }
    }
}

/// Free-look orbit controls.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitControlTuning {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitControlTuning {
    fn default() -> Self {
        Self {
            rotate_speed: 0.4,
            zoom_speed: 0.6,
            pan_speed: 0.8,
            min_distance: 2.0,
            max_distance: 2000.0,
        }
    }
}

/// Selection pulse, driven by wall-clock time.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseTuning {
    /// Angular frequency in radians per second.
    pub frequency: f32,
    pub amplitude: f32,
}

impl Default for PulseTuning {
    fn default() -> Self {
        Self {
            frequency: 4.0,
            amplitude: 0.1,
        }
    }
}

#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeltTuning {
    pub particle_count: usize,
    pub inner_au: f64,
    pub outer_au: f64,
    /// Maximum height above or below the ecliptic in AU.
    pub half_thickness_au: f64,
    /// Wall-clock spin of the whole belt in radians per second.
    pub spin_rate: f32,
    /// Fixed seed for a reproducible belt. Random when absent.
    pub seed: Option<u64>,
}

impl Default for BeltTuning {
    fn default() -> Self {
        Self {
            particle_count: 2000,
            inner_au: 2.1,
            outer_au: 3.3,
            half_thickness_au: 0.2,
            spin_rate: 0.01,
            seed: None,
        }
    }
}

/// All tuning sections, as laid out in the TOML file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub scale: ScaleTuning,
    pub follow: FollowTuning,
    pub orbit_controls: OrbitControlTuning,
    pub pulse: PulseTuning,
    pub belt: BeltTuning,
}

impl OrreryConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load the file if present. Problems are logged and defaults used.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded tuning overrides from {}", path.display());
                config
            }
            Err(err) if err.is_missing_file() => {
                debug!("No {} found, using built-in tuning", path.display());
                Self::default()
            }
            Err(err) => {
                warn!("{err}; using built-in tuning");
                Self::default()
            }
        }
    }
}

/// Plugin that loads the tuning file and inserts each section as a resource.
pub struct ConfigPlugin {
    pub path: PathBuf,
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from(CONFIG_FILE),
        }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = OrreryConfig::load_or_default(&self.path);
        app.insert_resource(config.scale)
            .insert_resource(config.follow)
            .insert_resource(config.orbit_controls)
            .insert_resource(config.pulse)
            .insert_resource(config.belt);
    }
}
