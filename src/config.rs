//! Runtime configuration
//!
//! Selects the simulation variant (integration policy, contact policy,
//! camera strategy) plus world placement and tuning. Loaded from a JSON
//! file named by the `BOUNCE_BLITZ_CONFIG` environment variable, falling
//! back to defaults on any error; a bad config never aborts startup.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraMode;
use crate::consts::*;
use crate::sim::{ContactPolicy, IntegrationMode, Tuning};

/// Camera strategy selection and tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub mode: CameraMode,
    /// Static eye and look-at target (fixed orbit)
    pub eye: Vec3,
    pub target: Vec3,
    /// Horizontal eye distance from the ball (follow)
    pub distance: f32,
    /// Eye height above the ball (follow)
    pub height: f32,
    /// Radians of yaw per pixel of horizontal drag
    pub sensitivity: f32,
    /// Apply drag only while the drag button is held. `None` keeps the
    /// per-mode default: gated for the fixed orbit, ungated for follow.
    pub drag_gated: Option<bool>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            mode: CameraMode::Follow,
            eye: FIXED_EYE,
            target: FIXED_TARGET,
            distance: FOLLOW_DISTANCE,
            height: FOLLOW_HEIGHT,
            sensitivity: DRAG_SENSITIVITY,
            drag_gated: None,
        }
    }
}

/// Entity placement at simulation start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub ball_start: Vec3,
    pub ball_radius: f32,
    pub platform_pos: Vec3,
    pub platform_size: Vec3,
}

impl Default for World {
    fn default() -> Self {
        Self {
            ball_start: BALL_START,
            ball_radius: BALL_RADIUS,
            platform_pos: PLATFORM_POS,
            platform_size: PLATFORM_SIZE,
        }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Run seed; fixed by default so runs reproduce
    pub seed: u64,
    pub integration: IntegrationMode,
    pub contact: ContactPolicy,
    pub tuning: Tuning,
    pub world: World,
    pub camera: CameraConfig,
}

impl Config {
    /// Environment variable naming the config file
    const ENV_VAR: &'static str = "BOUNCE_BLITZ_CONFIG";

    /// Load the config file named by `BOUNCE_BLITZ_CONFIG`, if set.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_VAR) else {
            log::info!("using default config");
            return Self::default();
        };
        let path = std::path::PathBuf::from(path);
        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("bad config {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("cannot read {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
