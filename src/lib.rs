//! Bounce Blitz - a 3D bounce-ball arcade game core
//!
//! A ball bounces on a platform under gravity; the player steers it and
//! jumps, every second platform contact relocates the platform and scores
//! a point, and a camera (fixed orbit or ball follow) watches the scene.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clock, physics, collision, state)
//! - `camera`: View/projection strategies and the steering basis
//! - `input`: Structured event routing into per-frame snapshots
//! - `scene`: Transform/color/HUD handoff to the external renderer
//! - `config`: Data-driven variant selection and tuning
//!
//! Windowing, GPU work, and font rendering stay outside this crate: the
//! core consumes plain input events and produces matrices, colors, and a
//! HUD string.

pub mod camera;
pub mod config;
pub mod input;
pub mod scene;
pub mod sim;

pub use camera::{CameraMode, CameraRig};
pub use config::Config;
pub use sim::{FrameClock, GamePhase, GameState, TickInput, tick};

use glam::Vec3;

/// Game tuning constants
pub mod consts {
    use glam::Vec3;

    /// Window dimensions the projection and HUD are laid out for
    pub const SCR_WIDTH: u32 = 800;
    pub const SCR_HEIGHT: u32 = 600;

    /// Vertical acceleration (units/s²)
    pub const GRAVITY: f32 = -9.8;
    /// Upward kick on jump and the continuous-mode launch velocity
    pub const JUMP_SPEED: f32 = 5.0;
    /// Horizontal key-steering speed (units/s)
    pub const MOVE_SPEED: f32 = 2.5;
    /// Ground height in threshold-jump mode
    pub const REST_HEIGHT: f32 = 0.0;
    /// Ball Y below which the run ends
    pub const DEATH_Y: f32 = -30.0;

    /// Contacts per relocation/score event
    pub const BOUNCE_THRESHOLD: u32 = 2;
    /// Per-axis relocation displacement before the factor is applied
    pub const RELOCATION_STEP: f32 = -5.0;
    /// Starting relocation factor
    pub const RELOCATION_FACTOR_START: f32 = 1.0;
    /// Factor growth per relocation; the game gets harder monotonically
    pub const RELOCATION_FACTOR_INCREMENT: f32 = 0.1;

    /// Frame delta clamp against stalls
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World placement defaults
    pub const BALL_START: Vec3 = Vec3::ZERO;
    pub const BALL_RADIUS: f32 = 0.1;
    pub const PLATFORM_POS: Vec3 = Vec3::new(0.0, -1.0, 0.0);
    pub const PLATFORM_SIZE: Vec3 = Vec3::new(2.0, 0.2, 2.0);

    /// Camera defaults
    pub const CAMERA_FOV_DEG: f32 = 45.0;
    pub const CAMERA_NEAR: f32 = 0.1;
    pub const CAMERA_FAR: f32 = 100.0;
    pub const FIXED_EYE: Vec3 = Vec3::new(0.0, 0.0, 5.0);
    pub const FIXED_TARGET: Vec3 = Vec3::ZERO;
    pub const FOLLOW_DISTANCE: f32 = 5.0;
    pub const FOLLOW_HEIGHT: f32 = 2.0;
    /// Radians of yaw per pixel of horizontal drag
    pub const DRAG_SENSITIVITY: f32 = 0.005;

    /// Render handoff colors
    pub const CLEAR_COLOR: [f32; 3] = [0.2, 0.3, 0.3];
    pub const PLATFORM_COLOR: [f32; 3] = [0.1, 0.2, 0.9];
    pub const BALL_COLOR: [f32; 3] = [0.9, 0.1, 0.1];

    /// HUD layout
    pub const HUD_POS: (f32, f32) = (25.0, 25.0);
    pub const HUD_SCALE: f32 = 1.0;
    pub const HUD_COLOR: [f32; 3] = [0.9, 0.9, 0.9];
}

/// Project a vector onto the horizontal plane and normalize it.
///
/// Returns `None` for a degenerate projection (straight up or down).
#[inline]
pub fn horizontal_unit(v: Vec3) -> Option<Vec3> {
    let flat = Vec3::new(v.x, 0.0, v.z);
    (flat.length_squared() > 1e-8).then(|| flat.normalize())
}
