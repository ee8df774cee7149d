//! Game state and core simulation types

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ball fell past the death threshold; the state is frozen
    GameOver,
}

/// Vertical integration policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IntegrationMode {
    /// Rest on the ground until a jump input; gravity applies only in flight
    ThresholdJump,
    /// Always in flight; starts with an upward kick, jump input is ignored
    #[default]
    ContinuousBounce,
}

/// Ball/platform contact test policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContactPolicy {
    /// X and Z overlap tested with both half-extents, gated on the ball's
    /// bottom reaching the platform top
    #[default]
    Volumetric,
    /// Center-in-footprint test with the `pos.y - size.y` top convention,
    /// kept for parity with an earlier iteration of the game
    LegacyContact,
}

/// Simulation tuning knobs, copied into the state at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Vertical acceleration, negative (units/s²)
    pub gravity: f32,
    /// Upward velocity on jump, and the launch velocity in continuous mode
    pub jump_speed: f32,
    /// Horizontal key-steering speed (units/s)
    pub move_speed: f32,
    /// Ground height in threshold-jump mode
    pub rest_height: f32,
    /// Ball Y below which the run ends
    pub death_y: f32,
    /// Contacts per relocation/score event
    pub bounce_threshold: u32,
    /// Per-axis relocation displacement before the factor is applied
    pub relocation_step: f32,
    /// Growth of the relocation factor per relocation
    pub relocation_increment: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            move_speed: MOVE_SPEED,
            rest_height: REST_HEIGHT,
            death_y: DEATH_Y,
            bounce_threshold: BOUNCE_THRESHOLD,
            relocation_step: RELOCATION_STEP,
            relocation_increment: RELOCATION_FACTOR_INCREMENT,
        }
    }
}

/// The bouncing ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec3,
    /// Vertical velocity; horizontal motion is direct key translation
    pub vel_y: f32,
    pub radius: f32,
    /// Set while airborne in threshold-jump mode
    pub jumping: bool,
}

/// The landing platform
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub pos: Vec3,
    /// Full extents (width, height, depth)
    pub size: Vec3,
    /// Qualifying contacts since the last relocation
    pub bounce_count: u32,
    /// Scales relocation displacement; grows with every relocation
    pub relocation_factor: f32,
}

impl Platform {
    pub fn new(pos: Vec3, size: Vec3) -> Self {
        Self {
            pos,
            size,
            bounce_count: 0,
            relocation_factor: RELOCATION_FACTOR_START,
        }
    }

    /// Pick a new horizontal offset, apply it, and widen future moves.
    ///
    /// Each axis is a coin flip between staying put and shifting by
    /// `step * relocation_factor`; a double-stay is resampled. The loop
    /// has no retry cap: each round rejects with probability 0.25, so it
    /// terminates after ~1.33 rounds in expectation.
    pub fn relocate(&mut self, step: f32, increment: f32, rng: &mut Pcg32) {
        let shift = step * self.relocation_factor;
        let (dx, dz) = loop {
            let dx = if rng.random_bool(0.5) { 0.0 } else { shift };
            let dz = if rng.random_bool(0.5) { 0.0 } else { shift };
            if dx != 0.0 || dz != 0.0 {
                break (dx, dz);
            }
        };
        // Additive drift: the platform wanders unbounded over a long run
        self.pos.x += dx;
        self.pos.z += dz;
        self.relocation_factor += increment;
        log::debug!(
            "platform relocated by ({dx:.2}, {dz:.2}) to ({:.2}, {:.2}), factor {:.2}",
            self.pos.x,
            self.pos.z,
            self.relocation_factor
        );
    }
}

/// Complete simulation state, owned by the frame loop and passed by
/// exclusive reference through [`tick`](super::tick::tick). No globals.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving the relocation policy
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub ball: Ball,
    pub platform: Platform,
    /// One point per qualifying relocation
    pub score: u64,
    /// Frames simulated so far
    pub frame: u64,
    pub integration: IntegrationMode,
    pub contact: ContactPolicy,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a new run from the given configuration.
    pub fn new(config: &Config) -> Self {
        let vel_y = match config.integration {
            // Continuous mode starts already in flight
            IntegrationMode::ContinuousBounce => config.tuning.jump_speed,
            IntegrationMode::ThresholdJump => 0.0,
        };
        Self {
            seed: config.seed,
            rng: Pcg32::seed_from_u64(config.seed),
            phase: GamePhase::Playing,
            ball: Ball {
                pos: config.world.ball_start,
                vel_y,
                radius: config.world.ball_radius,
                jumping: false,
            },
            platform: Platform::new(config.world.platform_pos, config.world.platform_size),
            score: 0,
            frame: 0,
            integration: config.integration,
            contact: config.contact,
            tuning: config.tuning,
        }
    }
}
