//! Per-frame simulation step
//!
//! Advances ball physics for one frame of elapsed time, resolves platform
//! contact, applies the relocation/scoring policy, and raises the terminal
//! condition. All decisions run off the state and the input snapshot;
//! nothing here touches the clock, the window, or the renderer.

use glam::Vec3;

use super::collision::{ball_platform_contact, platform_top};
use super::state::{GamePhase, GameState, IntegrationMode};

/// Horizontal movement frame for key steering.
///
/// Supplied per frame by the active camera so "forward" matches what the
/// player sees; the fallback is the world frame of the fixed camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for MoveBasis {
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

/// Input commands for a single frame (transient, rebuilt every frame)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys, mapped through `basis`
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    /// Jump key held; only the threshold-jump mode reads it
    pub jump: bool,
    /// Quit requested; observed by the outer loop, not by the sim
    pub quit: bool,
    /// Camera-derived horizontal movement frame
    pub basis: MoveBasis,
}

/// Advance the simulation by one frame of `dt` seconds.
///
/// A tick in `GameOver` mutates nothing.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.frame += 1;

    steer(state, input, dt);
    integrate(state, input, dt);

    if ball_platform_contact(&state.ball, &state.platform, state.contact) {
        resolve_contact(state);
    }

    if state.ball.pos.y < state.tuning.death_y {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over at frame {}: final score {}",
            state.frame,
            state.score
        );
    }
}

/// Constant-speed horizontal translation along the camera basis.
///
/// No acceleration or drag; each held key contributes its full axis, so
/// diagonals run faster.
fn steer(state: &mut GameState, input: &TickInput, dt: f32) {
    let mut dir = Vec3::ZERO;
    if input.forward {
        dir += input.basis.forward;
    }
    if input.back {
        dir -= input.basis.forward;
    }
    if input.right {
        dir += input.basis.right;
    }
    if input.left {
        dir -= input.basis.right;
    }
    if dir != Vec3::ZERO {
        state.ball.pos += dir * state.tuning.move_speed * dt;
    }
}

/// Semi-implicit Euler vertical step.
///
/// Position consumes the previous frame's velocity before gravity is
/// applied; the one-frame velocity lag is part of the game's observed
/// trajectories and must not be reordered.
fn integrate(state: &mut GameState, input: &TickInput, dt: f32) {
    let t = state.tuning;
    let ball = &mut state.ball;
    match state.integration {
        IntegrationMode::ThresholdJump => {
            if input.jump && !ball.jumping {
                ball.jumping = true;
                ball.vel_y = t.jump_speed;
            }
            if ball.pos.y > t.rest_height || ball.jumping {
                ball.pos.y += ball.vel_y * dt;
                ball.vel_y += t.gravity * dt;
                // Landing: the descending leg crossed the resting height
                if ball.jumping && ball.vel_y < 0.0 && ball.pos.y <= t.rest_height {
                    ball.jumping = false;
                }
            } else {
                ball.pos.y = t.rest_height;
                ball.vel_y = 0.0;
            }
        }
        IntegrationMode::ContinuousBounce => {
            ball.pos.y += ball.vel_y * dt;
            ball.vel_y += t.gravity * dt;
        }
    }
}

/// Contact response: clamp onto the platform top, reflect, count the
/// bounce, and run the relocation/scoring policy at the threshold.
fn resolve_contact(state: &mut GameState) {
    let t = state.tuning;
    state.ball.pos.y = platform_top(&state.platform, state.contact) + state.ball.radius;
    // Perfectly elastic: no energy loss or gain across a bounce
    state.ball.vel_y = -state.ball.vel_y;
    state.platform.bounce_count += 1;

    if state.platform.bounce_count >= t.bounce_threshold {
        state.platform.bounce_count = 0;
        state
            .platform
            .relocate(t.relocation_step, t.relocation_increment, &mut state.rng);
        state.score += 1;
        log::debug!("score {}", state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::state::ContactPolicy;
    use proptest::prelude::*;

    const DT_60: f32 = 1.0 / 60.0;

    /// Continuous-bounce state with the platform pushed far away so
    /// vertical motion runs free of contacts.
    fn free_flight_state() -> GameState {
        let mut config = Config::default();
        config.world.platform_pos.x = 100.0;
        GameState::new(&config)
    }

    #[test]
    fn test_zero_velocity_step_leaves_position() {
        let mut state = free_flight_state();
        state.ball.pos.y = 10.0;
        state.ball.vel_y = 0.0;
        tick(&mut state, &TickInput::default(), 0.1);
        assert_eq!(state.ball.pos.y, 10.0);
        assert!((state.ball.vel_y - state.tuning.gravity * 0.1).abs() < 1e-7);
    }

    proptest! {
        #[test]
        fn prop_zero_velocity_step(dt in 0.0f32..0.25) {
            let mut state = free_flight_state();
            state.ball.pos.y = 10.0;
            state.ball.vel_y = 0.0;
            tick(&mut state, &TickInput::default(), dt);
            // Velocity lags one frame: this step only charges it
            prop_assert_eq!(state.ball.pos.y, 10.0);
            prop_assert_eq!(state.ball.vel_y, state.tuning.gravity * dt);
        }
    }

    #[test]
    fn test_two_contacts_one_relocation_one_point() {
        let mut config = Config::default();
        // Gravity off so the reflection magnitudes stay exact
        config.tuning.gravity = 0.0;
        let mut state = GameState::new(&config);

        let rest_y = platform_top(&state.platform, state.contact) + state.ball.radius;

        // First synthetic contact
        state.ball.pos = Vec3::new(0.0, -0.85, 0.0);
        state.ball.vel_y = -3.0;
        tick(&mut state, &TickInput::default(), 0.001);
        assert_eq!(state.ball.vel_y, 3.0, "reflection is lossless");
        assert_eq!(state.ball.pos.y, rest_y, "ball clamps onto the platform top");
        assert_eq!(state.platform.bounce_count, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.platform.pos, Vec3::new(0.0, -1.0, 0.0));

        // Second synthetic contact reaches the threshold
        state.ball.pos = Vec3::new(0.0, -0.85, 0.0);
        state.ball.vel_y = -3.0;
        tick(&mut state, &TickInput::default(), 0.001);
        assert_eq!(state.ball.vel_y, 3.0, "second reflection restores the sign again");
        assert_eq!(state.platform.bounce_count, 0, "counter resets at the threshold");
        assert_eq!(state.score, 1, "exactly one point per relocation event");
        assert_ne!(
            state.platform.pos,
            Vec3::new(0.0, -1.0, 0.0),
            "the platform relocated"
        );
        assert!((state.platform.relocation_factor - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_first_contact_matches_reference_trajectory() {
        // Known launch: y0=0.5, v0=5.0, g=-12.8, dt=0.1, platform top
        // at -0.9 (position -1.0, height 0.2), ball radius 0.1
        let mut config = Config::default();
        config.tuning.gravity = -12.8;
        config.tuning.jump_speed = 5.0;
        config.world.ball_start = Vec3::new(0.0, 0.5, 0.0);
        let mut state = GameState::new(&config);

        let top = platform_top(&state.platform, ContactPolicy::Volumetric);
        let radius = state.ball.radius;
        let dt = 0.1;

        // Independent reference with the same step policy: position from
        // the lagging velocity, then velocity
        let (mut ref_y, mut ref_v) = (0.5f32, 5.0f32);
        let mut ref_contact_frame = 0u64;
        for frame in 1..100u64 {
            ref_y += ref_v * dt;
            ref_v += -12.8 * dt;
            if ref_v < 0.0 && ref_y - radius <= top {
                ref_contact_frame = frame;
                break;
            }
        }
        assert!(ref_contact_frame > 0);

        let mut sim_contact_frame = 0u64;
        for _ in 0..100 {
            tick(&mut state, &TickInput::default(), dt);
            if state.platform.bounce_count == 1 {
                sim_contact_frame = state.frame;
                break;
            }
        }

        assert_eq!(sim_contact_frame, ref_contact_frame);
        assert_eq!(state.ball.pos.y, top + radius);
    }

    #[test]
    fn test_death_freezes_the_state() {
        // Platform far away: a ball this deep is in free fall, not resting
        let mut state = free_flight_state();
        state.ball.pos.y = -31.0;
        state.ball.vel_y = -5.0;
        tick(&mut state, &TickInput::default(), DT_60);
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen = state.clone();
        tick(&mut state, &TickInput::default(), DT_60);
        tick(&mut state, &TickInput::default(), 0.1);
        assert_eq!(state, frozen, "no mutation after the terminal frame");
    }

    #[test]
    fn test_threshold_jump_cycle() {
        let mut config = Config::default();
        config.integration = IntegrationMode::ThresholdJump;
        config.world.platform_pos.x = 100.0;
        config.world.ball_start = Vec3::ZERO;
        let mut state = GameState::new(&config);

        // At rest: nothing moves
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), DT_60);
        }
        assert_eq!(state.ball.pos.y, 0.0);
        assert_eq!(state.ball.vel_y, 0.0);

        // One tap of the jump key launches
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, DT_60);
        assert!(state.ball.jumping);
        assert!(state.ball.pos.y > 0.0 || state.ball.vel_y > 0.0);

        // Full parabola at g=-9.8, v0=5 lasts about a second
        for _ in 0..180 {
            tick(&mut state, &TickInput::default(), DT_60);
        }
        assert!(!state.ball.jumping);
        assert_eq!(state.ball.pos.y, 0.0);
        assert_eq!(state.ball.vel_y, 0.0);

        // A second jump works from the ground
        tick(&mut state, &jump, DT_60);
        assert!(state.ball.jumping);
        assert_eq!(state.ball.vel_y, state.tuning.jump_speed + state.tuning.gravity * DT_60);
    }

    #[test]
    fn test_steering_follows_the_basis() {
        let mut state = free_flight_state();
        state.tuning.gravity = 0.0;
        state.ball.pos = Vec3::new(0.0, 50.0, 0.0);
        state.ball.vel_y = 0.0;
        let speed = state.tuning.move_speed;

        let input = TickInput {
            forward: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.5);
        assert_eq!(state.ball.pos.z, -speed * 0.5);
        assert_eq!(state.ball.pos.x, 0.0);

        // Opposed keys cancel
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.5);
        assert_eq!(state.ball.pos.x, 0.0);

        // A rotated basis steers along the camera frame, not world axes
        let input = TickInput {
            forward: true,
            basis: MoveBasis {
                forward: Vec3::X,
                right: Vec3::NEG_Z,
            },
            ..Default::default()
        };
        tick(&mut state, &input, 0.5);
        assert_eq!(state.ball.pos.x, speed * 0.5);
    }

    #[test]
    fn test_determinism() {
        // Same seed, same inputs: identical runs, relocations included
        let config = Config {
            seed: 4242,
            ..Config::default()
        };
        let mut state1 = GameState::new(&config);
        let mut state2 = GameState::new(&config);

        let input = TickInput::default();
        for _ in 0..1200 {
            tick(&mut state1, &input, 1.0 / 120.0);
            tick(&mut state2, &input, 1.0 / 120.0);
        }
        assert_eq!(state1, state2);
        // The run exercised the policy: at least one bounce pair happened
        assert!(state1.score >= 1 || state1.phase == GamePhase::GameOver);
    }

    #[test]
    fn test_continuous_bounce_ignores_jump() {
        let mut state = free_flight_state();
        state.ball.pos.y = 10.0;
        state.ball.vel_y = 0.0;
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, DT_60);
        assert!(!state.ball.jumping);
        assert!(state.ball.vel_y < 0.0, "gravity still rules; no jump kick");
    }
}
