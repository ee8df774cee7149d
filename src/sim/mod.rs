//! Deterministic simulation module
//!
//! All gameplay decisions live here. This module must stay pure:
//! - Explicit state passed by `&mut`, no module-level globals
//! - Seeded RNG only
//! - No windowing, rendering, or text dependencies

pub mod clock;
pub mod collision;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{ball_platform_contact, platform_top};
pub use state::{
    Ball, ContactPolicy, GamePhase, GameState, IntegrationMode, Platform, Tuning,
};
pub use tick::{MoveBasis, TickInput, tick};
