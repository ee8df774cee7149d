//! Ball/platform contact detection
//!
//! Axis-aligned tests between the ball (treated as its bounding box) and
//! the platform box. Contact only fires on the descending leg and is
//! sampled once per frame with no sub-stepping; a fast enough fall can
//! pass clean through the platform between two samples.

use super::state::{Ball, ContactPolicy, Platform};

/// World-space Y of the platform's upper face under `policy`.
///
/// `Volumetric` takes the box midplane plus half the height.
/// `LegacyContact` reproduces an earlier iteration that subtracted the
/// full height from the center instead.
pub fn platform_top(platform: &Platform, policy: ContactPolicy) -> f32 {
    match policy {
        ContactPolicy::Volumetric => platform.pos.y + platform.size.y / 2.0,
        ContactPolicy::LegacyContact => platform.pos.y - platform.size.y,
    }
}

/// Check whether a descending ball is in contact with the platform.
///
/// Never reports contact while the ball is rising or hovering
/// (`vel_y >= 0`): only the falling leg of a bounce can land.
pub fn ball_platform_contact(ball: &Ball, platform: &Platform, policy: ContactPolicy) -> bool {
    if ball.vel_y >= 0.0 {
        return false;
    }
    let reached_top = ball.pos.y - ball.radius <= platform_top(platform, policy);
    match policy {
        ContactPolicy::Volumetric => {
            reached_top
                && (ball.pos.x - platform.pos.x).abs() <= ball.radius + platform.size.x / 2.0
                && (ball.pos.z - platform.pos.z).abs() <= ball.radius + platform.size.z / 2.0
        }
        ContactPolicy::LegacyContact => {
            // Looser footprint test: ball center only, no radius term
            reached_top
                && (ball.pos.x - platform.pos.x).abs() <= platform.size.x / 2.0
                && (ball.pos.z - platform.pos.z).abs() <= platform.size.z / 2.0
        }
    }
}
