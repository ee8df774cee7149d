//! Per-frame render handoff
//!
//! The renderer and text overlay are external collaborators; the core
//! hands them plain transforms, colors, and one formatted HUD line per
//! frame. Composing a frame reads the state and mutates nothing.

use glam::Mat4;

use crate::camera::CameraRig;
use crate::consts::*;
use crate::sim::GameState;

/// On-screen text for the overlay collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    /// Screen position in pixels from the bottom-left corner
    pub pos: (f32, f32),
    pub scale: f32,
    pub color: [f32; 3],
}

/// One draw call's worth of data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawObject {
    /// Translation only; entity sizes are fixed mesh-side
    pub model: Mat4,
    pub color: [f32; 3],
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub clear_color: [f32; 3],
    pub platform: DrawObject,
    pub ball: DrawObject,
    pub view: Mat4,
    pub projection: Mat4,
    pub hud: HudText,
}

/// Compose the handoff for the current frame.
pub fn compose(state: &GameState, camera: &CameraRig, aspect: f32) -> SceneFrame {
    SceneFrame {
        clear_color: CLEAR_COLOR,
        platform: DrawObject {
            model: Mat4::from_translation(state.platform.pos),
            color: PLATFORM_COLOR,
        },
        ball: DrawObject {
            model: Mat4::from_translation(state.ball.pos),
            color: BALL_COLOR,
        },
        view: camera.view(state.ball.pos),
        projection: camera.projection(aspect),
        hud: HudText {
            text: format!("Points: {}", state.score),
            pos: HUD_POS,
            scale: HUD_SCALE,
            color: HUD_COLOR,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraRig;
    use crate::config::Config;
    use crate::sim::GameState;
    use glam::Vec3;

    fn frame() -> SceneFrame {
        let config = Config::default();
        let mut state = GameState::new(&config);
        state.ball.pos = Vec3::new(1.0, 2.0, 3.0);
        state.score = 42;
        let camera = CameraRig::new(&config.camera);
        compose(&state, &camera, 800.0 / 600.0)
    }

    #[test]
    fn test_models_are_entity_translations() {
        let frame = frame();
        assert_eq!(frame.ball.model.w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(frame.platform.model.w_axis.truncate(), PLATFORM_POS);
        // Translation only: the rotation block stays identity
        assert_eq!(frame.ball.model.x_axis.truncate(), Vec3::X);
    }

    #[test]
    fn test_hud_formats_the_score() {
        let frame = frame();
        assert_eq!(frame.hud.text, "Points: 42");
        assert_eq!(frame.hud.pos, HUD_POS);
    }

    #[test]
    fn test_object_colors() {
        let frame = frame();
        assert_eq!(frame.ball.color, BALL_COLOR);
        assert_eq!(frame.platform.color, PLATFORM_COLOR);
        assert_eq!(frame.clear_color, CLEAR_COLOR);
    }
}
