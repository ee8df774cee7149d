//! Input routing
//!
//! Translates structured events from the window collaborator into the
//! per-frame [`TickInput`] snapshot and feeds drag deltas to the camera
//! rig it owns. All input accumulation state lives here, not in callbacks
//! bound to globals.

use glam::Vec3;

use crate::camera::CameraRig;
use crate::sim::TickInput;

/// Logical keys the core consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Forward,
    Back,
    Left,
    Right,
    Jump,
    Quit,
}

/// Structured events from the window collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { key: Key, pressed: bool },
    /// Absolute horizontal cursor position in pixels
    MouseMove { x: f32 },
    /// Drag button state change
    MouseButton { held: bool },
}

/// Owns the camera rig and all transient input state between frames.
#[derive(Debug)]
pub struct InputRouter {
    camera: CameraRig,
    forward: bool,
    back: bool,
    left: bool,
    right: bool,
    jump: bool,
    quit: bool,
    button_held: bool,
    last_x: Option<f32>,
}

impl InputRouter {
    pub fn new(camera: CameraRig) -> Self {
        Self {
            camera,
            forward: false,
            back: false,
            left: false,
            right: false,
            jump: false,
            quit: false,
            button_held: false,
            last_x: None,
        }
    }

    /// Route one event. Drag deltas go straight to the camera rig, which
    /// applies its own gating.
    pub fn route(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { key, pressed } => match key {
                Key::Forward => self.forward = pressed,
                Key::Back => self.back = pressed,
                Key::Left => self.left = pressed,
                Key::Right => self.right = pressed,
                Key::Jump => self.jump = pressed,
                // Quit latches so a press between frames is not lost
                Key::Quit => self.quit = self.quit || pressed,
            },
            InputEvent::MouseMove { x } => {
                if let Some(last) = self.last_x {
                    self.camera.apply_drag(x - last, self.button_held);
                }
                self.last_x = Some(x);
            }
            InputEvent::MouseButton { held } => {
                self.button_held = held;
            }
        }
    }

    /// Build this frame's snapshot, movement basis included.
    pub fn snapshot(&self, ball_pos: Vec3) -> TickInput {
        TickInput {
            forward: self.forward,
            back: self.back,
            left: self.left,
            right: self.right,
            jump: self.jump,
            quit: self.quit,
            basis: self.camera.move_basis(ball_pos),
        }
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }
}
