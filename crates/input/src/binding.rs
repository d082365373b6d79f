//! Dispatch from raw input events to controller intents.

use std::time::Instant;

use controller::{ForwardDirection, LateralDirection, PlayerController, TurnDirection};
use engine_core::SceneCollider;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::bindings::ControlScheme;

/// Scale applied to raw pointer deltas before the controller's own
/// sensitivity multiplier.
const MOUSE_SCALE: f32 = 1e-4;

/// Maps key and pointer events onto a [`PlayerController`].
///
/// Holds a non-owning view of the controller: every handler takes the
/// controller (and, where movement can result, the scene) as arguments,
/// and the binding keeps only the normalized scheme and the pointer
/// capture flag.
#[derive(Debug)]
pub struct InputBinding {
    scheme: ControlScheme,
    engaged: bool,
}

impl InputBinding {
    pub fn new(scheme: ControlScheme) -> Self {
        Self {
            scheme,
            engaged: false,
        }
    }

    pub fn scheme(&self) -> &ControlScheme {
        &self.scheme
    }

    /// Whether pointer capture is currently engaged.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Handle a key press. `repeat` is the host's key-repeat flag; jump
    /// ignores repeats so holding space cannot jump-spam. The first
    /// matching action wins.
    pub fn on_key_down(
        &mut self,
        player: &mut PlayerController,
        scene: &mut dyn SceneCollider,
        key: KeyCode,
        repeat: bool,
    ) {
        if self.scheme.move_forward.contains(key) {
            player.go_forward(ForwardDirection::Forward);
        } else if self.scheme.move_backward.contains(key) {
            player.go_forward(ForwardDirection::Backward);
        } else if self.scheme.move_left.contains(key) {
            player.go_sidewise(LateralDirection::Left);
        } else if self.scheme.move_right.contains(key) {
            player.go_sidewise(LateralDirection::Right);
        } else if self.scheme.turn_left.contains(key) {
            player.turn(TurnDirection::Left);
        } else if self.scheme.turn_right.contains(key) {
            player.turn(TurnDirection::Right);
        } else if self.scheme.jump.contains(key) && !repeat {
            player.jump(&*scene);
        }
    }

    /// Handle a key release.
    ///
    /// Releasing either key of an opposing pair zeroes that intent
    /// unconditionally, even if the released key was never the one held.
    /// Long-standing behavior; hosts that care track held keys themselves.
    pub fn on_key_up(&mut self, player: &mut PlayerController, key: KeyCode) {
        if self.scheme.move_forward.contains(key) || self.scheme.move_backward.contains(key) {
            player.go_forward(ForwardDirection::None);
        } else if self.scheme.move_left.contains(key) || self.scheme.move_right.contains(key) {
            player.go_sidewise(LateralDirection::None);
        } else if self.scheme.turn_left.contains(key) || self.scheme.turn_right.contains(key) {
            player.turn(TurnDirection::None);
        }
    }

    /// Bridge a winit keyboard event to the handlers.
    pub fn process_keyboard(
        &mut self,
        player: &mut PlayerController,
        scene: &mut dyn SceneCollider,
        key: KeyCode,
        state: ElementState,
        repeat: bool,
    ) {
        match state {
            ElementState::Pressed => self.on_key_down(player, scene, key, repeat),
            ElementState::Released => self.on_key_up(player, key),
        }
    }

    /// Handle a pointer-move delta. Active only while pointer capture is
    /// engaged and the scheme enables mouse look.
    pub fn on_mouse_move(&mut self, player: &mut PlayerController, dx: f32, dy: f32) {
        if !self.scheme.turn_with_mouse || !self.engaged {
            return;
        }
        let scale = MOUSE_SCALE * player.mouse_sensitivity;
        player.rotate(-scale * dx);
        player.look_up(-scale * dy);
    }

    /// Pointer capture acquired: enable mouse look and notify focus.
    pub fn engage(&mut self, player: &mut PlayerController) {
        if !self.scheme.turn_with_mouse {
            return;
        }
        log::debug!("pointer capture engaged");
        self.engaged = true;
        player.focus();
    }

    /// Pointer capture released: disable mouse look and notify blur.
    pub fn disengage(&mut self, player: &mut PlayerController) {
        if self.engaged {
            log::debug!("pointer capture released");
            self.engaged = false;
            player.blur();
        }
    }

    /// Stop listening: release pointer capture and clear all held intents
    /// so nothing stays pressed after detach.
    pub fn detach(&mut self, player: &mut PlayerController) {
        self.disengage(player);
        player.go_forward(ForwardDirection::None);
        player.go_sidewise(LateralDirection::None);
        player.turn(TurnDirection::None);
    }

    /// Per-frame hook: forwards to the controller tick. Call exactly once
    /// per rendered frame.
    pub fn update(&mut self, player: &mut PlayerController, scene: &mut dyn SceneCollider, now: Instant) {
        player.tick(scene, now);
    }
}
