//! Controller construction options.

use glam::Vec3;

use crate::events::PlayerCallbacks;

/// Default gravity in units/s². Negative is down.
pub const GRAVITY: f32 = -10.0;

/// Options for [`crate::PlayerController::new`].
///
/// The body itself is registered with the scene service by the host (or
/// pre-built and injected); `ellipsoid` describes the half-extents the
/// host should register it with and is not consumed by the controller
/// directly — contact probes scale from the scene's reported bounding
/// radius instead.
#[derive(Debug)]
pub struct PlayerOptions {
    /// Initial Euler rotation (x = pitch, y = yaw, z = roll).
    pub rotation: Vec3,
    /// Body half-extents for scene registration.
    pub ellipsoid: Vec3,
    /// Camera position relative to the body center, in body space.
    pub camera_offset: Vec3,
    /// Gravity override in units/s².
    pub gravity: f32,
    /// Planar movement speed in units/s.
    pub speed: f32,
    /// Keyboard yaw rate in rad/s.
    pub rotation_speed: f32,
    /// Vertical impulse added per jump, in units/s.
    pub jump_speed: f32,
    /// Mouse-look sensitivity multiplier.
    pub mouse_sensitivity: f32,
    /// Event handler slots.
    pub callbacks: PlayerCallbacks,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            ellipsoid: Vec3::splat(0.5),
            camera_offset: Vec3::ZERO,
            gravity: GRAVITY,
            speed: 5.0,
            rotation_speed: 1.0,
            jump_speed: 5.0,
            mouse_sensitivity: 12.0,
            callbacks: PlayerCallbacks::default(),
        }
    }
}

impl PlayerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_ellipsoid(mut self, ellipsoid: Vec3) -> Self {
        self.ellipsoid = ellipsoid;
        self
    }

    pub fn with_camera_offset(mut self, offset: Vec3) -> Self {
        self.camera_offset = offset;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn with_jump_speed(mut self, jump_speed: f32) -> Self {
        self.jump_speed = jump_speed;
        self
    }

    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    pub fn with_callbacks(mut self, callbacks: PlayerCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }
}
