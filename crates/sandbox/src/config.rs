//! Sandbox configuration. Loaded from stride.ron at startup.

use input::{ControlBindings, ControlScheme, KeySet};
use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

/// Persistent sandbox settings. Loaded from `stride.ron` in the current
/// directory; missing or invalid files fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxConfig {
    /// Gravity in units/s² (negative is down).
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    /// Planar movement speed in units/s.
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Jump impulse in units/s.
    #[serde(default = "default_jump_speed")]
    pub jump_speed: f32,
    /// Mouse sensitivity multiplier.
    #[serde(default = "default_sensitivity")]
    pub mouse_sensitivity: f32,
    /// How long the scripted walkthrough runs, in seconds.
    #[serde(default = "default_duration")]
    pub duration_secs: f32,
    /// Key-binding override. Absent means the FPS scheme.
    #[serde(default)]
    pub bindings: Option<BindingsConfig>,
}

fn default_gravity() -> f32 {
    -10.0
}
fn default_speed() -> f32 {
    5.0
}
fn default_jump_speed() -> f32 {
    5.0
}
fn default_sensitivity() -> f32 {
    12.0
}
fn default_duration() -> f32 {
    6.0
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            speed: default_speed(),
            jump_speed: default_jump_speed(),
            mouse_sensitivity: default_sensitivity(),
            duration_secs: default_duration(),
            bindings: None,
        }
    }
}

/// Key lists per logical action. Empty lists stay unbound.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindingsConfig {
    #[serde(default)]
    pub move_forward: Vec<KeyCode>,
    #[serde(default)]
    pub move_backward: Vec<KeyCode>,
    #[serde(default)]
    pub move_left: Vec<KeyCode>,
    #[serde(default)]
    pub move_right: Vec<KeyCode>,
    #[serde(default)]
    pub turn_left: Vec<KeyCode>,
    #[serde(default)]
    pub turn_right: Vec<KeyCode>,
    #[serde(default)]
    pub jump: Vec<KeyCode>,
    #[serde(default)]
    pub turn_with_mouse: bool,
}

impl BindingsConfig {
    fn key_set(keys: &[KeyCode]) -> Option<KeySet> {
        if keys.is_empty() {
            None
        } else {
            Some(KeySet::from(keys.to_vec()))
        }
    }

    pub fn to_scheme(&self) -> ControlScheme {
        ControlScheme::from(ControlBindings {
            move_forward: Self::key_set(&self.move_forward),
            move_backward: Self::key_set(&self.move_backward),
            move_left: Self::key_set(&self.move_left),
            move_right: Self::key_set(&self.move_right),
            turn_left: Self::key_set(&self.turn_left),
            turn_right: Self::key_set(&self.turn_right),
            jump: Self::key_set(&self.jump),
            turn_with_mouse: self.turn_with_mouse,
        })
    }
}

impl SandboxConfig {
    /// Load config from `stride.ron`. If the file is missing or invalid,
    /// returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(config) => return config,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// The control scheme to run with: FPS unless bindings are supplied.
    pub fn scheme(&self) -> ControlScheme {
        match &self.bindings {
            Some(bindings) => bindings.to_scheme(),
            None => ControlScheme::fps(),
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("stride.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An empty RON document yields every default.
    #[test]
    fn empty_document_is_all_defaults() {
        let config: SandboxConfig = ron::from_str("()").unwrap();
        assert_eq!(config.gravity, -10.0);
        assert_eq!(config.speed, 5.0);
        assert!(config.bindings.is_none());
    }

    /// Partial documents repair missing fields to defaults.
    #[test]
    fn partial_document_repairs_missing_fields() {
        let config: SandboxConfig = ron::from_str("(gravity: -20.0)").unwrap();
        assert_eq!(config.gravity, -20.0);
        assert_eq!(config.jump_speed, 5.0);
    }

    /// Supplied bindings override the FPS scheme; unset actions unbind.
    #[test]
    fn bindings_override_scheme() {
        let config: SandboxConfig = ron::from_str(
            "(bindings: (move_forward: [KeyW], jump: [Space]))",
        )
        .unwrap();
        let scheme = config.scheme();
        assert!(scheme.move_forward.contains(KeyCode::KeyW));
        assert!(!scheme.move_forward.contains(KeyCode::ArrowUp));
        assert!(scheme.move_left.is_empty());
        assert!(!scheme.turn_with_mouse);
    }

    /// No bindings at all means the FPS defaults.
    #[test]
    fn absent_bindings_mean_fps() {
        let config = SandboxConfig::default();
        assert_eq!(config.scheme(), ControlScheme::fps());
    }
}
