//! Key-binding tables and their normalization.

use winit::keyboard::KeyCode;

/// A normalized set of keys bound to one logical action.
///
/// Whatever a binding is supplied as — one key, a list, or nothing — it
/// is stored as a plain (possibly empty) sequence, so membership tests
/// never have an absent case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet(Vec<KeyCode>);

impl KeySet {
    pub fn contains(&self, key: KeyCode) -> bool {
        self.0.contains(&key)
    }

    pub fn keys(&self) -> &[KeyCode] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<KeyCode> for KeySet {
    fn from(key: KeyCode) -> Self {
        Self(vec![key])
    }
}

impl From<Vec<KeyCode>> for KeySet {
    fn from(keys: Vec<KeyCode>) -> Self {
        Self(keys)
    }
}

impl<const N: usize> From<[KeyCode; N]> for KeySet {
    fn from(keys: [KeyCode; N]) -> Self {
        Self(keys.to_vec())
    }
}

/// Raw, possibly partial, binding configuration. Unset actions normalize
/// to empty sets in [`ControlScheme`].
#[derive(Debug, Clone, Default)]
pub struct ControlBindings {
    pub move_forward: Option<KeySet>,
    pub move_backward: Option<KeySet>,
    pub move_left: Option<KeySet>,
    pub move_right: Option<KeySet>,
    pub turn_left: Option<KeySet>,
    pub turn_right: Option<KeySet>,
    pub jump: Option<KeySet>,
    pub turn_with_mouse: bool,
}

/// Fully normalized control scheme: every action has a (possibly empty)
/// key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlScheme {
    pub move_forward: KeySet,
    pub move_backward: KeySet,
    pub move_left: KeySet,
    pub move_right: KeySet,
    pub turn_left: KeySet,
    pub turn_right: KeySet,
    pub jump: KeySet,
    pub turn_with_mouse: bool,
}

impl Default for ControlScheme {
    /// The FPS scheme is the default when no bindings are supplied.
    fn default() -> Self {
        Self::fps()
    }
}

impl ControlScheme {
    /// First-person scheme: WASD/arrows strafe, space jumps, the mouse
    /// turns.
    pub fn fps() -> Self {
        Self {
            move_forward: [KeyCode::ArrowUp, KeyCode::KeyW].into(),
            move_backward: [KeyCode::ArrowDown, KeyCode::KeyS].into(),
            move_left: [KeyCode::ArrowLeft, KeyCode::KeyA].into(),
            move_right: [KeyCode::ArrowRight, KeyCode::KeyD].into(),
            turn_left: KeySet::default(),
            turn_right: KeySet::default(),
            jump: KeySet::from(KeyCode::Space),
            turn_with_mouse: true,
        }
    }

    /// Vehicle scheme: left/right keys steer instead of strafing, no
    /// mouse look.
    pub fn race() -> Self {
        Self {
            move_forward: [KeyCode::ArrowUp, KeyCode::KeyW].into(),
            move_backward: [KeyCode::ArrowDown, KeyCode::KeyS].into(),
            move_left: KeySet::default(),
            move_right: KeySet::default(),
            turn_left: [KeyCode::ArrowLeft, KeyCode::KeyA].into(),
            turn_right: [KeyCode::ArrowRight, KeyCode::KeyD].into(),
            jump: KeySet::from(KeyCode::Space),
            turn_with_mouse: false,
        }
    }
}

impl From<ControlBindings> for ControlScheme {
    /// Normalize a partial table: supplied actions keep their keys, the
    /// rest become empty sets (not the FPS defaults — a partial table is
    /// an explicit scheme, not an overlay).
    fn from(bindings: ControlBindings) -> Self {
        Self {
            move_forward: bindings.move_forward.unwrap_or_default(),
            move_backward: bindings.move_backward.unwrap_or_default(),
            move_left: bindings.move_left.unwrap_or_default(),
            move_right: bindings.move_right.unwrap_or_default(),
            turn_left: bindings.turn_left.unwrap_or_default(),
            turn_right: bindings.turn_right.unwrap_or_default(),
            jump: bindings.jump.unwrap_or_default(),
            turn_with_mouse: bindings.turn_with_mouse,
        }
    }
}
