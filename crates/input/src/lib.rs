//! Input binding for the player controller.
//!
//! Maps raw keyboard/pointer events onto controller intents. The binding
//! layer holds no physical state of its own; which direction is currently
//! held lives in the controller's velocity channels. Key identifiers are
//! `winit::keyboard::KeyCode`, the same codes a winit host feeds its
//! event loop.

pub mod binding;
pub mod bindings;

pub use binding::InputBinding;
pub use bindings::{ControlBindings, ControlScheme, KeySet};

// Re-export the winit identifier types hosts pass in
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
