//! First-person / vehicle-style player controller.
//!
//! The controller owns a body handle issued by the host scene and an
//! attached camera offset, and turns movement/turn intents into per-frame
//! motion: planar velocity, vertical velocity with gravity, and yaw
//! angular velocity, integrated against the scene's collision-aware move
//! primitive. Ground contact is decided by a splayed multi-ray probe and
//! gates both jumping and the grounded clamp on downward velocity.
//!
//! Semantic events (move, move-change, turn, turn-change, jump,
//! focus/blur) are delivered through optional handler slots in
//! [`PlayerCallbacks`].
//!
//! All scene access goes through [`engine_core::SceneCollider`], so the
//! controller runs identically against the rapier-backed `physics` crate
//! or a scripted test scene.

pub mod config;
pub mod contact;
pub mod direction;
pub mod events;
pub mod player;

pub use config::PlayerOptions;
pub use direction::{ForwardDirection, LateralDirection, TurnDirection};
pub use events::{MoveChangeEvent, MoveEvent, PlayerCallbacks, TurnChangeEvent, TurnEvent};
pub use player::PlayerController;

#[cfg(test)]
pub(crate) mod testing;
