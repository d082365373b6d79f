//! Rapier3D-backed implementation of the scene collision seam.

pub mod collision_scene;
pub mod groups;

pub use collision_scene::*;
pub use groups::*;

// Re-export Rapier for downstream crates
pub use rapier3d;

// Re-export common Rapier types
pub use rapier3d::prelude::{ColliderHandle, RigidBodyHandle};
