//! Core types for the Stride player-controller workspace.
//!
//! This crate provides the foundations shared by the controller, input,
//! and physics crates:
//! - Transform for kinematic poses (body and camera)
//! - Time management for hosts driving the per-frame update
//! - The scene seam: the opaque collision/ray-query service contract

pub mod scene;
pub mod time;
pub mod transform;

pub use scene::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used math types
pub use glam::{EulerRot, Quat, Vec2, Vec3};
