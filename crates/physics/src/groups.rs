//! Collision groups and filtering.

use rapier3d::prelude::*;

/// Collision groups for the controller scene.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroup {
    /// Static environment (ground, walls, platforms)
    Environment = 1 << 0,
    /// Player bodies
    Player = 1 << 1,
}

impl CollisionGroup {
    /// Collision group for environment geometry: collides with everything.
    pub fn environment() -> (Group, Group) {
        let membership = Group::from_bits_retain(Self::Environment as u32);
        (membership, Group::ALL)
    }

    /// Collision group for player bodies: collides with the environment
    /// but not with other players' probe rays.
    pub fn player() -> (Group, Group) {
        let membership = Group::from_bits_retain(Self::Player as u32);
        let filter = Group::from_bits_retain(Self::Environment as u32);
        (membership, filter)
    }
}
