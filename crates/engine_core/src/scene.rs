//! The scene seam: collision resolution and ray picking as an opaque service.
//!
//! The controller never talks to a physics engine directly. It moves its
//! body and probes for ground through this trait, so the motion state
//! machine can be tested against a scripted scene and shipped against the
//! rapier-backed `physics` crate unchanged.

use glam::Vec3;

/// Opaque handle to a body registered with a scene service.
///
/// The controller holds exclusive logical ownership of its body handle; the
/// scene never mutates the body except through calls made with that handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u64);

/// Collision and ray-query capability offered by the host scene.
///
/// Negative results (no hit, fully blocked move) are normal values, not
/// errors. Implementations are queried by every controller instance in the
/// scene and must not assume a single caller.
pub trait SceneCollider {
    /// Current world position of a body's center.
    fn position(&self, body: BodyHandle) -> Vec3;

    /// Attempt to move a body by `displacement`, resolving against
    /// collidable geometry. Returns the actual delta applied, which may be
    /// truncated by contact.
    fn move_with_collisions(&mut self, body: BodyHandle, displacement: Vec3) -> Vec3;

    /// Whether a ray from `origin` along `direction` (normalized) hits any
    /// collidable surface other than `exclude`'s own body within
    /// `max_distance`.
    fn ray_hits(&self, origin: Vec3, direction: Vec3, max_distance: f32, exclude: BodyHandle)
        -> bool;

    /// Bounding-sphere radius of a body, used to scale contact probes.
    fn bounding_radius(&self, body: BodyHandle) -> f32;
}
