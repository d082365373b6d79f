//! Collision scene: kinematic player bodies against static geometry.

use std::collections::HashMap;

use engine_core::{BodyHandle, SceneCollider, Vec3};
use rapier3d::na::Isometry3;
use rapier3d::parry::query::ShapeCastOptions;
use rapier3d::prelude::*;
use thiserror::Error;

use crate::groups::CollisionGroup;

/// Skin kept between a swept body and the surface it hit, so the next
/// sweep does not start in penetration.
const CONTACT_SKIN: f32 = 1e-3;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("body half-extents must be positive, got {0}")]
    InvalidHalfExtents(Vec3),
}

#[derive(Debug, Clone, Copy)]
struct BodyEntry {
    body: RigidBodyHandle,
    collider: ColliderHandle,
    radius: f32,
}

/// The scene's collision service: rapier collider/body sets plus a query
/// pipeline, exposed to controllers through [`SceneCollider`].
///
/// Player bodies are kinematic; nothing here is stepped by a dynamics
/// pipeline. The controller integrates velocities itself and this scene
/// only resolves where a requested move actually ends up.
pub struct CollisionScene {
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub query_pipeline: QueryPipeline,
    registry: HashMap<BodyHandle, BodyEntry>,
    next_body: u64,
}

impl Default for CollisionScene {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionScene {
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            query_pipeline: QueryPipeline::new(),
            registry: HashMap::new(),
            next_body: 0,
        }
    }

    fn env_groups() -> InteractionGroups {
        let (membership, filter) = CollisionGroup::environment();
        InteractionGroups::new(membership, filter)
    }

    /// Add a ground plane collider (flat Y=0 half-space).
    pub fn add_ground_plane(&mut self) -> ColliderHandle {
        let collider = ColliderBuilder::halfspace(Vector::y_axis())
            .collision_groups(Self::env_groups())
            .build();
        let handle = self.collider_set.insert(collider);
        self.query_pipeline.update(&self.collider_set);
        handle
    }

    /// Add a static box collider fixed in the world.
    pub fn add_static_box(&mut self, center: Vec3, half_extents: Vec3) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![center.x, center.y, center.z])
            .collision_groups(Self::env_groups())
            .build();
        let handle = self.collider_set.insert(collider);
        self.query_pipeline.update(&self.collider_set);
        handle
    }

    /// Register a kinematic player body with ellipsoid half-extents.
    ///
    /// The collider is a Y capsule inscribed in the ellipsoid; the
    /// reported bounding radius is the ellipsoid's bounding sphere, which
    /// the controller uses to scale its contact probes.
    pub fn add_player_body(
        &mut self,
        position: Vec3,
        half_extents: Vec3,
    ) -> Result<BodyHandle, SceneError> {
        if half_extents.min_element() <= 0.0 {
            return Err(SceneError::InvalidHalfExtents(half_extents));
        }

        let rigid_body = RigidBodyBuilder::kinematic_position_based()
            .translation(vector![position.x, position.y, position.z])
            .build();
        let body = self.rigid_body_set.insert(rigid_body);

        let radius = half_extents.x.min(half_extents.z);
        let half_height = (half_extents.y - radius).max(0.0);
        let (membership, filter) = CollisionGroup::player();
        let collider = ColliderBuilder::capsule_y(half_height, radius)
            .collision_groups(InteractionGroups::new(membership, filter))
            .build();
        let collider =
            self.collider_set
                .insert_with_parent(collider, body, &mut self.rigid_body_set);

        self.query_pipeline.update(&self.collider_set);

        let handle = BodyHandle(self.next_body);
        self.next_body += 1;
        self.registry.insert(
            handle,
            BodyEntry {
                body,
                collider,
                radius: half_extents.length(),
            },
        );
        log::debug!("registered player body {:?} at {}", handle, position);
        Ok(handle)
    }

    fn entry(&self, body: BodyHandle) -> Option<BodyEntry> {
        let entry = self.registry.get(&body).copied();
        if entry.is_none() {
            log::warn!("query for unregistered body {:?}", body);
        }
        entry
    }
}

impl SceneCollider for CollisionScene {
    fn position(&self, body: BodyHandle) -> Vec3 {
        let Some(entry) = self.entry(body) else {
            return Vec3::ZERO;
        };
        let translation = self.rigid_body_set[entry.body].translation();
        Vec3::new(translation.x, translation.y, translation.z)
    }

    fn move_with_collisions(&mut self, body: BodyHandle, displacement: Vec3) -> Vec3 {
        let Some(entry) = self.entry(body) else {
            return Vec3::ZERO;
        };
        let length = displacement.length();
        if length <= f32::EPSILON {
            return Vec3::ZERO;
        }

        let start = *self.rigid_body_set[entry.body].translation();
        let shape_pos = Isometry3::translation(start.x, start.y, start.z);
        let shape_vel = vector![displacement.x, displacement.y, displacement.z];
        let shape = self.collider_set[entry.collider].shape();
        let filter = QueryFilter::default().exclude_rigid_body(entry.body);
        let options = ShapeCastOptions {
            max_time_of_impact: 1.0,
            target_distance: 0.0,
            stop_at_penetration: true,
            compute_impact_geometry_on_penetration: false,
        };

        // Collide-and-stop: clip the requested move at first impact and
        // back off by the contact skin.
        let fraction = match self.query_pipeline.cast_shape(
            &self.rigid_body_set,
            &self.collider_set,
            &shape_pos,
            &shape_vel,
            shape,
            options,
            filter,
        ) {
            Some((_, hit)) => (hit.time_of_impact - CONTACT_SKIN / length).clamp(0.0, 1.0),
            None => 1.0,
        };

        let actual = displacement * fraction;
        let next = vector![start.x + actual.x, start.y + actual.y, start.z + actual.z];
        if let Some(rigid_body) = self.rigid_body_set.get_mut(entry.body) {
            rigid_body.set_translation(next, true);
        }
        self.query_pipeline.update(&self.collider_set);
        actual
    }

    fn ray_hits(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        exclude: BodyHandle,
    ) -> bool {
        let ray = Ray::new(
            point![origin.x, origin.y, origin.z],
            vector![direction.x, direction.y, direction.z],
        );
        let mut filter = QueryFilter::default();
        if let Some(entry) = self.registry.get(&exclude) {
            filter = filter.exclude_rigid_body(entry.body);
        }
        self.query_pipeline
            .cast_ray(
                &self.rigid_body_set,
                &self.collider_set,
                &ray,
                max_distance,
                true,
                filter,
            )
            .is_some()
    }

    fn bounding_radius(&self, body: BodyHandle) -> f32 {
        self.entry(body).map(|entry| entry.radius).unwrap_or(0.0)
    }
}
