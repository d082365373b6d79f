//! Scripted scene for controller tests.

use std::cell::Cell;

use engine_core::{BodyHandle, SceneCollider};
use glam::Vec3;

use crate::contact::PROBE_RAYS;

/// A scene with one body, scripted ray results, and an adjustable
/// collision clip factor (1.0 = unobstructed, 0.0 = fully blocked).
pub(crate) struct StubScene {
    pub position: Vec3,
    pub radius: f32,
    pub clip: f32,
    ray_results: [bool; PROBE_RAYS],
    ray_cursor: Cell<usize>,
}

impl StubScene {
    /// Unobstructed scene, never in ground contact.
    pub fn airborne() -> Self {
        Self::with_ray_results([false; PROBE_RAYS])
    }

    /// Unobstructed scene, always in ground contact.
    pub fn grounded() -> Self {
        Self::with_ray_results([true; PROBE_RAYS])
    }

    /// Scene answering ray queries from a fixed table, in call order,
    /// cycling per contact test.
    pub fn with_ray_results(results: [bool; PROBE_RAYS]) -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 0.0),
            radius: 0.866,
            clip: 1.0,
            ray_results: results,
            ray_cursor: Cell::new(0),
        }
    }

    /// Number of ray queries answered so far.
    pub fn ray_queries(&self) -> usize {
        self.ray_cursor.get()
    }
}

impl SceneCollider for StubScene {
    fn position(&self, _body: BodyHandle) -> Vec3 {
        self.position
    }

    fn move_with_collisions(&mut self, _body: BodyHandle, displacement: Vec3) -> Vec3 {
        let actual = displacement * self.clip;
        self.position += actual;
        actual
    }

    fn ray_hits(
        &self,
        _origin: Vec3,
        _direction: Vec3,
        _max_distance: f32,
        _exclude: BodyHandle,
    ) -> bool {
        let i = self.ray_cursor.get();
        self.ray_cursor.set(i + 1);
        self.ray_results[i % PROBE_RAYS]
    }

    fn bounding_radius(&self, _body: BodyHandle) -> f32 {
        self.radius
    }
}
