//! Multi-ray ground-contact probe.
//!
//! A single straight-down ray false-negatives at ledges and on slopes, so
//! the probe casts seven rays from the body center: one straight down and
//! six tilted 0.25 rad off vertical at evenly spread yaw offsets. Contact
//! is declared on a majority of hits, which tolerates up to four rays
//! hanging over an edge.

use engine_core::{quat_from_euler, BodyHandle, SceneCollider};
use glam::Vec3;

/// Tilt of the splayed rays off vertical, in radians.
const PROBE_TILT: f32 = 0.25;

/// Number of probe rays.
pub const PROBE_RAYS: usize = 7;

/// Minimum hits for contact.
pub const PROBE_MAJORITY: usize = 3;

/// Downward probe directions: straight down plus six splayed rays at yaw
/// offsets of k·π/3.
pub fn probe_directions() -> [Vec3; PROBE_RAYS] {
    let mut dirs = [Vec3::NEG_Y; PROBE_RAYS];
    for (k, dir) in dirs.iter_mut().skip(1).enumerate() {
        let yaw = k as f32 * std::f32::consts::FRAC_PI_3;
        *dir = quat_from_euler(Vec3::new(PROBE_TILT, yaw, 0.0)) * Vec3::NEG_Y;
    }
    dirs
}

/// Whether `body` is in ground contact.
///
/// Each ray runs from the body center for the body's bounding radius and
/// counts a hit when it intersects any collidable surface other than the
/// body itself.
pub fn grounded(scene: &dyn SceneCollider, body: BodyHandle) -> bool {
    let origin = scene.position(body);
    let reach = scene.bounding_radius(body);
    let hits = probe_directions()
        .iter()
        .filter(|dir| scene.ray_hits(origin, **dir, reach, body))
        .count();
    hits >= PROBE_MAJORITY
}
