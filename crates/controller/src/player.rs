//! The player controller: intent state, velocity integration, and events.

use std::time::Instant;

use engine_core::{quat_from_euler, BodyHandle, SceneCollider, Transform};
use glam::{Quat, Vec2, Vec3};

use crate::config::PlayerOptions;
use crate::contact;
use crate::direction::{ForwardDirection, LateralDirection, TurnDirection};
use crate::events::{MoveChangeEvent, MoveEvent, PlayerCallbacks, TurnChangeEvent, TurnEvent};

/// Squared-magnitude dead zone below which moves and rotations are
/// dropped, so idle integration does not spam events.
const DEAD_ZONE: f32 = 1e-6;

/// Kinematic first-person controller over a scene-issued body handle.
///
/// Holds the orientation authority (Euler rotation), the three velocity
/// channels (planar, vertical, yaw), and the event handler slots. All
/// translation goes through the scene's collision-aware move primitive;
/// the scene stays the position authority and the controller reads it
/// back after every move.
pub struct PlayerController {
    body: BodyHandle,
    /// Euler rotation: x = pitch, y = yaw, z = roll.
    rotation: Vec3,
    camera_offset: Vec3,

    pub speed: f32,
    pub rotation_speed: f32,
    pub jump_speed: f32,
    pub mouse_sensitivity: f32,
    gravity: f32,

    /// x = forward component, y = sidewise component, units/s.
    planar_velocity: Vec2,
    vertical_velocity: f32,
    angular_velocity: f32,
    last_tick: Option<Instant>,

    callbacks: PlayerCallbacks,
}

impl PlayerController {
    /// Create a controller over a body already registered with the scene.
    pub fn new(body: BodyHandle, options: PlayerOptions) -> Self {
        log::debug!(
            "player controller on body {:?}: gravity {}, speed {}",
            body,
            options.gravity,
            options.speed
        );
        Self {
            body,
            rotation: options.rotation,
            camera_offset: options.camera_offset,
            speed: options.speed,
            rotation_speed: options.rotation_speed,
            jump_speed: options.jump_speed,
            mouse_sensitivity: options.mouse_sensitivity,
            gravity: options.gravity,
            planar_velocity: Vec2::ZERO,
            vertical_velocity: 0.0,
            angular_velocity: 0.0,
            last_tick: None,
            callbacks: options.callbacks,
        }
    }

    /// The scene body handle this controller drives.
    pub fn body(&self) -> BodyHandle {
        self.body
    }

    /// Current Euler rotation (x = pitch, y = yaw, z = roll).
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Current orientation as a quaternion.
    pub fn orientation(&self) -> Quat {
        quat_from_euler(self.rotation)
    }

    /// Current body position as reported by the scene.
    pub fn position(&self, scene: &dyn SceneCollider) -> Vec3 {
        scene.position(self.body)
    }

    /// World pose of the attached camera: the body position plus the
    /// camera offset rotated into world space.
    pub fn camera_pose(&self, scene: &dyn SceneCollider) -> Transform {
        let orientation = self.orientation();
        Transform::from_position_rotation(
            scene.position(self.body) + orientation * self.camera_offset,
            orientation,
        )
    }

    /// Unit view direction derived from the current rotation.
    pub fn direction(&self) -> Vec3 {
        self.orientation() * -Vec3::Z
    }

    /// Strafe basis: forward crossed with up, pointing right.
    pub fn side_direction(&self) -> Vec3 {
        self.direction().cross(Vec3::Y)
    }

    /// Planar intent velocity (x = forward, y = sidewise), units/s.
    pub fn planar_velocity(&self) -> Vec2 {
        self.planar_velocity
    }

    /// Vertical velocity, units/s. Negative is falling.
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Yaw rate, rad/s.
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Whether the body is in ground contact (majority of probe rays hit).
    pub fn touching(&self, scene: &dyn SceneCollider) -> bool {
        contact::grounded(scene, self.body)
    }

    /// Move by a world-space displacement through collision resolution.
    ///
    /// Displacements inside the dead zone are dropped without a move
    /// event. The fired event carries the actual, possibly truncated,
    /// delta.
    pub fn move_by(&mut self, scene: &mut dyn SceneCollider, displacement: Vec3) {
        if displacement.length_squared() < DEAD_ZONE {
            return;
        }
        let delta = scene.move_with_collisions(self.body, displacement);
        let position = scene.position(self.body);
        if let Some(on_move) = self.callbacks.on_move.as_mut() {
            on_move(&MoveEvent { position, delta });
        }
    }

    /// Move along the view direction.
    pub fn move_forward(&mut self, scene: &mut dyn SceneCollider, displacement: f32) {
        self.move_by(scene, self.direction() * displacement);
    }

    /// Move along the strafe basis.
    pub fn move_sidewise(&mut self, scene: &mut dyn SceneCollider, displacement: f32) {
        self.move_by(scene, self.side_direction() * displacement);
    }

    /// Move in the oriented plane: x along the view direction, y along
    /// the strafe basis.
    pub fn move_oriented(&mut self, scene: &mut dyn SceneCollider, displacement: Vec2) {
        self.move_by(
            scene,
            self.direction() * displacement.x + self.side_direction() * displacement.y,
        );
    }

    /// Move straight up (positive) or down (negative).
    pub fn move_up(&mut self, scene: &mut dyn SceneCollider, displacement: f32) {
        self.move_by(scene, Vec3::Y * displacement);
    }

    /// Set the forward/backward intent. Persists until changed.
    pub fn go_forward(&mut self, direction: ForwardDirection) {
        self.planar_velocity.x = direction.sign() * self.speed;
        if let Some(on_move_change) = self.callbacks.on_move_change.as_mut() {
            on_move_change(&MoveChangeEvent {
                forward: direction,
                sidewise: LateralDirection::None,
            });
        }
    }

    /// Set the strafe intent. Persists until changed.
    pub fn go_sidewise(&mut self, direction: LateralDirection) {
        self.planar_velocity.y = direction.sign() * self.speed;
        if let Some(on_move_change) = self.callbacks.on_move_change.as_mut() {
            on_move_change(&MoveChangeEvent {
                forward: ForwardDirection::None,
                sidewise: direction,
            });
        }
    }

    /// Set the yaw turn intent. Persists until changed.
    pub fn turn(&mut self, direction: TurnDirection) {
        self.angular_velocity = direction.sign() * self.rotation_speed;
        if let Some(on_turn_change) = self.callbacks.on_turn_change.as_mut() {
            on_turn_change(&TurnChangeEvent { direction });
        }
    }

    /// Apply an incremental yaw rotation. Positive turns left.
    pub fn rotate(&mut self, angle: f32) {
        if angle.abs() < DEAD_ZONE {
            return;
        }
        self.apply_rotation(Vec3::new(0.0, angle, 0.0));
    }

    /// Apply an incremental pitch rotation. Positive looks up.
    pub fn look_up(&mut self, angle: f32) {
        if angle.abs() < DEAD_ZONE {
            return;
        }
        self.apply_rotation(Vec3::new(angle, 0.0, 0.0));
    }

    fn apply_rotation(&mut self, delta: Vec3) {
        self.rotation += delta;
        if let Some(on_turn) = self.callbacks.on_turn.as_mut() {
            on_turn(&TurnEvent {
                rotation: self.rotation,
                delta,
            });
        }
    }

    /// Jump if in ground contact; a no-op in the air (no double jump).
    pub fn jump(&mut self, scene: &dyn SceneCollider) {
        if contact::grounded(scene, self.body) {
            self.vertical_velocity += self.jump_speed;
            log::debug!("jump impulse, vertical velocity {}", self.vertical_velocity);
            if let Some(on_jump) = self.callbacks.on_jump.as_mut() {
                on_jump();
            }
        }
    }

    /// Notify focus handlers that pointer capture was acquired.
    pub fn focus(&mut self) {
        if let Some(on_focus) = self.callbacks.on_focus.as_mut() {
            on_focus();
        }
    }

    /// Notify blur handlers that pointer capture was released.
    pub fn blur(&mut self) {
        if let Some(on_blur) = self.callbacks.on_blur.as_mut() {
            on_blur();
        }
    }

    /// Integrate one frame at timestamp `now`.
    ///
    /// The first call only records the timestamp, so startup cannot
    /// produce an unbounded elapsed-time spike. Subsequent calls apply,
    /// in order: the planar move, the vertical move, the yaw rotation,
    /// then gravity. Gravity runs after the moves, so a jump impulse is
    /// visible for at least one frame before contact can clamp it.
    pub fn tick(&mut self, scene: &mut dyn SceneCollider, now: Instant) {
        if let Some(last) = self.last_tick {
            let elapsed = now.saturating_duration_since(last).as_secs_f32();

            self.move_oriented(scene, self.planar_velocity * elapsed);
            self.move_up(scene, self.vertical_velocity * elapsed);
            self.rotate(self.angular_velocity * elapsed);

            self.apply_gravity(&*scene, elapsed);
        }
        self.last_tick = Some(now);
    }

    fn apply_gravity(&mut self, scene: &dyn SceneCollider, elapsed: f32) {
        self.vertical_velocity += self.gravity * elapsed;
        // Upward velocity (a fresh jump) must escape contact unclamped.
        if self.vertical_velocity < 0.0 && contact::grounded(scene, self.body) {
            self.vertical_velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubScene;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    fn controller(options: PlayerOptions) -> PlayerController {
        PlayerController::new(BodyHandle(1), options)
    }

    /// Sub-dead-zone displacements move nothing and fire no move event.
    #[test]
    fn move_by_dead_zone() {
        let moves = Rc::new(Cell::new(0));
        let counter = moves.clone();
        let mut scene = StubScene::airborne();
        let mut player = controller(
            PlayerOptions::new()
                .with_callbacks(PlayerCallbacks::new().on_move(move |_| counter.set(counter.get() + 1))),
        );

        let before = scene.position;
        player.move_by(&mut scene, Vec3::splat(1e-4));
        assert_eq!(scene.position, before);
        assert_eq!(moves.get(), 0);
    }

    /// A truncated move reports the actual delta, not the request.
    #[test]
    fn move_by_reports_actual_delta() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let mut scene = StubScene::airborne();
        scene.clip = 0.5;
        let mut player = controller(
            PlayerOptions::new()
                .with_callbacks(PlayerCallbacks::new().on_move(move |e| sink.borrow_mut().push(*e))),
        );

        player.move_by(&mut scene, Vec3::new(0.0, 0.0, 2.0));
        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert!((events[0].delta - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
        assert!((events[0].position - Vec3::new(0.0, 1.0, 1.0)).length() < 1e-6);
    }

    /// The first tick only records the timestamp; held intents must not
    /// integrate yet.
    #[test]
    fn first_tick_records_only() {
        let mut scene = StubScene::airborne();
        let mut player = controller(PlayerOptions::default());
        player.go_forward(ForwardDirection::Forward);

        let before = scene.position;
        player.tick(&mut scene, Instant::now());
        assert_eq!(scene.position, before);
        assert_eq!(player.vertical_velocity(), 0.0);
        assert_eq!(player.rotation(), Vec3::ZERO);
    }

    /// Airborne free fall: after 0.1 s the vertical velocity is exactly
    /// gravity * elapsed, and the position has not yet dropped (velocity
    /// applies on the following tick).
    #[test]
    fn gravity_accumulates_one_frame_behind() {
        let mut scene = StubScene::airborne();
        let mut player = controller(PlayerOptions::default());

        let t0 = Instant::now();
        player.tick(&mut scene, t0);
        player.tick(&mut scene, t0 + Duration::from_millis(100));
        assert!((player.vertical_velocity() - -1.0).abs() < 1e-5);
        assert_eq!(scene.position.y, 1.0);

        // The next tick applies the accumulated velocity: -1.0 * 0.1.
        player.tick(&mut scene, t0 + Duration::from_millis(200));
        assert!((scene.position.y - 0.9).abs() < 1e-5);
        assert!((player.vertical_velocity() - -2.0).abs() < 1e-5);
    }

    /// Forward intent at speed 5 covers ~1 unit along the view direction
    /// over a 0.2 s tick.
    #[test]
    fn forward_intent_moves_along_view_direction() {
        let mut scene = StubScene::airborne();
        let mut player = controller(PlayerOptions::default());
        player.go_forward(ForwardDirection::Forward);

        let t0 = Instant::now();
        player.tick(&mut scene, t0);
        player.tick(&mut scene, t0 + Duration::from_millis(200));

        let displacement = scene.position - Vec3::new(0.0, 1.0, 0.0);
        assert!((displacement - -Vec3::Z).length() < 1e-4, "{displacement}");
    }

    /// Jump off the ground adds exactly `jump_speed` and notifies once.
    #[test]
    fn jump_from_ground() {
        let jumps = Rc::new(Cell::new(0));
        let counter = jumps.clone();
        let scene = StubScene::grounded();
        let mut player = controller(
            PlayerOptions::new()
                .with_callbacks(PlayerCallbacks::new().on_jump(move || counter.set(counter.get() + 1))),
        );

        player.jump(&scene);
        assert_eq!(player.vertical_velocity(), 5.0);
        assert_eq!(jumps.get(), 1);
    }

    /// Jump in the air is a no-op: no velocity change, no event.
    #[test]
    fn jump_airborne_is_noop() {
        let jumps = Rc::new(Cell::new(0));
        let counter = jumps.clone();
        let scene = StubScene::airborne();
        let mut player = controller(
            PlayerOptions::new()
                .with_callbacks(PlayerCallbacks::new().on_jump(move || counter.set(counter.get() + 1))),
        );

        player.jump(&scene);
        assert_eq!(player.vertical_velocity(), 0.0);
        assert_eq!(jumps.get(), 0);
    }

    /// Grounded downward velocity clamps to zero instead of sinking.
    #[test]
    fn grounded_downward_velocity_clamps_to_zero() {
        let mut scene = StubScene::grounded();
        let mut player = controller(PlayerOptions::default());

        let t0 = Instant::now();
        player.tick(&mut scene, t0);
        player.tick(&mut scene, t0 + Duration::from_millis(100));
        assert_eq!(player.vertical_velocity(), 0.0);
        assert_eq!(scene.position.y, 1.0);
    }

    /// A fresh jump impulse survives the grounded clamp (still positive
    /// when gravity runs).
    #[test]
    fn jump_impulse_escapes_grounded_clamp() {
        let mut scene = StubScene::grounded();
        let mut player = controller(PlayerOptions::default());

        let t0 = Instant::now();
        player.tick(&mut scene, t0);
        player.jump(&scene);
        player.tick(&mut scene, t0 + Duration::from_millis(100));
        // 5.0 + gravity * 0.1 = 4.0; positive, so no clamp even grounded.
        assert!((player.vertical_velocity() - 4.0).abs() < 1e-5);
        assert!(scene.position.y > 1.0);
    }

    /// Turn round-trip: LEFT then NONE ends with zero yaw rate and fires
    /// two turn-change events in order.
    #[test]
    fn turn_round_trip() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let mut player = controller(
            PlayerOptions::new().with_callbacks(
                PlayerCallbacks::new().on_turn_change(move |e| sink.borrow_mut().push(e.direction)),
            ),
        );

        player.turn(TurnDirection::Left);
        assert_eq!(player.angular_velocity(), 1.0);
        player.turn(TurnDirection::None);
        assert_eq!(player.angular_velocity(), 0.0);
        assert_eq!(
            *events.borrow(),
            vec![TurnDirection::Left, TurnDirection::None]
        );
    }

    /// Intent setters report only their own axis; the other axis reads
    /// NONE in the composed event.
    #[test]
    fn move_change_reports_single_axis() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let mut player = controller(
            PlayerOptions::new().with_callbacks(
                PlayerCallbacks::new().on_move_change(move |e| sink.borrow_mut().push(*e)),
            ),
        );

        player.go_forward(ForwardDirection::Forward);
        player.go_sidewise(LateralDirection::Left);
        let events = events.borrow();
        assert_eq!(events[0].forward, ForwardDirection::Forward);
        assert_eq!(events[0].sidewise, LateralDirection::None);
        assert_eq!(events[1].forward, ForwardDirection::None);
        assert_eq!(events[1].sidewise, LateralDirection::Left);
    }

    /// Mouse-look rotation fires a turn event with the resulting rotation
    /// and the applied delta.
    #[test]
    fn rotate_fires_turn_event() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let mut player = controller(
            PlayerOptions::new()
                .with_callbacks(PlayerCallbacks::new().on_turn(move |e| sink.borrow_mut().push(*e))),
        );

        player.rotate(0.5);
        player.look_up(-0.25);
        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].delta, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(events[1].delta, Vec3::new(-0.25, 0.0, 0.0));
        assert_eq!(events[1].rotation, Vec3::new(-0.25, 0.5, 0.0));
    }

    /// Rotations inside the dead zone fire nothing.
    #[test]
    fn rotate_dead_zone() {
        let turns = Rc::new(Cell::new(0));
        let counter = turns.clone();
        let mut player = controller(
            PlayerOptions::new()
                .with_callbacks(PlayerCallbacks::new().on_turn(move |_| counter.set(counter.get() + 1))),
        );

        player.rotate(1e-7);
        assert_eq!(turns.get(), 0);
        assert_eq!(player.rotation(), Vec3::ZERO);
    }

    /// Turn intent integrates into yaw over ticks.
    #[test]
    fn turn_intent_integrates_yaw() {
        let mut scene = StubScene::airborne();
        let mut player = controller(PlayerOptions::default());
        player.turn(TurnDirection::Left);

        let t0 = Instant::now();
        player.tick(&mut scene, t0);
        player.tick(&mut scene, t0 + Duration::from_millis(500));
        assert!((player.rotation().y - 0.5).abs() < 1e-5);
    }

    /// The camera pose composes the body position with the rotated offset.
    #[test]
    fn camera_pose_applies_offset() {
        let scene = StubScene::airborne();
        let player = controller(PlayerOptions::new().with_camera_offset(Vec3::new(0.0, 0.5, 0.0)));

        let pose = player.camera_pose(&scene);
        assert!((pose.position - Vec3::new(0.0, 1.5, 0.0)).length() < 1e-6);
    }
}
