//! Semantic controller events and their handler slots.

use glam::Vec3;

use crate::direction::{ForwardDirection, LateralDirection, TurnDirection};

/// Fired after a collision-resolved move. `delta` is the actual
/// displacement applied, which may be shorter than requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveEvent {
    pub position: Vec3,
    pub delta: Vec3,
}

/// Fired when a movement intent changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChangeEvent {
    pub forward: ForwardDirection,
    pub sidewise: LateralDirection,
}

/// Fired after an applied rotation. `rotation` is the resulting Euler
/// rotation (x = pitch, y = yaw, z = roll); `delta` the change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnEvent {
    pub rotation: Vec3,
    pub delta: Vec3,
}

/// Fired when the turn intent changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnChangeEvent {
    pub direction: TurnDirection,
}

type Handler<E> = Box<dyn FnMut(&E)>;
type Notify = Box<dyn FnMut()>;

/// Optional handler slots for controller notifications.
///
/// Every slot is fire-and-forget: the controller invokes it and ignores
/// anything it does. An empty slot costs nothing.
#[derive(Default)]
pub struct PlayerCallbacks {
    pub on_move: Option<Handler<MoveEvent>>,
    pub on_move_change: Option<Handler<MoveChangeEvent>>,
    pub on_turn: Option<Handler<TurnEvent>>,
    pub on_turn_change: Option<Handler<TurnChangeEvent>>,
    pub on_jump: Option<Notify>,
    pub on_focus: Option<Notify>,
    pub on_blur: Option<Notify>,
}

impl PlayerCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_move(mut self, handler: impl FnMut(&MoveEvent) + 'static) -> Self {
        self.on_move = Some(Box::new(handler));
        self
    }

    pub fn on_move_change(mut self, handler: impl FnMut(&MoveChangeEvent) + 'static) -> Self {
        self.on_move_change = Some(Box::new(handler));
        self
    }

    pub fn on_turn(mut self, handler: impl FnMut(&TurnEvent) + 'static) -> Self {
        self.on_turn = Some(Box::new(handler));
        self
    }

    pub fn on_turn_change(mut self, handler: impl FnMut(&TurnChangeEvent) + 'static) -> Self {
        self.on_turn_change = Some(Box::new(handler));
        self
    }

    pub fn on_jump(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_jump = Some(Box::new(handler));
        self
    }

    pub fn on_focus(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(handler));
        self
    }
}

impl std::fmt::Debug for PlayerCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerCallbacks")
            .field("on_move", &self.on_move.is_some())
            .field("on_move_change", &self.on_move_change.is_some())
            .field("on_turn", &self.on_turn.is_some())
            .field("on_turn_change", &self.on_turn_change.is_some())
            .field("on_jump", &self.on_jump.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .finish()
    }
}
