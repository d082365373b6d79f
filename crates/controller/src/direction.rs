//! Three-valued movement and turn intents.
//!
//! Intents are level-triggered: a direction stays set until replaced.
//! Arithmetic never relies on enum discriminants; every enum carries an
//! explicit `sign()` mapping onto the velocity axis it drives.

/// Forward/backward movement intent along the view direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForwardDirection {
    #[default]
    None,
    Forward,
    Backward,
}

impl ForwardDirection {
    /// Sign multiplier on the forward axis.
    pub fn sign(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Strafe intent perpendicular to the view direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LateralDirection {
    #[default]
    None,
    Left,
    Right,
}

impl LateralDirection {
    /// Sign multiplier on the side axis. The side basis vector points
    /// right (forward x up), so left is negative.
    pub fn sign(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Yaw turn intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TurnDirection {
    #[default]
    None,
    Left,
    Right,
}

impl TurnDirection {
    /// Sign multiplier on yaw rate. Positive yaw turns left in a
    /// right-handed, -Z-forward frame.
    pub fn sign(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}
