//! Sampled input state
//!
//! The host's input adapter maintains this mapping from logical directions to
//! "held" booleans; the simulation samples it once per tick. Directions are
//! independent and non-exclusive (opposites cancel).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Held state of the four movement directions for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Movement direction as a unit (or zero) vector.
    ///
    /// Diagonals are normalized so holding two directions moves at the same
    /// speed as holding one. Y grows downward to match field coordinates.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}
