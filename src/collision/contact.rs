use crate::math::vec2::Vec2;
use crate::objects::body::Body;

use super::side::CollisionSide;

/// Where two bodies were when they last did not overlap (or exactly touched).
///
/// Positions are body positions, not shape positions, so a listener can feed
/// them straight back into the bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactResult {
    /// Revert position of the first (source) body.
    pub position_a: Vec2,
    /// Revert position of the second (target) body.
    pub position_b: Vec2,
    pub side: CollisionSide,
}

impl ContactResult {
    /// Moves the source body back to its contact position.
    pub fn revert_source(&self, body: &mut Body) {
        body.force_position(self.position_a);
    }

    /// Moves the target body back to its contact position.
    pub fn revert_target(&self, body: &mut Body) {
        body.force_position(self.position_b);
    }
}
