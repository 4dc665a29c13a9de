use crate::world::scene::{BodyHandle, GroupHandle, Scene};

use super::contact::ContactResult;
use super::side::CollisionDetails;

/// One confirmed collision between a source body (first group) and a target body (second group).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub source: BodyHandle,
    pub target: BodyHandle,
    /// Revert positions and side; `None` from plain overlap managers.
    pub contact: Option<ContactResult>,
}

/// A body found outside a `CollisionBounds` boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsEvent {
    pub group: GroupHandle,
    /// Always `None`: a boundary check has no second group.
    pub other: Option<GroupHandle>,
    pub body: BodyHandle,
    pub details: CollisionDetails,
}

/// Receives body-to-body collisions.
///
/// Called synchronously in the middle of a scan; it may move or deactivate
/// bodies, and the scan takes that into account for the rest of the tick.
pub trait CollisionListener {
    fn collided(&mut self, scene: &mut Scene, event: &CollisionEvent);
}

impl<F> CollisionListener for F
where
    F: FnMut(&mut Scene, &CollisionEvent),
{
    fn collided(&mut self, scene: &mut Scene, event: &CollisionEvent) {
        self(scene, event)
    }
}

/// Receives boundary crossings.
pub trait BoundsListener {
    fn out_of_bounds(&mut self, scene: &mut Scene, event: &BoundsEvent);
}

impl<F> BoundsListener for F
where
    F: FnMut(&mut Scene, &BoundsEvent),
{
    fn out_of_bounds(&mut self, scene: &mut Scene, event: &BoundsEvent) {
        self(scene, event)
    }
}
