use crate::error::CollisionError;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::shapes::Shape;
use crate::world::scene::{GroupHandle, Scene};

use super::config::ShapeFn;
use super::listener::{BoundsEvent, BoundsListener};
use super::manager::CollisionManager;
use super::side::CollisionDetails;

/// Reports bodies of a group that stick out of a fixed rectangle.
///
/// Only bodies outside the boundary on at least one edge fire; a body fully
/// inside never does. Registered with no second group.
pub struct CollisionBounds {
    boundary: Shape,
    listeners: Vec<Box<dyn BoundsListener>>,
    shape: ShapeFn,
}

impl CollisionBounds {
    pub fn new(boundary: Shape, listeners: Vec<Box<dyn BoundsListener>>) -> Result<Self, CollisionError> {
        if listeners.is_empty() {
            return Err(CollisionError::NoListeners);
        }
        Ok(CollisionBounds {
            boundary,
            listeners,
            shape: Body::default_shape,
        })
    }

    /// Uses `shape` instead of the body's default collision box.
    pub fn with_shape(mut self, shape: ShapeFn) -> Self {
        self.shape = shape;
        self
    }

    pub fn boundary(&self) -> &Shape {
        &self.boundary
    }

    pub fn set_boundary(&mut self, boundary: Shape) {
        self.boundary = boundary;
    }

    /// Edges of the boundary that `shape` extends past.
    pub fn crossed_sides(&self, shape: &Shape) -> CollisionDetails {
        let b = &self.boundary;
        let mut details = CollisionDetails::empty();
        details.set(CollisionDetails::LEFT, shape.left() < b.left());
        details.set(CollisionDetails::TOP, shape.top() < b.top());
        details.set(CollisionDetails::RIGHT, shape.right() > b.right());
        details.set(CollisionDetails::BOTTOM, shape.bottom() > b.bottom());
        details
    }

    /// Checks every active member of `group` against the current boundary.
    pub fn check_group(&mut self, scene: &mut Scene, group: GroupHandle) {
        let Some(members) = scene.group(group).filter(|g| g.is_active()).map(|g| g.members().to_vec()) else {
            return;
        };

        for body in members {
            let Some(shape) = scene.body(body).filter(|b| b.is_active()).and_then(self.shape) else {
                continue;
            };
            let details = self.crossed_sides(&shape);
            if details.is_empty() {
                continue;
            }

            let event = BoundsEvent {
                group,
                other: None,
                body,
                details,
            };
            log::trace!("{body:?} out of bounds: {details:?}");
            for listener in &mut self.listeners {
                listener.out_of_bounds(scene, &event);
            }
        }
    }

    /// Moves `body` so its shape is back inside the boundary on the `details` edges.
    ///
    /// A shape larger than the boundary ends up aligned with the left or top edge.
    pub fn push_inside(&self, body: &mut Body, details: CollisionDetails) {
        let Some(shape) = (self.shape)(body) else {
            return;
        };
        let b = &self.boundary;
        let mut offset = Vec2::ZERO;
        if details.contains(CollisionDetails::RIGHT) {
            offset.x = b.right() - shape.right();
        }
        if details.contains(CollisionDetails::LEFT) {
            offset.x = b.left() - shape.left();
        }
        if details.contains(CollisionDetails::BOTTOM) {
            offset.y = b.bottom() - shape.bottom();
        }
        if details.contains(CollisionDetails::TOP) {
            offset.y = b.top() - shape.top();
        }
        body.force_position(body.position() + offset);
    }
}

impl CollisionManager for CollisionBounds {
    fn check(&mut self, scene: &mut Scene, group_a: GroupHandle, _group_b: Option<GroupHandle>) {
        self.check_group(scene, group_a);
    }
}
