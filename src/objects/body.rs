use std::sync::Arc;

use image::RgbaImage;

use crate::math::vec2::Vec2;
use crate::shapes::Shape;

/// A moving, axis-aligned game object as seen by the collision managers.
///
/// The implicit velocity for the current tick is `position - previous_position`;
/// the managers never look at `velocity`, which only feeds the integrator.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Vec2,
    previous_position: Vec2,
    /// Movement per unit of elapsed time, applied by the integrator.
    pub velocity: Vec2,
    pub width: f64,
    pub height: f64,
    /// Inactive bodies are skipped by every manager.
    pub active: bool,
    /// Collision box relative to `position`. `None` opts the body out of collision checks.
    pub collision_box: Option<Shape>,
    /// Optional image used by pixel-exact tests, drawn with its top-left at `position`.
    pub image: Option<Arc<RgbaImage>>,
}

impl Body {
    /// Creates an active body whose collision box covers its whole size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let position = Vec2::new(x, y);
        Body {
            position,
            previous_position: position,
            velocity: Vec2::ZERO,
            width,
            height,
            active: true,
            collision_box: Some(Shape::new(0.0, 0.0, width, height)),
            image: None,
        }
    }

    /// Creates a body sized after `image`, for pixel-exact checks.
    pub fn with_image(x: f64, y: f64, image: Arc<RgbaImage>) -> Self {
        let (w, h) = image.dimensions();
        let mut body = Body::new(x, y, f64::from(w), f64::from(h));
        body.image = Some(image);
        body
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn previous_position(&self) -> Vec2 {
        self.previous_position
    }

    /// Movement made during the current tick.
    pub fn displacement(&self) -> Vec2 {
        self.position - self.previous_position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_deref()
    }

    /// Teleports the body. Both positions are set, so the tick has no displacement.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.previous_position = position;
    }

    /// Moves the body, remembering where it started this tick.
    pub fn move_by(&mut self, delta: Vec2) {
        self.previous_position = self.position;
        self.position += delta;
    }

    /// Changes only the current position. Listeners use this to revert a body
    /// to its contact position without losing the tick's starting point.
    pub fn force_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Collision box in world coordinates, if the body takes part in collisions.
    pub fn default_shape(&self) -> Option<Shape> {
        self.collision_box.map(|local| local.translated(self.position))
    }
}
