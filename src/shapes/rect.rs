// Axis-aligned rectangle used as the collision shape of a body.

use crate::math::vec2::Vec2;

/// An axis-aligned rectangle given by its top-left corner and size.
///
/// Width and height are expected to be non-negative; a negative size gives
/// meaningless comparison results rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Shape {
    /// Creates a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Shape { x, y, width, height }
    }

    /// Overwrites position and size in place.
    pub fn set_bounds(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    /// Moves the top-left corner without touching the size.
    pub fn set_location(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Top-left corner.
    pub fn location(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Shape {
        Shape::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Checks if this rectangle overlaps another.
    /// Shared edges do not count: two boxes that only touch are not intersecting.
    pub fn intersects(&self, other: &Shape) -> bool {
        let x_overlap = self.right() > other.left() && self.left() < other.right();
        let y_overlap = self.bottom() > other.top() && self.top() < other.bottom();
        x_overlap && y_overlap
    }

    /// True when `other` lies entirely inside this rectangle (edges included).
    pub fn contains_shape(&self, other: &Shape) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}
