use image::RgbaImage;

use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::shapes::Shape;

use super::contact::ContactResult;
use super::pixel::pixel_collide;

/// A body's shape together with the image drawn alongside it.
///
/// Moving a footprint moves both, so hypothetical positions along a sweep can
/// be tested without touching the body.
#[derive(Debug, Clone, Copy)]
pub struct Footprint<'a> {
    pub shape: Shape,
    pub image: Option<&'a RgbaImage>,
    pub image_origin: Vec2,
}

impl<'a> Footprint<'a> {
    pub fn new(body: &'a Body, shape: Shape) -> Self {
        Footprint {
            shape,
            image: body.image(),
            image_origin: body.position(),
        }
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Footprint {
            shape: self.shape.translated(offset),
            image: self.image,
            image_origin: self.image_origin + offset,
        }
    }
}

/// Decides whether two bodies collide this tick.
pub trait ContactTester {
    /// Tests one pair. `shape_a` and `shape_b` are the bodies' current shapes.
    fn test(&mut self, body_a: &Body, body_b: &Body, shape_a: &Shape, shape_b: &Shape) -> bool;

    /// Contact computed by the last `test` that returned `true`.
    fn contact(&self) -> Option<ContactResult>;
}

/// Plain overlap at the current positions, optionally confirmed per pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapTester {
    pixel_perfect: bool,
}

impl OverlapTester {
    pub fn new(pixel_perfect: bool) -> Self {
        OverlapTester { pixel_perfect }
    }

    pub fn is_pixel_perfect(&self) -> bool {
        self.pixel_perfect
    }

    /// Rectangle test first; the pixel scan only runs on rectangle overlap.
    /// Without an image on both sides the rectangle result stands.
    pub fn overlaps(&self, a: &Footprint<'_>, b: &Footprint<'_>) -> bool {
        if !a.shape.intersects(&b.shape) {
            return false;
        }
        match (self.pixel_perfect, a.image, b.image) {
            (true, Some(image_a), Some(image_b)) => pixel_collide(a.image_origin, image_a, b.image_origin, image_b),
            _ => true,
        }
    }
}

impl ContactTester for OverlapTester {
    fn test(&mut self, body_a: &Body, body_b: &Body, shape_a: &Shape, shape_b: &Shape) -> bool {
        self.overlaps(&Footprint::new(body_a, *shape_a), &Footprint::new(body_b, *shape_b))
    }

    fn contact(&self) -> Option<ContactResult> {
        None
    }
}
