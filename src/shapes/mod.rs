pub mod rect;

// Rectangles are the only narrow-phase shape.
pub use rect::Shape;
