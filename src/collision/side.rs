use bitflags::bitflags;

use crate::math::vec2::Vec2;

/// Which edge pairing produced a contact, seen from the first body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionSide {
    /// First body on the left: its right edge meets the second body's left edge.
    LeftRight,
    /// First body on the right: its left edge meets the second body's right edge.
    RightLeft,
    /// First body above (smaller y): its bottom edge meets the second body's top edge.
    TopBottom,
    /// First body below: its top edge meets the second body's bottom edge.
    BottomTop,
}

/// Coordinate axis of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl CollisionSide {
    pub fn axis(self) -> Axis {
        match self {
            CollisionSide::LeftRight | CollisionSide::RightLeft => Axis::Horizontal,
            CollisionSide::TopBottom | CollisionSide::BottomTop => Axis::Vertical,
        }
    }

    /// Unit step that moves the first body towards the second one.
    pub fn approach(self) -> Vec2 {
        match self {
            CollisionSide::LeftRight => Vec2::new(1.0, 0.0),
            CollisionSide::RightLeft => Vec2::new(-1.0, 0.0),
            CollisionSide::TopBottom => Vec2::new(0.0, 1.0),
            CollisionSide::BottomTop => Vec2::new(0.0, -1.0),
        }
    }
}

bitflags! {
    /// Boundary edges a body has crossed, reported by `CollisionBounds`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CollisionDetails: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const TOP = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_axis_and_approach() {
        assert_eq!(CollisionSide::LeftRight.axis(), Axis::Horizontal);
        assert_eq!(CollisionSide::BottomTop.axis(), Axis::Vertical);
        assert_eq!(CollisionSide::RightLeft.approach(), Vec2::new(-1.0, 0.0));
        assert_eq!(CollisionSide::TopBottom.approach(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_details_set_operations() {
        let details = CollisionDetails::LEFT | CollisionDetails::BOTTOM;
        assert!(details.contains(CollisionDetails::LEFT));
        assert!(!details.contains(CollisionDetails::TOP));
        assert!(CollisionDetails::default().is_empty());
    }
}
