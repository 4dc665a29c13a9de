//! Continuous collision detection for axis-aligned 2D game objects.
//!
//! Bodies live in a [`Scene`] and are grouped into [`Group`]s. Collision
//! managers registered in a [`CollisionRegistry`] check pairs of groups once
//! per tick and report contacts to listeners, which may move or deactivate
//! bodies in response.

pub mod collision;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{
    BasicCollisionGroup, BoundsEvent, BoundsListener, CollisionBounds, CollisionConfig, CollisionDetails,
    CollisionEvent, CollisionListener, CollisionManager, CollisionSide, ContactResult, PreciseCollisionGroup,
    Tolerances,
};
pub use error::CollisionError;
pub use math::vec2::Vec2;
pub use objects::{Body, Group};
pub use shapes::Shape;
pub use world::{BodyHandle, CollisionRegistry, GroupHandle, PlayField, Scene};
