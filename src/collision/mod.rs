pub mod bounds;
pub mod config;
pub mod contact;
pub mod group;
pub mod listener;
pub mod manager;
pub mod pixel;
pub mod precise;
pub mod resolution;
pub mod side;
pub mod tester;

// Re-export key types
pub use bounds::CollisionBounds;
pub use config::{CollisionConfig, ShapeFn, SortPolicy, Tolerances};
pub use contact::ContactResult;
pub use group::{BasicCollisionGroup, CollisionGroup, PreciseCollisionGroup};
pub use listener::{BoundsEvent, BoundsListener, CollisionEvent, CollisionListener};
pub use manager::CollisionManager;
pub use precise::SweptTester;
pub use resolution::{motion_order, Aggregation, Resolution};
pub use side::{Axis, CollisionDetails, CollisionSide};
pub use tester::{ContactTester, Footprint, OverlapTester};
