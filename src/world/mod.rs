pub mod play_field;
pub mod registry;
pub mod scene;

pub use play_field::PlayField;
pub use registry::CollisionRegistry;
pub use scene::{BodyHandle, GroupHandle, Scene};
