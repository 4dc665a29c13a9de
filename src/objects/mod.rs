pub mod body;
pub mod group;

pub use body::Body;
pub use group::Group;
