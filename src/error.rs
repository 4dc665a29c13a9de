//! Error type shared by the managers and the scene.

use thiserror::Error;

/// Errors raised when building managers or editing a scene.
///
/// Per-tick collision checks never fail: missing shapes, inactive bodies and
/// non-converging searches all mean "no collision".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// A manager was built without anyone to notify.
    #[error("collision manager needs at least one listener")]
    NoListeners,

    /// Adjacency tolerance must be positive and strictly larger than the bailout.
    #[error("invalid tolerances: adjacency {adjacency} must exceed bailout {bailout} (both > 0)")]
    InvalidTolerances { adjacency: f64, bailout: f64 },

    /// The group handle no longer refers to a live group.
    #[error("unknown group handle")]
    UnknownGroup,

    /// The body handle no longer refers to a live body.
    #[error("unknown body handle")]
    UnknownBody,
}
