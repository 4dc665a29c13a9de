use crate::objects::body::Body;

/// Advances a body by its velocity for one tick.
///
/// The previous position is always refreshed, even for a body at rest, so a
/// stale displacement never survives into the next collision pass.
pub fn integrate(body: &mut Body, elapsed: f64) {
    if !body.active {
        // Inactive bodies are frozen, and so is their displacement.
        return;
    }
    body.move_by(body.velocity * elapsed);
}
