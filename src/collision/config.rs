use crate::error::CollisionError;
use crate::objects::body::Body;
use crate::shapes::Shape;

/// Returns the shape a body collides with this tick, `None` to opt out.
pub type ShapeFn = fn(&Body) -> Option<Shape>;

/// Decides, per source body, whether its candidates are sorted before resolution.
pub type SortPolicy = fn(&Body) -> bool;

/// Numerical limits of the time-of-impact search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    adjacency: f64,
    bailout: f64,
}

impl Tolerances {
    /// Distance under which two shapes count as touching.
    pub const DEFAULT_ADJACENCY: f64 = 1e-4;
    /// Bisection stops once the bracket, scaled by relative speed, is this small.
    pub const DEFAULT_BAILOUT: f64 = 1e-6;

    /// Validated constructor: both positive, adjacency strictly above bailout.
    pub fn new(adjacency: f64, bailout: f64) -> Result<Self, CollisionError> {
        if !(bailout > 0.0 && adjacency > bailout) {
            return Err(CollisionError::InvalidTolerances { adjacency, bailout });
        }
        Ok(Tolerances { adjacency, bailout })
    }

    pub fn adjacency(&self) -> f64 {
        self.adjacency
    }

    pub fn bailout(&self) -> f64 {
        self.bailout
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            adjacency: Self::DEFAULT_ADJACENCY,
            bailout: Self::DEFAULT_BAILOUT,
        }
    }
}

/// Per-manager settings.
///
/// `shape_a` and `shape_b` are the shape getters for the first and second
/// group. Because they may differ, `(A, B)` and `(B, A)` are distinct pairs.
#[derive(Clone, Copy)]
pub struct CollisionConfig {
    /// Confirm rectangle overlaps against image alpha.
    pub pixel_perfect: bool,
    pub tolerances: Tolerances,
    pub sort_policy: SortPolicy,
    pub shape_a: ShapeFn,
    pub shape_b: ShapeFn,
}

/// Default sort policy: always sort.
pub fn always_sort(_source: &Body) -> bool {
    true
}

impl CollisionConfig {
    pub fn new() -> Self {
        CollisionConfig {
            pixel_perfect: false,
            tolerances: Tolerances::default(),
            sort_policy: always_sort,
            shape_a: Body::default_shape,
            shape_b: Body::default_shape,
        }
    }

    pub fn pixel_perfect(mut self, enabled: bool) -> Self {
        self.pixel_perfect = enabled;
        self
    }

    pub fn tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    pub fn sort_policy(mut self, policy: SortPolicy) -> Self {
        self.sort_policy = policy;
        self
    }

    pub fn shapes(mut self, shape_a: ShapeFn, shape_b: ShapeFn) -> Self {
        self.shape_a = shape_a;
        self.shape_b = shape_b;
        self
    }
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerances() {
        let tol = Tolerances::default();
        assert_eq!(tol.adjacency(), 1e-4);
        assert_eq!(tol.bailout(), 1e-6);
        assert!(tol.adjacency() > tol.bailout());
    }

    #[test]
    fn test_tolerances_validation() {
        assert!(Tolerances::new(1e-3, 1e-5).is_ok());
        assert_eq!(
            Tolerances::new(1e-6, 1e-6),
            Err(CollisionError::InvalidTolerances { adjacency: 1e-6, bailout: 1e-6 })
        );
        assert!(Tolerances::new(1e-4, 0.0).is_err());
        assert!(Tolerances::new(f64::NAN, 1e-6).is_err());
    }

    #[test]
    fn test_config_builder() {
        fn never(_: &Body) -> bool {
            false
        }
        fn no_shape(_: &Body) -> Option<Shape> {
            None
        }
        let config = CollisionConfig::new().pixel_perfect(true).sort_policy(never).shapes(no_shape, Body::default_shape);
        let body = Body::new(0.0, 0.0, 1.0, 1.0);

        assert!(config.pixel_perfect);
        assert!(!(config.sort_policy)(&body));
        assert!((config.shape_a)(&body).is_none());
        assert!((config.shape_b)(&body).is_some());
        assert!((CollisionConfig::default().sort_policy)(&body));
    }
}
