//! Pairwise collision managers between two groups of bodies.
//!
//! A `CollisionGroup` combines a contact tester (plain overlap or swept) with
//! a resolution strategy (fire per pair, or aggregate and resolve in motion
//! order). The three classic flavours are built by `basic`, `precise` and
//! `advance`.

use crate::error::CollisionError;
use crate::objects::body::Body;
use crate::shapes::Shape;
use crate::world::scene::{BodyHandle, GroupHandle, Scene};

use super::config::{CollisionConfig, ShapeFn};
use super::contact::ContactResult;
use super::listener::{CollisionEvent, CollisionListener};
use super::manager::CollisionManager;
use super::precise::SweptTester;
use super::resolution::{motion_order, Aggregation, Resolution};
use super::tester::{ContactTester, OverlapTester};

/// Overlap at current positions, no contact data.
pub type BasicCollisionGroup = CollisionGroup<OverlapTester>;

/// Swept test with contact positions; `advance` adds ordered resolution.
pub type PreciseCollisionGroup = CollisionGroup<SweptTester>;

/// Checks every active body of one group against every active body of another.
pub struct CollisionGroup<T: ContactTester> {
    tester: T,
    resolution: Resolution,
    config: CollisionConfig,
    listeners: Vec<Box<dyn CollisionListener>>,
}

impl CollisionGroup<OverlapTester> {
    /// Cheapest manager: rectangle overlap, optionally confirmed per pixel.
    pub fn basic(config: CollisionConfig, listeners: Vec<Box<dyn CollisionListener>>) -> Result<Self, CollisionError> {
        Self::with_tester(OverlapTester::new(config.pixel_perfect), Resolution::PerPair, config, listeners)
    }
}

impl CollisionGroup<SweptTester> {
    /// Swept time-of-impact test, firing as pairs are found.
    pub fn precise(config: CollisionConfig, listeners: Vec<Box<dyn CollisionListener>>) -> Result<Self, CollisionError> {
        let tester = SweptTester::new(config.pixel_perfect, config.tolerances);
        Self::with_tester(tester, Resolution::PerPair, config, listeners)
    }

    /// Swept test with one-to-many aggregation and motion-ordered resolution.
    pub fn advance(config: CollisionConfig, listeners: Vec<Box<dyn CollisionListener>>) -> Result<Self, CollisionError> {
        let tester = SweptTester::new(config.pixel_perfect, config.tolerances);
        Self::with_tester(tester, Resolution::Ordered(Aggregation::new()), config, listeners)
    }

    /// Runs the swept test on one pair; see `SweptTester::is_collide`.
    pub fn is_collide(&mut self, body_a: &Body, body_b: &Body, shape_a: &Shape, shape_b: &Shape) -> bool {
        self.tester.is_collide(body_a, body_b, shape_a, shape_b)
    }
}

impl<T: ContactTester> CollisionGroup<T> {
    /// Builds a manager from explicit parts. Fails without listeners.
    pub fn with_tester(
        tester: T,
        resolution: Resolution,
        config: CollisionConfig,
        listeners: Vec<Box<dyn CollisionListener>>,
    ) -> Result<Self, CollisionError> {
        if listeners.is_empty() {
            return Err(CollisionError::NoListeners);
        }
        Ok(CollisionGroup {
            tester,
            resolution,
            config,
            listeners,
        })
    }

    pub fn tester(&self) -> &T {
        &self.tester
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Contact of the last confirmed pair, for testing and debugging.
    pub fn contact(&self) -> Option<ContactResult> {
        self.tester.contact()
    }

    /// Pairs gathered during the last check. `None` for per-pair managers.
    pub fn aggregation(&self) -> Option<&Aggregation> {
        match &self.resolution {
            Resolution::Ordered(aggregation) => Some(aggregation),
            Resolution::PerPair => None,
        }
    }

    /// Runs one tick of checks between `group_a` and `group_b`.
    pub fn check_groups(&mut self, scene: &mut Scene, group_a: GroupHandle, group_b: GroupHandle) {
        if let Resolution::Ordered(aggregation) = &mut self.resolution {
            aggregation.clear();
        }

        let (Some(a), Some(b)) = (scene.group(group_a), scene.group(group_b)) else {
            return;
        };
        if !a.is_active() || !b.is_active() {
            return;
        }
        // Listeners may edit group membership; the scan works on this tick's snapshot.
        let members_a = a.members().to_vec();
        let members_b = b.members().to_vec();

        if matches!(self.resolution, Resolution::PerPair) {
            self.scan_per_pair(scene, &members_a, &members_b);
        } else {
            self.scan_ordered(scene, &members_a, &members_b);
        }
    }

    fn scan_per_pair(&mut self, scene: &mut Scene, members_a: &[BodyHandle], members_b: &[BodyHandle]) {
        for &source in members_a {
            let Some(mut shape_a) = active_shape(scene, source, self.config.shape_a) else {
                continue;
            };
            for &target in members_b {
                if source == target {
                    continue;
                }
                if !self.test_pair(scene, source, target, &shape_a) {
                    continue;
                }
                self.fire(scene, source, target);

                // The listener may have moved or deactivated the source.
                match active_shape(scene, source, self.config.shape_a) {
                    Some(shape) => shape_a = shape,
                    None => break,
                }
            }
        }
    }

    fn scan_ordered(&mut self, scene: &mut Scene, members_a: &[BodyHandle], members_b: &[BodyHandle]) {
        let mut aggregation = Aggregation::new();
        for &source in members_a {
            let Some(shape_a) = active_shape(scene, source, self.config.shape_a) else {
                continue;
            };
            for &target in members_b {
                if source != target && self.test_pair(scene, source, target, &shape_a) {
                    aggregation.push(source, target);
                }
            }
        }

        for (source, mut candidates) in aggregation.runs() {
            if candidates.len() == 1 {
                // Fires only if the re-test still confirms; an earlier run may have moved either body.
                self.resolve(scene, source, candidates[0]);
                continue;
            }

            if let Some(source_body) = scene.body(source) {
                if (self.config.sort_policy)(source_body) {
                    candidates.sort_by(|x, y| match (scene.body(*x), scene.body(*y)) {
                        (Some(x), Some(y)) => motion_order(source_body, x, y),
                        _ => std::cmp::Ordering::Equal,
                    });
                }
            }

            for target in candidates {
                if !scene.body(source).is_some_and(Body::is_active) {
                    break;
                }
                self.resolve(scene, source, target);
            }
        }

        if let Resolution::Ordered(stored) = &mut self.resolution {
            *stored = aggregation;
        }
    }

    /// Re-tests a candidate against the source's current position and fires on contact.
    fn resolve(&mut self, scene: &mut Scene, source: BodyHandle, target: BodyHandle) {
        let Some(shape_a) = active_shape(scene, source, self.config.shape_a) else {
            return;
        };
        if self.test_pair(scene, source, target, &shape_a) {
            self.fire(scene, source, target);
        }
    }

    /// Tests `source` (with its current shape) against an active `target`.
    fn test_pair(&mut self, scene: &Scene, source: BodyHandle, target: BodyHandle, shape_a: &Shape) -> bool {
        let Some(shape_b) = active_shape(scene, target, self.config.shape_b) else {
            return false;
        };
        let (Some(body_a), Some(body_b)) = (scene.body(source), scene.body(target)) else {
            return false;
        };
        self.tester.test(body_a, body_b, shape_a, &shape_b)
    }

    fn fire(&mut self, scene: &mut Scene, source: BodyHandle, target: BodyHandle) {
        let event = CollisionEvent {
            source,
            target,
            contact: self.tester.contact(),
        };
        log::trace!("collision {source:?} -> {target:?}: {:?}", event.contact);
        for listener in &mut self.listeners {
            listener.collided(scene, &event);
        }
    }
}

impl<T: ContactTester> CollisionManager for CollisionGroup<T> {
    fn check(&mut self, scene: &mut Scene, group_a: GroupHandle, group_b: Option<GroupHandle>) {
        match group_b {
            Some(group_b) => self.check_groups(scene, group_a, group_b),
            None => log::warn!("pairwise collision manager registered without a second group"),
        }
    }
}

/// Shape of a live, active body, or `None` if it sits this tick out.
fn active_shape(scene: &Scene, handle: BodyHandle, shape: ShapeFn) -> Option<Shape> {
    scene.body(handle).filter(|body| body.is_active()).and_then(shape)
}
