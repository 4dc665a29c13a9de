//! Swept time-of-impact test between two moving bodies.
//!
//! Given where two bodies were at the start of the tick and where they are
//! now, finds whether they touched at any instant in between and, if so, the
//! positions at which they were last apart (or exactly touching). Those
//! positions let a listener revert a body out of penetration.

use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::shapes::Shape;

use super::config::Tolerances;
use super::contact::ContactResult;
use super::side::{Axis, CollisionSide};
use super::tester::{ContactTester, Footprint, OverlapTester};

/// Hard cap on bisection steps, on top of the bailout criterion.
const MAX_BISECTION_STEPS: usize = 64;

/// Start-of-tick footprints of both bodies plus their tick displacements.
#[derive(Debug, Clone, Copy)]
struct Sweep<'a> {
    start_a: Footprint<'a>,
    start_b: Footprint<'a>,
    displacement_a: Vec2,
    displacement_b: Vec2,
}

impl<'a> Sweep<'a> {
    /// Both footprints at fraction `t` of the tick.
    fn at(&self, t: f64) -> (Footprint<'a>, Footprint<'a>) {
        (
            self.start_a.translated(self.displacement_a * t),
            self.start_b.translated(self.displacement_b * t),
        )
    }

    /// Motion of A as seen from B.
    fn relative(&self) -> Vec2 {
        self.displacement_a - self.displacement_b
    }
}

/// Continuous collision test with contact positions and side.
///
/// Holds the last contact; a single instance must not serve two checks at once.
#[derive(Debug, Clone)]
pub struct SweptTester {
    overlap: OverlapTester,
    tolerances: Tolerances,
    contact: Option<ContactResult>,
}

impl SweptTester {
    pub fn new(pixel_perfect: bool, tolerances: Tolerances) -> Self {
        SweptTester {
            overlap: OverlapTester::new(pixel_perfect),
            tolerances,
            contact: None,
        }
    }

    pub fn tolerances(&self) -> Tolerances {
        self.tolerances
    }

    /// Last confirmed contact, `None` after a `false` result.
    pub fn contact(&self) -> Option<ContactResult> {
        self.contact
    }

    /// Returns whether the bodies touch at some instant of this tick.
    ///
    /// `shape_a` and `shape_b` are the current (end of tick) shapes. On `true`
    /// the contact holds both revert positions and the side.
    pub fn is_collide(&mut self, body_a: &Body, body_b: &Body, shape_a: &Shape, shape_b: &Shape) -> bool {
        self.contact = None;

        let displacement_a = body_a.displacement();
        let displacement_b = body_b.displacement();
        let now_a = Footprint::new(body_a, *shape_a);
        let now_b = Footprint::new(body_b, *shape_b);

        if self.overlap.overlaps(&now_a, &now_b) {
            // Resting overlap: nothing moved, nothing new to report.
            if displacement_a.is_zero() && displacement_b.is_zero() {
                return false;
            }
            self.contact = Some(separate_overlap(body_a, body_b, shape_a, shape_b, displacement_a, displacement_b));
            return true;
        }

        let sweep = Sweep {
            start_a: now_a.translated(-displacement_a),
            start_b: now_b.translated(-displacement_b),
            displacement_a,
            displacement_b,
        };
        let Some((t, side)) = self.time_of_impact(&sweep) else {
            return false;
        };

        self.contact = Some(ContactResult {
            position_a: body_a.previous_position() + displacement_a * t,
            position_b: body_b.previous_position() + displacement_b * t,
            side,
        });
        true
    }

    /// Earliest confirmed instant of contact along the sweep.
    fn time_of_impact(&self, sweep: &Sweep<'_>) -> Option<(f64, CollisionSide)> {
        let relative = sweep.relative();
        let horizontal = axis_toi(&sweep.start_a.shape, &sweep.start_b.shape, relative.x, Axis::Horizontal);
        let vertical = axis_toi(&sweep.start_a.shape, &sweep.start_b.shape, relative.y, Axis::Vertical);

        let (earlier, later) = match (horizontal, vertical) {
            (None, None) => return None,
            (Some(only), None) | (None, Some(only)) => (only, None),
            (Some(h), Some(v)) if h.0 <= v.0 => (h, Some(v)),
            (Some(h), Some(v)) => (v, Some(h)),
        };

        // Projections can meet on one axis while the boxes miss each other
        // on the other, e.g. sliding past a corner.
        let (t, side) = match later {
            Some(other) if !self.adjacent_at(sweep, earlier.0, earlier.1) => other,
            _ => earlier,
        };

        let refined = if self.overlaps_at(sweep, t) {
            self.bisect(sweep, 0.0, t, side)
        } else if self.adjacent_at(sweep, t, side) {
            Some(t)
        } else {
            self.bisect(sweep, t, 1.0, side)
        };
        refined.map(|t| (t, side))
    }

    fn overlaps_at(&self, sweep: &Sweep<'_>, t: f64) -> bool {
        let (a, b) = sweep.at(t);
        self.overlap.overlaps(&a, &b)
    }

    /// Apart at `t`, but overlapping once A is nudged towards B by the adjacency tolerance.
    fn adjacent_at(&self, sweep: &Sweep<'_>, t: f64, side: CollisionSide) -> bool {
        let (a, b) = sweep.at(t);
        if self.overlap.overlaps(&a, &b) {
            return false;
        }
        let probe = a.translated(side.approach() * self.tolerances.adjacency());
        self.overlap.overlaps(&probe, &b)
    }

    /// Binary search for an adjacent instant in `[lower, upper]`.
    fn bisect(&self, sweep: &Sweep<'_>, mut lower: f64, mut upper: f64, side: CollisionSide) -> Option<f64> {
        let speed = sweep.relative().max_abs_component();
        for _ in 0..MAX_BISECTION_STEPS {
            if (upper - lower) * speed < self.tolerances.bailout() {
                break;
            }
            let mid = 0.5 * (lower + upper);
            if self.overlaps_at(sweep, mid) {
                upper = mid;
            } else if self.adjacent_at(sweep, mid, side) {
                return Some(mid);
            } else {
                lower = mid;
            }
        }
        log::debug!("time of impact did not converge in [{lower}, {upper}], treating as no collision");
        None
    }
}

impl ContactTester for SweptTester {
    fn test(&mut self, body_a: &Body, body_b: &Body, shape_a: &Shape, shape_b: &Shape) -> bool {
        self.is_collide(body_a, body_b, shape_a, shape_b)
    }

    fn contact(&self) -> Option<ContactResult> {
        self.contact
    }
}

/// Fraction of the tick at which the facing edges on one axis meet, if within `[0, 1]`.
/// `relative` is A's displacement minus B's on that axis.
fn axis_toi(a: &Shape, b: &Shape, relative: f64, axis: Axis) -> Option<(f64, CollisionSide)> {
    if relative == 0.0 {
        return None;
    }
    let (a_min, a_max, b_min, b_max, forward, backward) = match axis {
        Axis::Horizontal => (a.left(), a.right(), b.left(), b.right(), CollisionSide::LeftRight, CollisionSide::RightLeft),
        Axis::Vertical => (a.top(), a.bottom(), b.top(), b.bottom(), CollisionSide::TopBottom, CollisionSide::BottomTop),
    };
    let (t, side) = if relative > 0.0 {
        ((b_min - a_max) / relative, forward)
    } else {
        ((b_max - a_min) / relative, backward)
    };
    (0.0..=1.0).contains(&t).then_some((t, side))
}

/// Contact for bodies that already overlap at the end of the tick.
///
/// The faster body (ties go to B) is pushed out along the shortest of the four
/// edge separations; the other one stays where it is.
fn separate_overlap(
    body_a: &Body,
    body_b: &Body,
    shape_a: &Shape,
    shape_b: &Shape,
    displacement_a: Vec2,
    displacement_b: Vec2,
) -> ContactResult {
    // Offsets that would move A clear of B.
    let separations = [
        (Vec2::new(shape_b.left() - shape_a.right(), 0.0), CollisionSide::LeftRight),
        (Vec2::new(shape_b.right() - shape_a.left(), 0.0), CollisionSide::RightLeft),
        (Vec2::new(0.0, shape_b.top() - shape_a.bottom()), CollisionSide::TopBottom),
        (Vec2::new(0.0, shape_b.bottom() - shape_a.top()), CollisionSide::BottomTop),
    ];
    let mut best = separations[0];
    for candidate in &separations[1..] {
        if candidate.0.max_abs_component() < best.0.max_abs_component() {
            best = *candidate;
        }
    }
    let (offset, side) = best;

    if displacement_a.magnitude_squared() > displacement_b.magnitude_squared() {
        ContactResult {
            position_a: body_a.position() + offset,
            position_b: body_b.position(),
            side,
        }
    } else {
        ContactResult {
            position_a: body_a.position(),
            position_b: body_b.position() - offset,
            side,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use image::{Rgba, RgbaImage};
    use std::sync::Arc;

    const TOLERANCE: f64 = Tolerances::DEFAULT_ADJACENCY;

    /// Body that was at `from` at the start of the tick and is at `to` now.
    fn moving(from: (f64, f64), to: (f64, f64), size: (f64, f64)) -> Body {
        let mut body = Body::new(from.0, from.1, size.0, size.1);
        body.move_by(Vec2::new(to.0 - from.0, to.1 - from.1));
        body
    }

    fn still(x: f64, y: f64, w: f64, h: f64) -> Body {
        Body::new(x, y, w, h)
    }

    fn collide(tester: &mut SweptTester, a: &Body, b: &Body) -> bool {
        let (Some(sa), Some(sb)) = (a.default_shape(), b.default_shape()) else {
            return false;
        };
        tester.is_collide(a, b, &sa, &sb)
    }

    fn tester() -> SweptTester {
        SweptTester::new(false, Tolerances::default())
    }

    #[test]
    fn test_resting_overlap_is_not_reported() {
        let mut t = tester();
        let a = still(0.0, 0.0, 10.0, 10.0);
        let b = still(5.0, 5.0, 10.0, 10.0);
        assert!(!collide(&mut t, &a, &b));
        assert!(!collide(&mut t, &b, &a));
        assert!(t.contact().is_none());
    }

    #[test]
    fn test_arrival_touching_at_end_of_tick() {
        // A spans [0, 10]; B's left edge goes from 15 to 10 and just touches it.
        let mut t = tester();
        let a = still(0.0, 0.0, 10.0, 10.0);
        let b = moving((15.0, 0.0), (10.0, 0.0), (10.0, 10.0));

        assert!(collide(&mut t, &a, &b));
        let contact = t.contact().expect("contact set on collision");
        assert_eq!(contact.side, CollisionSide::LeftRight);
        assert!((contact.position_b.x - 10.0).abs() < TOLERANCE);
        assert_eq!(contact.position_a, Vec2::ZERO);
    }

    #[test]
    fn test_stopping_short_is_no_collision() {
        // B moves from 25 to 20: its left edge stays 10 units from A's right
        // edge, so the meeting time lies beyond the tick.
        let mut t = tester();
        let a = still(0.0, 0.0, 10.0, 10.0);
        let b = moving((25.0, 0.0), (20.0, 0.0), (10.0, 10.0));
        assert!(!collide(&mut t, &a, &b));
        assert!(t.contact().is_none());
    }

    #[test]
    fn test_penetration_reverts_the_mover() {
        // B moves from 25 to 5, ending inside A.
        let mut t = tester();
        let a = still(0.0, 0.0, 10.0, 10.0);
        let b = moving((25.0, 0.0), (5.0, 0.0), (10.0, 10.0));

        assert!(collide(&mut t, &a, &b));
        let contact = t.contact().expect("contact set on collision");
        assert_eq!(contact.side, CollisionSide::LeftRight);
        assert_abs_diff_eq!(contact.position_b.x, 10.0, epsilon = TOLERANCE);
        assert_eq!(contact.position_a, a.position());
    }

    #[test]
    fn test_faster_first_body_is_the_one_moved() {
        // Player falls onto a platform, ending 5 units deep.
        let mut t = tester();
        let player = moving((10.0, 30.0), (10.0, 45.0), (10.0, 10.0));
        let platform = still(0.0, 50.0, 100.0, 10.0);

        assert!(collide(&mut t, &player, &platform));
        let contact = t.contact().expect("contact set on collision");
        assert_eq!(contact.side, CollisionSide::TopBottom);
        assert_abs_diff_eq!(contact.position_a.y, 40.0, epsilon = 1e-12);
        assert_eq!(contact.position_b, platform.position());
    }

    #[test]
    fn test_gap_remaining_is_no_collision() {
        let mut t = tester();
        let a = still(0.0, 0.0, 10.0, 10.0);
        let b = moving((50.0, 0.0), (40.0, 0.0), (10.0, 10.0));
        assert!(!collide(&mut t, &a, &b));
        assert!(t.contact().is_none());
    }

    #[test]
    fn test_tunnelling_is_caught() {
        // B jumps clean over A within one tick.
        let mut t = tester();
        let a = still(0.0, 0.0, 10.0, 10.0);
        let b = moving((25.0, 0.0), (-15.0, 0.0), (10.0, 10.0));

        assert!(collide(&mut t, &a, &b));
        let contact = t.contact().expect("contact set on collision");
        assert_eq!(contact.side, CollisionSide::LeftRight);
        assert_abs_diff_eq!(contact.position_b.x, 10.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_first_body_moving_into_second() {
        let mut t = tester();
        let a = moving((40.0, 0.0), (-20.0, 0.0), (10.0, 10.0));
        let b = still(0.0, 0.0, 10.0, 10.0);

        assert!(collide(&mut t, &a, &b));
        let contact = t.contact().expect("contact set on collision");
        assert_eq!(contact.side, CollisionSide::RightLeft);
        assert_abs_diff_eq!(contact.position_a.x, 10.0, epsilon = TOLERANCE);
        assert_eq!(contact.position_b, Vec2::ZERO);
    }

    #[test]
    fn test_corner_pass_falls_back_to_other_axis() {
        // Horizontal edges meet first, while B is still above A; the real
        // contact is B's bottom landing on A's top half a tick later.
        let mut t = tester();
        let a = still(0.0, 0.0, 10.0, 10.0);
        let b = moving((20.0, -20.0), (-20.0, 0.0), (10.0, 10.0));

        assert!(collide(&mut t, &a, &b));
        let contact = t.contact().expect("contact set on collision");
        assert_eq!(contact.side, CollisionSide::BottomTop);
        assert_abs_diff_eq!(contact.position_b.x, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(contact.position_b.y, -10.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_corner_miss_is_no_collision() {
        let mut t = tester();
        let a = still(0.0, 0.0, 10.0, 10.0);
        let b = moving((20.0, -20.0), (-20.0, -12.0), (10.0, 10.0));
        assert!(!collide(&mut t, &a, &b));
    }

    #[test]
    fn test_both_moving_towards_each_other() {
        let mut t = tester();
        let a = moving((0.0, 0.0), (20.0, 0.0), (10.0, 10.0));
        let b = moving((40.0, 0.0), (20.0, 0.0), (10.0, 10.0));
        // Ends fully overlapping; A and B moved equally fast so B is the one pushed.
        assert!(collide(&mut t, &a, &b));
        let contact = t.contact().expect("contact set on collision");
        assert_eq!(contact.position_a, a.position());
        assert_abs_diff_eq!((contact.position_b - contact.position_a).max_abs_component(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_same_velocity_never_converges() {
        let mut t = tester();
        let a = moving((0.0, 0.0), (5.0, 0.0), (10.0, 10.0));
        let b = moving((20.0, 0.0), (25.0, 0.0), (10.0, 10.0));
        assert!(!collide(&mut t, &a, &b));
    }

    #[test]
    fn test_repeated_test_gives_identical_contact() {
        let mut t = tester();
        let a = still(0.0, 0.0, 10.0, 10.0);
        let b = moving((25.0, 3.0), (-15.0, 3.0), (10.0, 10.0));

        assert!(collide(&mut t, &a, &b));
        let first = t.contact();
        assert!(collide(&mut t, &a, &b));
        assert_eq!(first, t.contact());
    }

    #[test]
    fn test_collision_box_offset_is_translated_back() {
        // The collision box sits 2 units right of the body origin.
        let mut t = tester();
        let a = still(0.0, 0.0, 10.0, 10.0);
        let mut b = moving((30.0, 0.0), (-20.0, 0.0), (12.0, 10.0));
        b.collision_box = Some(Shape::new(2.0, 0.0, 10.0, 10.0));

        assert!(collide(&mut t, &a, &b));
        let contact = t.contact().expect("contact set on collision");
        // Box left edge at 10 means body origin at 8.
        assert_abs_diff_eq!(contact.position_b.x, 8.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_pixel_mode_requires_opaque_contact() {
        // Only B's right half is opaque; it never reaches A's pixels.
        let a_img = Arc::new(RgbaImage::from_pixel(10, 10, Rgba([9, 9, 9, 255])));
        let b_img = Arc::new(RgbaImage::from_fn(10, 10, |x, _| if x < 5 { Rgba([0, 0, 0, 0]) } else { Rgba([9, 9, 9, 255]) }));
        let a = Body::with_image(0.0, 0.0, a_img);
        let mut b = Body::with_image(30.0, 0.0, b_img);
        b.move_by(Vec2::new(-22.0, 0.0));

        let mut rect = tester();
        let mut pixel = SweptTester::new(true, Tolerances::default());
        assert!(collide(&mut rect, &a, &b));
        assert!(!collide(&mut pixel, &a, &b));
    }

    #[test]
    fn test_pixel_mode_bisects_to_last_clear_instant() {
        // A sweeps from 30 to -8 across B. The end position only shares the
        // two pixel border, and at the rectangle TOI the boxes merely touch,
        // so the contact comes out of bisecting the rest of the tick.
        let solid = Arc::new(RgbaImage::from_pixel(10, 10, Rgba([9, 9, 9, 255])));
        let mut a = Body::with_image(30.0, 0.0, Arc::clone(&solid));
        a.move_by(Vec2::new(-38.0, 0.0));
        let b = Body::with_image(0.0, 0.0, Arc::clone(&solid));

        let mut pixel = SweptTester::new(true, Tolerances::default());
        assert!(collide(&mut pixel, &a, &b));
        let contact = pixel.contact().expect("contact set on collision");
        assert_eq!(contact.side, CollisionSide::RightLeft);
        assert_eq!(contact.position_b, b.position());
        // Last instant before A's pixels round onto the overlapping column.
        assert!(contact.position_a.x >= 7.5 && contact.position_a.x < 7.5 + TOLERANCE);
        assert!(!crate::collision::pixel::pixel_collide(contact.position_a, &solid, contact.position_b, &solid));

        // Swapped roles: the nudge only moves the first body, which sits on a
        // whole pixel, so adjacency is never confirmed.
        let still_first = Body::with_image(0.0, 0.0, Arc::clone(&solid));
        let mut mover = Body::with_image(30.0, 0.0, solid);
        mover.move_by(Vec2::new(-38.0, 0.0));
        assert!(!collide(&mut pixel, &still_first, &mover));
    }

    #[test]
    fn test_bisection_finds_adjacent_instant() {
        let t = tester();
        let a = still(0.0, 0.0, 10.0, 10.0);
        let b = moving((30.0, 0.0), (0.0, 0.0), (10.0, 10.0));
        let sweep = Sweep {
            start_a: Footprint::new(&a, Shape::new(0.0, 0.0, 10.0, 10.0)),
            start_b: Footprint::new(&b, Shape::new(30.0, 0.0, 10.0, 10.0)),
            displacement_a: a.displacement(),
            displacement_b: b.displacement(),
        };

        let hit = t.bisect(&sweep, 0.0, 1.0, CollisionSide::LeftRight).expect("converges");
        // B's left edge reaches 10 at t = 2/3.
        assert!((hit - 2.0 / 3.0).abs() * 30.0 < TOLERANCE);
    }

    #[test]
    fn test_bisection_bails_out_without_contact() {
        let t = tester();
        let a = still(0.0, 0.0, 10.0, 10.0);
        let b = moving((30.0, 50.0), (0.0, 50.0), (10.0, 10.0));
        let sweep = Sweep {
            start_a: Footprint::new(&a, Shape::new(0.0, 0.0, 10.0, 10.0)),
            start_b: Footprint::new(&b, Shape::new(30.0, 50.0, 10.0, 10.0)),
            displacement_a: a.displacement(),
            displacement_b: b.displacement(),
        };
        assert!(t.bisect(&sweep, 0.0, 1.0, CollisionSide::LeftRight).is_none());
    }

    #[test]
    fn test_axis_toi() {
        let a = Shape::new(0.0, 0.0, 10.0, 10.0);
        let b = Shape::new(20.0, 0.0, 10.0, 10.0);
        assert_eq!(axis_toi(&a, &b, 20.0, Axis::Horizontal), Some((0.5, CollisionSide::LeftRight)));
        assert_eq!(axis_toi(&b, &a, -20.0, Axis::Horizontal), Some((0.5, CollisionSide::RightLeft)));
        assert_eq!(axis_toi(&a, &b, 5.0, Axis::Horizontal), None);
        assert_eq!(axis_toi(&a, &b, 0.0, Axis::Horizontal), None);
        // Already overlapping vertically: meeting time lies in the past.
        assert_eq!(axis_toi(&a, &b, 3.0, Axis::Vertical), None);
    }
}
