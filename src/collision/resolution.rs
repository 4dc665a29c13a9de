// Strategies for turning confirmed pairs into listener calls.

use std::cmp::Ordering;

use crate::objects::body::Body;
use crate::world::scene::BodyHandle;

/// How a manager fires events for the pairs it finds.
#[derive(Debug, Clone, Default)]
pub enum Resolution {
    /// Fire as soon as a pair is confirmed, in scan order.
    #[default]
    PerPair,
    /// Collect every candidate of a source body first, then resolve them
    /// nearest-first in the direction of travel.
    Ordered(Aggregation),
}

/// Source/target pairs found by the broad phase of the current tick.
///
/// Pairs of the same source are contiguous and in the order the second group
/// was scanned. Cleared at the start of every check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pairs: Vec<(BodyHandle, BodyHandle)>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn push(&mut self, source: BodyHandle, target: BodyHandle) {
        self.pairs.push((source, target));
    }

    pub fn pairs(&self) -> &[(BodyHandle, BodyHandle)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Candidates of one source, in discovery order.
    pub fn candidates_of(&self, source: BodyHandle) -> impl Iterator<Item = BodyHandle> + '_ {
        self.pairs.iter().filter(move |(s, _)| *s == source).map(|(_, target)| *target)
    }

    /// Each source with its candidate list.
    pub fn runs(&self) -> Vec<(BodyHandle, Vec<BodyHandle>)> {
        self.pairs
            .chunk_by(|x, y| x.0 == y.0)
            .map(|run| (run[0].0, run.iter().map(|(_, target)| *target).collect()))
            .collect()
    }
}

/// Orders two candidates of `source` so the nearest one in its direction of travel comes first.
///
/// With horizontal motion and distinct x, candidates are ordered by x along
/// the travel direction. Otherwise they are ordered by y: a source whose
/// vertical displacement is non-negative sees the bottom-most candidate
/// first, a rising source the top-most.
pub fn motion_order(source: &Body, a: &Body, b: &Body) -> Ordering {
    let travel = source.displacement();
    let (a_pos, b_pos) = (a.position(), b.position());

    if travel.x != 0.0 && a_pos.x != b_pos.x {
        return if travel.x > 0.0 {
            a_pos.x.total_cmp(&b_pos.x)
        } else {
            b_pos.x.total_cmp(&a_pos.x)
        };
    }
    if travel.y >= 0.0 {
        b_pos.y.total_cmp(&a_pos.y)
    } else {
        a_pos.y.total_cmp(&b_pos.y)
    }
}
