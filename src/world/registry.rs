//! Group-pair to manager dispatch, run once per tick.

use crate::collision::manager::CollisionManager;

use super::scene::{GroupHandle, Scene};

struct Entry {
    group_a: GroupHandle,
    group_b: Option<GroupHandle>,
    manager: Box<dyn CollisionManager>,
}

impl Entry {
    /// A `None` on either side, in the entry or in the query, matches anything.
    fn matches(&self, group_a: Option<GroupHandle>, group_b: Option<GroupHandle>) -> bool {
        let slot = |wanted: Option<GroupHandle>, held: Option<GroupHandle>| match (wanted, held) {
            (Some(wanted), Some(held)) => wanted == held,
            _ => true,
        };
        slot(group_a, Some(self.group_a)) && slot(group_b, self.group_b)
    }

    fn references(&self, group: GroupHandle) -> bool {
        self.group_a == group || self.group_b == Some(group)
    }
}

/// Registered collision checks, keyed by ordered group pair.
///
/// `(a, b)` and `(b, a)` are distinct entries: the managers' shape getters
/// differ per side.
#[derive(Default)]
pub struct CollisionRegistry {
    entries: Vec<Entry>,
}

impl CollisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `manager` for `group_a` against `group_b` (`None` for single-group checks).
    pub fn add(&mut self, group_a: GroupHandle, group_b: Option<GroupHandle>, manager: Box<dyn CollisionManager>) {
        log::debug!("registering collision check {group_a:?} vs {group_b:?}");
        self.entries.push(Entry {
            group_a,
            group_b,
            manager,
        });
    }

    /// First manager registered for the pair, with `None` matching either slot.
    pub fn get(&self, group_a: Option<GroupHandle>, group_b: Option<GroupHandle>) -> Option<&dyn CollisionManager> {
        self.entries
            .iter()
            .find(|entry| entry.matches(group_a, group_b))
            .map(|entry| entry.manager.as_ref())
    }

    pub fn get_mut(&mut self, group_a: Option<GroupHandle>, group_b: Option<GroupHandle>) -> Option<&mut (dyn CollisionManager + 'static)> {
        self.entries
            .iter_mut()
            .find(|entry| entry.matches(group_a, group_b))
            .map(|entry| entry.manager.as_mut())
    }

    /// Runs every registered manager once.
    pub fn check_all(&mut self, scene: &mut Scene) {
        for entry in &mut self.entries {
            entry.manager.check(scene, entry.group_a, entry.group_b);
        }
    }

    /// Drops every entry that mentions `group` on either side. Returns how many went.
    pub fn remove_group(&mut self, group: GroupHandle) -> usize {
        let mut removed = 0;
        while let Some(index) = self.entries.iter().position(|entry| entry.references(group)) {
            self.entries.remove(index);
            removed += 1;
        }
        if removed > 0 {
            log::debug!("removed {removed} collision check(s) for {group:?}");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
