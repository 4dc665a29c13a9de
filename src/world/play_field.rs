use crate::collision::manager::CollisionManager;

use super::registry::CollisionRegistry;
use super::scene::{GroupHandle, Scene};

/// Bodies, groups and the collision checks between them.
#[derive(Default)]
pub struct PlayField {
    pub scene: Scene,
    pub collisions: CollisionRegistry,
}

impl PlayField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a check between two groups, or a single-group check when `group_b` is `None`.
    pub fn add_collision(&mut self, group_a: GroupHandle, group_b: Option<GroupHandle>, manager: Box<dyn CollisionManager>) {
        self.collisions.add(group_a, group_b, manager);
    }

    /// Advances one tick: moves active bodies, then runs every collision check.
    pub fn update(&mut self, elapsed: f64) {
        if elapsed <= 0.0 {
            return;
        }
        self.scene.integrate(elapsed);
        self.check_collisions();
    }

    /// Runs the collision checks without moving anything.
    pub fn check_collisions(&mut self) {
        self.collisions.check_all(&mut self.scene);
    }

    /// Removes a group along with every check that refers to it.
    pub fn remove_group(&mut self, group: GroupHandle) -> bool {
        self.collisions.remove_group(group);
        self.scene.remove_group(group).is_some()
    }
}
