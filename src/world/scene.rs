use slotmap::{new_key_type, SlotMap};

use crate::error::CollisionError;
use crate::integration::integrator;
use crate::objects::{Body, Group};

new_key_type! {
    /// Stable handle to a body in a `Scene`.
    pub struct BodyHandle;
    /// Stable handle to a group in a `Scene`.
    pub struct GroupHandle;
}

/// Owns every body and group. Managers and listeners refer to them by handle.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    bodies: SlotMap<BodyHandle, Body>,
    groups: SlotMap<GroupHandle, Group>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        self.bodies.insert(body)
    }

    pub fn add_group(&mut self, group: Group) -> GroupHandle {
        self.groups.insert(group)
    }

    /// Adds a body and makes it a member of `group`.
    pub fn spawn(&mut self, group: GroupHandle, body: Body) -> Result<BodyHandle, CollisionError> {
        if !self.groups.contains_key(group) {
            return Err(CollisionError::UnknownGroup);
        }
        let handle = self.bodies.insert(body);
        self.add_to_group(group, handle)?;
        Ok(handle)
    }

    /// Adds an existing body to a group. A body may belong to several groups.
    pub fn add_to_group(&mut self, group: GroupHandle, body: BodyHandle) -> Result<(), CollisionError> {
        if !self.bodies.contains_key(body) {
            return Err(CollisionError::UnknownBody);
        }
        let group = self.groups.get_mut(group).ok_or(CollisionError::UnknownGroup)?;
        group.add(body);
        Ok(())
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    pub fn group(&self, handle: GroupHandle) -> Option<&Group> {
        self.groups.get(handle)
    }

    pub fn group_mut(&mut self, handle: GroupHandle) -> Option<&mut Group> {
        self.groups.get_mut(handle)
    }

    /// Removes a body from the scene and from every group holding it.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<Body> {
        let body = self.bodies.remove(handle)?;
        for (_, group) in self.groups.iter_mut() {
            group.remove(handle);
        }
        Some(body)
    }

    /// Removes a group. Its bodies stay in the scene.
    pub fn remove_group(&mut self, handle: GroupHandle) -> Option<Group> {
        self.groups.remove(handle)
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.bodies.iter()
    }

    pub fn groups(&self) -> impl Iterator<Item = (GroupHandle, &Group)> {
        self.groups.iter()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Moves every active body by `velocity * elapsed`, starting a new tick.
    pub fn integrate(&mut self, elapsed: f64) {
        for (_, body) in self.bodies.iter_mut() {
            integrator::integrate(body, elapsed);
        }
    }
}
