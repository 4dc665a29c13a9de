use crate::world::scene::BodyHandle;

/// An ordered collection of bodies checked together, e.g. "enemies" or "platforms".
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    /// An inactive group makes every manager it takes part in a no-op.
    pub active: bool,
    members: Vec<BodyHandle>,
}

impl Group {
    /// Creates an empty, active group.
    pub fn new(name: impl Into<String>) -> Self {
        Group {
            name: name.into(),
            active: true,
            members: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Members in insertion order. Pairwise scans follow this order.
    pub fn members(&self) -> &[BodyHandle] {
        &self.members
    }

    /// Appends a body. Adding the same body twice is a no-op.
    pub fn add(&mut self, body: BodyHandle) {
        if !self.members.contains(&body) {
            self.members.push(body);
        }
    }

    /// Removes a body, returning whether it was a member.
    pub fn remove(&mut self, body: BodyHandle) -> bool {
        let before = self.members.len();
        self.members.retain(|member| *member != body);
        self.members.len() != before
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
