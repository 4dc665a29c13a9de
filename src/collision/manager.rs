use crate::world::scene::{GroupHandle, Scene};

/// Anything the registry can run once per tick for a pair of groups.
///
/// `group_b` is `None` for checks that only involve one group, such as
/// boundary checks. Implementations keep scratch state and are not reentrant.
pub trait CollisionManager {
    fn check(&mut self, scene: &mut Scene, group_a: GroupHandle, group_b: Option<GroupHandle>);
}
