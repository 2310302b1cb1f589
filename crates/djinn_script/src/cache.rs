//! Memoised component lookup
//!
//! [`Entity::get_component`] asks the host about presence on every call.
//! Scripts that fetch the same component each frame can hold a
//! [`ComponentCache`] instead; it checks presence once per
//! `(host, entity, kind)` triple and hands out clones of the stored wrapper.
//! Entities from different hosts never share an entry, even when their ids
//! collide.
//!
//! The cache cannot observe the host. Call [`ComponentCache::invalidate`]
//! when a component may have been removed.

use crate::components::Component;
use crate::entity::Entity;
use crate::ffi::{ComponentKind, EntityId};
use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

// host allocation address, entity, component
type CacheKey = (usize, EntityId, ComponentKind);

#[derive(Default)]
pub struct ComponentCache {
    entries: HashMap<CacheKey, Option<Box<dyn Any>>>,
}

fn host_key(entity: &Entity) -> usize {
    Rc::as_ptr(entity.host()) as *const () as usize
}

impl ComponentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached wrapper, or a fresh one from [`Entity::get_component`].
    /// Absence is cached too.
    pub fn get<T: Component>(&mut self, entity: &Entity) -> Option<T> {
        let slot = self
            .entries
            .entry((host_key(entity), entity.id(), T::KIND))
            .or_insert_with(|| {
                entity
                    .get_component::<T>()
                    .map(|component| Box::new(component) as Box<dyn Any>)
            });
        slot.as_ref()?.downcast_ref::<T>().cloned()
    }

    /// Drop the entry for `id` and `kind` on every host.
    pub fn invalidate(&mut self, id: EntityId, kind: ComponentKind) {
        self.entries
            .retain(|(_, entry_id, entry_kind), _| (*entry_id, *entry_kind) != (id, kind));
    }

    /// Drop every entry for `id` on every host.
    pub fn invalidate_entity(&mut self, id: EntityId) {
        self.entries.retain(|(_, entry_id, _), _| *entry_id != id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl std::fmt::Debug for ComponentCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Component, RigidBody2D, Sprite, Transform};
    use djinn_core::math::Vector3;

    #[test]
    fn presence_is_checked_once() {
        let (test_host, host) = crate::test_host::TestHost::pair();
        let id = test_host.spawn("e", &[ComponentKind::Transform]);
        let entity = Entity::new(id, host);
        let mut cache = ComponentCache::new();

        let first = cache.get::<Transform>(&entity).unwrap();
        let calls = test_host.calls();
        let second = cache.get::<Transform>(&entity).unwrap();
        assert_eq!(test_host.calls(), calls);
        assert_eq!(first, second);

        first.set_translation(Vector3::ONE);
        assert_eq!(second.translation(), Vector3::ONE);
    }

    #[test]
    fn absence_is_cached_until_invalidated() {
        let (test_host, host) = crate::test_host::TestHost::pair();
        let id = test_host.spawn("e", &[]);
        let entity = Entity::new(id, host);
        let mut cache = ComponentCache::new();

        assert!(cache.get::<Sprite>(&entity).is_none());
        test_host.add_component(id, ComponentKind::Sprite);
        assert!(cache.get::<Sprite>(&entity).is_none());

        cache.invalidate(id, ComponentKind::Sprite);
        assert!(cache.get::<Sprite>(&entity).is_some());
    }

    #[test]
    fn invalidate_entity_drops_all_kinds() {
        let (test_host, host) = crate::test_host::TestHost::pair();
        let a = Entity::new(
            test_host.spawn("a", &[ComponentKind::Transform, ComponentKind::RigidBody2D]),
            host.clone(),
        );
        let b = Entity::new(test_host.spawn("b", &[ComponentKind::Transform]), host);
        let mut cache = ComponentCache::new();

        cache.get::<Transform>(&a);
        cache.get::<RigidBody2D>(&a);
        cache.get::<Transform>(&b);
        assert_eq!(cache.len(), 3);

        cache.invalidate_entity(a.id());
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn hosts_with_colliding_ids_get_separate_wrappers() {
        let (host_a, a) = crate::test_host::TestHost::pair();
        let (host_b, b) = crate::test_host::TestHost::pair();
        let id_a = host_a.spawn("a", &[ComponentKind::Transform]);
        let id_b = host_b.spawn("b", &[ComponentKind::Transform]);
        assert_eq!(id_a, id_b);

        let on_a = Entity::new(id_a, a);
        let on_b = Entity::new(id_b, b);
        let mut cache = ComponentCache::new();

        cache.get::<Transform>(&on_a).unwrap();
        let transform_b = cache.get::<Transform>(&on_b).unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(transform_b.entity(), &on_b);

        transform_b.set_translation(Vector3::new(5.0, 5.0, 5.0));
        assert_eq!(on_b.translation(), Vector3::new(5.0, 5.0, 5.0));
        assert_eq!(on_a.translation(), Vector3::ZERO);

        cache.invalidate(id_a, ComponentKind::Transform);
        assert!(cache.is_empty());
    }
}
