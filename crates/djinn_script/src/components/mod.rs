//! Typed component views
//!
//! Each wrapper is bound to one [`Entity`] and forwards every property read
//! or write to the host. Nothing is cached, so values are never stale, and
//! several wrappers for the same entity can coexist freely.

mod physics;
mod render;
mod script;
mod transform;

pub use physics::{BodyType, CircleCollider, RectCollider, RigidBody2D};
pub use render::{Camera, Circle, ProjectionType, Sprite};
pub use script::ScriptComponent;
pub use transform::Transform;

use crate::entity::Entity;
use crate::ffi::{ComponentKind, EntityId, HostCalls};

/// A typed view over one kind of host-owned entity state.
pub trait Component: Clone + 'static {
    const KIND: ComponentKind;

    /// Bind a wrapper to `entity` without asking the host anything. Prefer
    /// [`Entity::get_component`], which checks presence first.
    fn bind(entity: Entity) -> Self;

    fn entity(&self) -> &Entity;
}

macro_rules! component_wrapper {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            entity: $crate::entity::Entity,
        }

        impl $crate::components::Component for $name {
            const KIND: $crate::ffi::ComponentKind = $kind;

            fn bind(entity: $crate::entity::Entity) -> Self {
                Self { entity }
            }

            fn entity(&self) -> &$crate::entity::Entity {
                &self.entity
            }
        }
    };
}

pub(crate) use component_wrapper;

/// Forward a physics-shape setter only when the host can apply it to a
/// running physics world.
pub(crate) fn forward_shape_setter(
    entity: &Entity,
    kind: ComponentKind,
    property: &'static str,
    set: impl FnOnce(&dyn HostCalls, EntityId),
) {
    let host = entity.host();
    if host.supports_runtime_shape_mutation() {
        set(&**host, entity.id());
    } else {
        tracing::debug!(
            entity = %entity.id(),
            component = %kind,
            property,
            "setter ignored: host does not support runtime shape mutation"
        );
    }
}
