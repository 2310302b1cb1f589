use crate::components::{
    CameraData, CircleColliderData, CircleData, RectColliderData, RigidBodyData, ScriptData,
    SpriteData, TransformData,
};
use crate::scene::EntityRecord;
use djinn_script::ComponentKind;

/// Component data that can be attached to an entity in a [`SceneHost`](crate::SceneHost).
pub trait SceneComponent {
    const KIND: ComponentKind;

    fn insert_into(self, record: &mut EntityRecord);
}

macro_rules! scene_component {
    ($data:ty, $kind:expr, $field:ident) => {
        impl SceneComponent for $data {
            const KIND: ComponentKind = $kind;

            fn insert_into(self, record: &mut EntityRecord) {
                record.$field = Some(self);
            }
        }
    };
}

scene_component!(TransformData, ComponentKind::Transform, transform);
scene_component!(SpriteData, ComponentKind::Sprite, sprite);
scene_component!(CircleData, ComponentKind::Circle, circle);
scene_component!(CameraData, ComponentKind::Camera, camera);
scene_component!(ScriptData, ComponentKind::Script, script);
scene_component!(RigidBodyData, ComponentKind::RigidBody2D, rigid_body);
scene_component!(RectColliderData, ComponentKind::RectCollider, rect_collider);
scene_component!(CircleColliderData, ComponentKind::CircleCollider, circle_collider);

/// Builder for entities prior to spawning.
#[derive(Debug, Default)]
pub struct EntityBuilder {
    record: EntityRecord,
}

impl EntityBuilder {
    /// Create a new builder for an entity with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            record: EntityRecord {
                name: name.into(),
                ..EntityRecord::default()
            },
        }
    }

    /// Attach a component. Adding the same kind twice keeps the last value.
    pub fn with<C: SceneComponent>(mut self, component: C) -> Self {
        component.insert_into(&mut self.record);
        self
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn has(&self, kind: ComponentKind) -> bool {
        self.record.components().contains(kind)
    }

    pub(crate) fn into_record(self) -> EntityRecord {
        self.record
    }
}
