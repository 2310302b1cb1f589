//! Stub scene host
//!
//! [`SceneHost`] answers every [`HostCalls`] method from in-memory component
//! data. Physics commands are queued for inspection instead of being
//! integrated; velocities are whatever the embedder last set.
//!
//! Calls naming an entity the scene does not know, or a component the entity
//! lacks, log a warning and return defaults or do nothing.

use crate::builder::EntityBuilder;
use crate::components::{
    CameraData, CircleColliderData, CircleData, RectColliderData, RigidBodyData, ScriptData,
    SpriteData, TransformData,
};
use djinn_core::input::{KeyCode, MouseCode};
use djinn_core::math::{Vector2, Vector3, Vector4};
use djinn_script::{
    BodyType, ComponentKind, ComponentSet, EntityId, HostCalls, LogLevel, ProjectionType,
    ScriptObject,
};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};

/// Everything the scene stores for one entity.
#[derive(Debug, Default)]
pub struct EntityRecord {
    pub name: String,
    pub transform: Option<TransformData>,
    pub sprite: Option<SpriteData>,
    pub circle: Option<CircleData>,
    pub camera: Option<CameraData>,
    pub script: Option<ScriptData>,
    pub rigid_body: Option<RigidBodyData>,
    pub rect_collider: Option<RectColliderData>,
    pub circle_collider: Option<CircleColliderData>,
    pub instance: Option<ScriptObject>,
}

impl EntityRecord {
    pub fn components(&self) -> ComponentSet {
        let present = [
            (ComponentKind::Transform, self.transform.is_some()),
            (ComponentKind::Sprite, self.sprite.is_some()),
            (ComponentKind::Circle, self.circle.is_some()),
            (ComponentKind::Camera, self.camera.is_some()),
            (ComponentKind::Script, self.script.is_some()),
            (ComponentKind::RigidBody2D, self.rigid_body.is_some()),
            (ComponentKind::RectCollider, self.rect_collider.is_some()),
            (ComponentKind::CircleCollider, self.circle_collider.is_some()),
        ];
        present
            .into_iter()
            .filter(|(_, is_present)| *is_present)
            .map(|(kind, _)| kind)
            .collect()
    }
}

/// A force, impulse or torque a script asked the physics world to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsCommand {
    Force {
        entity: EntityId,
        force: Vector2,
        wake: bool,
    },
    LinearImpulse {
        entity: EntityId,
        impulse: Vector2,
        wake: bool,
    },
    Torque {
        entity: EntityId,
        torque: f32,
        wake: bool,
    },
}

impl PhysicsCommand {
    pub fn entity(&self) -> EntityId {
        match *self {
            PhysicsCommand::Force { entity, .. }
            | PhysicsCommand::LinearImpulse { entity, .. }
            | PhysicsCommand::Torque { entity, .. } => entity,
        }
    }
}

#[derive(Debug, Default)]
struct InputState {
    keys: HashSet<KeyCode>,
    mouse_buttons: HashSet<MouseCode>,
    mouse_position: (f32, f32),
}

/// In-memory implementation of [`HostCalls`].
#[derive(Debug)]
pub struct SceneHost {
    entities: RefCell<BTreeMap<EntityId, EntityRecord>>,
    next_id: Cell<u64>,
    input: RefCell<InputState>,
    window: Cell<(f32, f32)>,
    commands: RefCell<Vec<PhysicsCommand>>,
    runtime_shape_mutation: bool,
}

impl Default for SceneHost {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl SceneHost {
    pub fn new(window_width: f32, window_height: f32) -> Self {
        Self {
            entities: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(1),
            input: RefCell::new(InputState::default()),
            window: Cell::new((window_width, window_height)),
            commands: RefCell::new(Vec::new()),
            runtime_shape_mutation: false,
        }
    }

    /// Let body-type, fixed-rotation and collider setters through.
    pub fn with_runtime_shape_mutation(mut self, enabled: bool) -> Self {
        self.runtime_shape_mutation = enabled;
        self
    }

    // ---------------------------------------------------------------------
    // Entities

    pub fn spawn(&self, builder: EntityBuilder) -> EntityId {
        let id = EntityId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let record = builder.into_record();
        tracing::debug!(entity = %id, name = %record.name, "spawned entity");
        self.entities.borrow_mut().insert(id, record);
        id
    }

    /// Remove an entity. Its script instance, if any, is dropped with it.
    pub fn despawn(&self, id: EntityId) -> bool {
        self.entities.borrow_mut().remove(&id).is_some()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.borrow().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.borrow().is_empty()
    }

    /// Ids in spawn order.
    pub fn entity_ids(&self) -> Vec<EntityId> {
        self.entities.borrow().keys().copied().collect()
    }

    /// Entities carrying a script component, with their class names.
    pub fn scripted_entities(&self) -> Vec<(EntityId, String)> {
        self.entities
            .borrow()
            .iter()
            .filter_map(|(id, record)| {
                record
                    .script
                    .as_ref()
                    .map(|script| (*id, script.class_name.clone()))
            })
            .collect()
    }

    /// Read an entity record directly, bypassing the script boundary.
    pub fn inspect<R>(&self, id: EntityId, f: impl FnOnce(&EntityRecord) -> R) -> Option<R> {
        self.entities.borrow().get(&id).map(f)
    }

    /// Mutate an entity record directly, e.g. to stand in for a physics step.
    pub fn modify<R>(&self, id: EntityId, f: impl FnOnce(&mut EntityRecord) -> R) -> Option<R> {
        self.entities.borrow_mut().get_mut(&id).map(f)
    }

    // ---------------------------------------------------------------------
    // Script instances

    pub fn set_script_instance(&self, id: EntityId, instance: ScriptObject) -> bool {
        self.modify(id, |record| record.instance = Some(instance))
            .is_some()
    }

    /// Live instances in spawn order. The returned handles are clones, so no
    /// scene borrow is held while the caller runs scripts.
    pub fn script_instances(&self) -> Vec<(EntityId, ScriptObject)> {
        self.entities
            .borrow()
            .iter()
            .filter_map(|(id, record)| record.instance.clone().map(|instance| (*id, instance)))
            .collect()
    }

    /// Drop every script instance, breaking host/instance reference cycles.
    pub fn clear_script_instances(&self) -> usize {
        let mut cleared = 0;
        for record in self.entities.borrow_mut().values_mut() {
            if record.instance.take().is_some() {
                cleared += 1;
            }
        }
        cleared
    }

    // ---------------------------------------------------------------------
    // Input and window

    pub fn press_key(&self, key: KeyCode) {
        self.input.borrow_mut().keys.insert(key);
    }

    pub fn release_key(&self, key: KeyCode) {
        self.input.borrow_mut().keys.remove(&key);
    }

    pub fn press_mouse_button(&self, button: MouseCode) {
        self.input.borrow_mut().mouse_buttons.insert(button);
    }

    pub fn release_mouse_button(&self, button: MouseCode) {
        self.input.borrow_mut().mouse_buttons.remove(&button);
    }

    pub fn set_mouse_position(&self, x: f32, y: f32) {
        self.input.borrow_mut().mouse_position = (x, y);
    }

    pub fn release_all(&self) {
        let mut input = self.input.borrow_mut();
        input.keys.clear();
        input.mouse_buttons.clear();
    }

    pub fn resize(&self, width: f32, height: f32) {
        self.window.set((width, height));
    }

    // ---------------------------------------------------------------------
    // Physics

    /// Commands recorded since the last [`SceneHost::take_physics_commands`].
    pub fn physics_commands(&self) -> Vec<PhysicsCommand> {
        self.commands.borrow().clone()
    }

    pub fn take_physics_commands(&self) -> Vec<PhysicsCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    pub fn set_velocity(&self, id: EntityId, velocity: Vector2) {
        self.update(id, ComponentKind::RigidBody2D, |r| {
            r.rigid_body.as_mut().map(|body| body.velocity = velocity)
        });
    }

    pub fn set_angular_velocity(&self, id: EntityId, angular_velocity: f32) {
        self.update(id, ComponentKind::RigidBody2D, |r| {
            r.rigid_body
                .as_mut()
                .map(|body| body.angular_velocity = angular_velocity)
        });
    }

    // ---------------------------------------------------------------------
    // Helpers

    fn query<R: Default>(
        &self,
        id: EntityId,
        kind: ComponentKind,
        f: impl FnOnce(&EntityRecord) -> Option<R>,
    ) -> R {
        let entities = self.entities.borrow();
        let Some(record) = entities.get(&id) else {
            tracing::warn!(entity = %id, component = %kind, "query on unknown entity");
            return R::default();
        };
        f(record).unwrap_or_else(|| {
            tracing::warn!(entity = %id, component = %kind, "query on missing component");
            R::default()
        })
    }

    fn update(&self, id: EntityId, kind: ComponentKind, f: impl FnOnce(&mut EntityRecord) -> Option<()>) {
        let mut entities = self.entities.borrow_mut();
        let Some(record) = entities.get_mut(&id) else {
            tracing::warn!(entity = %id, component = %kind, "update on unknown entity");
            return;
        };
        if f(record).is_none() {
            tracing::warn!(entity = %id, component = %kind, "update on missing component");
        }
    }

    fn record_command(&self, command: PhysicsCommand) {
        let entity = command.entity();
        let has_body = self.query(entity, ComponentKind::RigidBody2D, |r| {
            r.rigid_body.as_ref().map(|_| true)
        });
        if has_body {
            self.commands.borrow_mut().push(command);
        }
    }
}

impl HostCalls for SceneHost {
    fn input_is_key_down(&self, key: KeyCode) -> bool {
        self.input.borrow().keys.contains(&key)
    }

    fn input_is_mouse_button_down(&self, button: MouseCode) -> bool {
        self.input.borrow().mouse_buttons.contains(&button)
    }

    fn input_mouse_position(&self) -> (f32, f32) {
        self.input.borrow().mouse_position
    }

    fn log(&self, level: LogLevel, text: &str) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "script", "{text}"),
            LogLevel::Info => tracing::info!(target: "script", "{text}"),
            LogLevel::Warn => tracing::warn!(target: "script", "{text}"),
            LogLevel::Error => tracing::error!(target: "script", "{text}"),
            LogLevel::Critical => tracing::error!(target: "script", critical = true, "{text}"),
        }
    }

    fn window_width(&self) -> f32 {
        self.window.get().0
    }

    fn window_height(&self) -> f32 {
        self.window.get().1
    }

    fn entity_has_component(&self, id: EntityId, kind: ComponentKind) -> bool {
        match self.entities.borrow().get(&id) {
            Some(record) => record.components().contains(kind),
            None => {
                tracing::warn!(entity = %id, component = %kind, "presence check on unknown entity");
                false
            }
        }
    }

    fn entity_find_by_name(&self, name: &str) -> EntityId {
        self.entities
            .borrow()
            .iter()
            .find(|(_, record)| record.name == name)
            .map(|(id, _)| *id)
            .unwrap_or(EntityId::NULL)
    }

    fn entity_name(&self, id: EntityId) -> String {
        match self.entities.borrow().get(&id) {
            Some(record) => record.name.clone(),
            None => {
                tracing::warn!(entity = %id, "name of unknown entity");
                String::new()
            }
        }
    }

    fn entity_script_instance(&self, id: EntityId) -> Option<ScriptObject> {
        self.entities.borrow().get(&id)?.instance.clone()
    }

    // Transform

    fn transform_translation(&self, id: EntityId) -> Vector3 {
        self.query(id, ComponentKind::Transform, |r| r.transform.map(|t| t.translation))
    }

    fn transform_set_translation(&self, id: EntityId, translation: Vector3) {
        self.update(id, ComponentKind::Transform, |r| {
            r.transform.as_mut().map(|t| t.translation = translation)
        });
    }

    fn transform_eulers(&self, id: EntityId) -> Vector3 {
        self.query(id, ComponentKind::Transform, |r| r.transform.map(|t| t.eulers))
    }

    fn transform_set_eulers(&self, id: EntityId, eulers: Vector3) {
        self.update(id, ComponentKind::Transform, |r| {
            r.transform.as_mut().map(|t| t.eulers = eulers)
        });
    }

    fn transform_scale(&self, id: EntityId) -> Vector3 {
        self.query(id, ComponentKind::Transform, |r| r.transform.map(|t| t.scale))
    }

    fn transform_set_scale(&self, id: EntityId, scale: Vector3) {
        self.update(id, ComponentKind::Transform, |r| {
            r.transform.as_mut().map(|t| t.scale = scale)
        });
    }

    // Sprite and circle

    fn sprite_tint(&self, id: EntityId) -> Vector4 {
        self.query(id, ComponentKind::Sprite, |r| r.sprite.map(|s| s.tint))
    }

    fn sprite_set_tint(&self, id: EntityId, tint: Vector4) {
        self.update(id, ComponentKind::Sprite, |r| r.sprite.as_mut().map(|s| s.tint = tint));
    }

    fn circle_colour(&self, id: EntityId) -> Vector4 {
        self.query(id, ComponentKind::Circle, |r| r.circle.map(|c| c.colour))
    }

    fn circle_set_colour(&self, id: EntityId, colour: Vector4) {
        self.update(id, ComponentKind::Circle, |r| r.circle.as_mut().map(|c| c.colour = colour));
    }

    fn circle_thickness(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::Circle, |r| r.circle.map(|c| c.thickness))
    }

    fn circle_set_thickness(&self, id: EntityId, thickness: f32) {
        self.update(id, ComponentKind::Circle, |r| {
            r.circle.as_mut().map(|c| c.thickness = thickness)
        });
    }

    fn circle_fade(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::Circle, |r| r.circle.map(|c| c.fade))
    }

    fn circle_set_fade(&self, id: EntityId, fade: f32) {
        self.update(id, ComponentKind::Circle, |r| r.circle.as_mut().map(|c| c.fade = fade));
    }

    // Camera

    fn camera_projection_type(&self, id: EntityId) -> ProjectionType {
        self.query(id, ComponentKind::Camera, |r| r.camera.map(|c| c.projection))
    }

    fn camera_set_projection_type(&self, id: EntityId, projection: ProjectionType) {
        self.update(id, ComponentKind::Camera, |r| {
            r.camera.as_mut().map(|c| c.projection = projection)
        });
    }

    fn camera_vertical_fov(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::Camera, |r| r.camera.map(|c| c.active().vertical_fov))
    }

    fn camera_set_vertical_fov(&self, id: EntityId, fov: f32) {
        self.update(id, ComponentKind::Camera, |r| {
            r.camera.as_mut().map(|c| c.active_mut().vertical_fov = fov)
        });
    }

    fn camera_near_plane(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::Camera, |r| r.camera.map(|c| c.active().near))
    }

    fn camera_set_near_plane(&self, id: EntityId, near: f32) {
        self.update(id, ComponentKind::Camera, |r| {
            r.camera.as_mut().map(|c| c.active_mut().near = near)
        });
    }

    fn camera_far_plane(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::Camera, |r| r.camera.map(|c| c.active().far))
    }

    fn camera_set_far_plane(&self, id: EntityId, far: f32) {
        self.update(id, ComponentKind::Camera, |r| {
            r.camera.as_mut().map(|c| c.active_mut().far = far)
        });
    }

    fn camera_fixed_aspect_ratio(&self, id: EntityId) -> bool {
        self.query(id, ComponentKind::Camera, |r| r.camera.map(|c| c.fixed_aspect_ratio))
    }

    fn camera_set_fixed_aspect_ratio(&self, id: EntityId, fixed: bool) {
        self.update(id, ComponentKind::Camera, |r| {
            r.camera.as_mut().map(|c| c.fixed_aspect_ratio = fixed)
        });
    }

    fn script_component_name(&self, id: EntityId) -> String {
        self.query(id, ComponentKind::Script, |r| {
            r.script.as_ref().map(|s| s.class_name.clone())
        })
    }

    // Rigid body

    fn rigid_body_apply_linear_impulse(&self, id: EntityId, impulse: Vector2, wake: bool) {
        self.record_command(PhysicsCommand::LinearImpulse {
            entity: id,
            impulse,
            wake,
        });
    }

    fn rigid_body_apply_force(&self, id: EntityId, force: Vector2, wake: bool) {
        self.record_command(PhysicsCommand::Force {
            entity: id,
            force,
            wake,
        });
    }

    fn rigid_body_velocity(&self, id: EntityId) -> Vector2 {
        self.query(id, ComponentKind::RigidBody2D, |r| r.rigid_body.map(|b| b.velocity))
    }

    fn rigid_body_apply_torque(&self, id: EntityId, torque: f32, wake: bool) {
        self.record_command(PhysicsCommand::Torque {
            entity: id,
            torque,
            wake,
        });
    }

    fn rigid_body_angular_velocity(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::RigidBody2D, |r| {
            r.rigid_body.map(|b| b.angular_velocity)
        })
    }

    fn rigid_body_body_type(&self, id: EntityId) -> BodyType {
        self.query(id, ComponentKind::RigidBody2D, |r| r.rigid_body.map(|b| b.body_type))
    }

    fn rigid_body_set_body_type(&self, id: EntityId, body_type: BodyType) {
        self.update(id, ComponentKind::RigidBody2D, |r| {
            r.rigid_body.as_mut().map(|b| b.body_type = body_type)
        });
    }

    fn rigid_body_fixed_rotation(&self, id: EntityId) -> bool {
        self.query(id, ComponentKind::RigidBody2D, |r| {
            r.rigid_body.map(|b| b.fixed_rotation)
        })
    }

    fn rigid_body_set_fixed_rotation(&self, id: EntityId, fixed: bool) {
        self.update(id, ComponentKind::RigidBody2D, |r| {
            r.rigid_body.as_mut().map(|b| b.fixed_rotation = fixed)
        });
    }

    // Rect collider

    fn rect_collider_offset(&self, id: EntityId) -> Vector2 {
        self.query(id, ComponentKind::RectCollider, |r| r.rect_collider.map(|c| c.offset))
    }

    fn rect_collider_set_offset(&self, id: EntityId, offset: Vector2) {
        self.update(id, ComponentKind::RectCollider, |r| {
            r.rect_collider.as_mut().map(|c| c.offset = offset)
        });
    }

    fn rect_collider_half_extent(&self, id: EntityId) -> Vector2 {
        self.query(id, ComponentKind::RectCollider, |r| {
            r.rect_collider.map(|c| c.half_extent)
        })
    }

    fn rect_collider_set_half_extent(&self, id: EntityId, half_extent: Vector2) {
        self.update(id, ComponentKind::RectCollider, |r| {
            r.rect_collider.as_mut().map(|c| c.half_extent = half_extent)
        });
    }

    fn rect_collider_density(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::RectCollider, |r| r.rect_collider.map(|c| c.density))
    }

    fn rect_collider_set_density(&self, id: EntityId, density: f32) {
        self.update(id, ComponentKind::RectCollider, |r| {
            r.rect_collider.as_mut().map(|c| c.density = density)
        });
    }

    fn rect_collider_friction(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::RectCollider, |r| r.rect_collider.map(|c| c.friction))
    }

    fn rect_collider_set_friction(&self, id: EntityId, friction: f32) {
        self.update(id, ComponentKind::RectCollider, |r| {
            r.rect_collider.as_mut().map(|c| c.friction = friction)
        });
    }

    fn rect_collider_restitution(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::RectCollider, |r| {
            r.rect_collider.map(|c| c.restitution)
        })
    }

    fn rect_collider_set_restitution(&self, id: EntityId, restitution: f32) {
        self.update(id, ComponentKind::RectCollider, |r| {
            r.rect_collider.as_mut().map(|c| c.restitution = restitution)
        });
    }

    fn rect_collider_restitution_threshold(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::RectCollider, |r| {
            r.rect_collider.map(|c| c.restitution_threshold)
        })
    }

    fn rect_collider_set_restitution_threshold(&self, id: EntityId, threshold: f32) {
        self.update(id, ComponentKind::RectCollider, |r| {
            r.rect_collider
                .as_mut()
                .map(|c| c.restitution_threshold = threshold)
        });
    }

    // Circle collider

    fn circle_collider_offset(&self, id: EntityId) -> Vector2 {
        self.query(id, ComponentKind::CircleCollider, |r| {
            r.circle_collider.map(|c| c.offset)
        })
    }

    fn circle_collider_set_offset(&self, id: EntityId, offset: Vector2) {
        self.update(id, ComponentKind::CircleCollider, |r| {
            r.circle_collider.as_mut().map(|c| c.offset = offset)
        });
    }

    fn circle_collider_radius(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::CircleCollider, |r| {
            r.circle_collider.map(|c| c.radius)
        })
    }

    fn circle_collider_set_radius(&self, id: EntityId, radius: f32) {
        self.update(id, ComponentKind::CircleCollider, |r| {
            r.circle_collider.as_mut().map(|c| c.radius = radius)
        });
    }

    fn circle_collider_density(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::CircleCollider, |r| {
            r.circle_collider.map(|c| c.density)
        })
    }

    fn circle_collider_set_density(&self, id: EntityId, density: f32) {
        self.update(id, ComponentKind::CircleCollider, |r| {
            r.circle_collider.as_mut().map(|c| c.density = density)
        });
    }

    fn circle_collider_friction(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::CircleCollider, |r| {
            r.circle_collider.map(|c| c.friction)
        })
    }

    fn circle_collider_set_friction(&self, id: EntityId, friction: f32) {
        self.update(id, ComponentKind::CircleCollider, |r| {
            r.circle_collider.as_mut().map(|c| c.friction = friction)
        });
    }

    fn circle_collider_restitution(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::CircleCollider, |r| {
            r.circle_collider.map(|c| c.restitution)
        })
    }

    fn circle_collider_set_restitution(&self, id: EntityId, restitution: f32) {
        self.update(id, ComponentKind::CircleCollider, |r| {
            r.circle_collider.as_mut().map(|c| c.restitution = restitution)
        });
    }

    fn circle_collider_restitution_threshold(&self, id: EntityId) -> f32 {
        self.query(id, ComponentKind::CircleCollider, |r| {
            r.circle_collider.map(|c| c.restitution_threshold)
        })
    }

    fn circle_collider_set_restitution_threshold(&self, id: EntityId, threshold: f32) {
        self.update(id, ComponentKind::CircleCollider, |r| {
            r.circle_collider
                .as_mut()
                .map(|c| c.restitution_threshold = threshold)
        });
    }

    fn supports_runtime_shape_mutation(&self) -> bool {
        self.runtime_shape_mutation
    }
}
