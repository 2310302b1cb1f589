//! In-memory host used by unit tests.
//!
//! Stores whatever the wrappers write, records physics commands and counts
//! every call that crosses the boundary.

use crate::components::{BodyType, ProjectionType};
use crate::ffi::{ComponentKind, ComponentSet, EntityId, Host, HostCalls, LogLevel};
use crate::script::ScriptObject;
use djinn_core::input::{KeyCode, MouseCode};
use djinn_core::math::{Vector2, Vector3, Vector4};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct BodyState {
    pub forces: Vec<(Vector2, bool)>,
    pub impulses: Vec<(Vector2, bool)>,
    pub torques: Vec<(f32, bool)>,
    pub velocity: Vector2,
    pub angular_velocity: f32,
    pub body_type: BodyType,
    pub fixed_rotation: bool,
}

#[derive(Debug, Clone, Default)]
struct ColliderState {
    offset: Vector2,
    size: Vector2,
    radius: f32,
    density: f32,
    friction: f32,
    restitution: f32,
    restitution_threshold: f32,
}

#[derive(Default)]
struct Record {
    name: String,
    components: ComponentSet,
    translation: Vector3,
    eulers: Vector3,
    scale: Vector3,
    tint: Vector4,
    colour: Vector4,
    thickness: f32,
    fade: f32,
    projection: ProjectionType,
    vertical_fov: f32,
    near: f32,
    far: f32,
    fixed_aspect: bool,
    script_name: String,
    script: Option<ScriptObject>,
    body: BodyState,
    rect: ColliderState,
    circle: ColliderState,
}

#[derive(Default)]
pub struct TestHost {
    records: RefCell<HashMap<EntityId, Record>>,
    next_id: Cell<u64>,
    calls: Cell<usize>,
    shape_mutation: Cell<bool>,
    keys: RefCell<HashSet<KeyCode>>,
    buttons: RefCell<HashSet<MouseCode>>,
    mouse: Cell<(f32, f32)>,
    window: Cell<(f32, f32)>,
    logs: RefCell<Vec<(LogLevel, String)>>,
}

impl TestHost {
    pub fn shared() -> Host {
        Rc::new(Self::default())
    }

    /// The concrete host for test setup, plus the same host as a [`Host`].
    pub fn pair() -> (Rc<TestHost>, Host) {
        let test_host = Rc::new(Self::default());
        let host: Host = test_host.clone();
        (test_host, host)
    }

    pub fn spawn(&self, name: &str, kinds: &[ComponentKind]) -> EntityId {
        let id = EntityId(self.next_id.get() + 1);
        self.next_id.set(id.0);
        let record = Record {
            name: name.to_owned(),
            components: kinds.iter().copied().collect(),
            scale: Vector3::ONE,
            ..Record::default()
        };
        self.records.borrow_mut().insert(id, record);
        id
    }

    pub fn add_component(&self, id: EntityId, kind: ComponentKind) {
        if let Some(record) = self.records.borrow_mut().get_mut(&id) {
            record.components.insert(kind);
        }
    }

    pub fn attach_script(&self, id: EntityId, script: ScriptObject) {
        if let Some(record) = self.records.borrow_mut().get_mut(&id) {
            record.components.insert(ComponentKind::Script);
            record.script = Some(script);
        }
    }

    pub fn set_script_name(&self, id: EntityId, name: &str) {
        if let Some(record) = self.records.borrow_mut().get_mut(&id) {
            record.script_name = name.to_owned();
        }
    }

    pub fn allow_shape_mutation(&self, allow: bool) {
        self.shape_mutation.set(allow);
    }

    pub fn press_key(&self, key: KeyCode) {
        self.keys.borrow_mut().insert(key);
    }

    pub fn press_button(&self, button: MouseCode) {
        self.buttons.borrow_mut().insert(button);
    }

    pub fn move_mouse(&self, x: f32, y: f32) {
        self.mouse.set((x, y));
    }

    pub fn resize(&self, width: f32, height: f32) {
        self.window.set((width, height));
    }

    pub fn body(&self, id: EntityId) -> BodyState {
        self.records
            .borrow()
            .get(&id)
            .map(|record| record.body.clone())
            .unwrap_or_default()
    }

    pub fn logs(&self) -> Vec<(LogLevel, String)> {
        self.logs.borrow().clone()
    }

    /// Number of host calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn read<R: Default>(&self, id: EntityId, f: impl FnOnce(&Record) -> R) -> R {
        self.calls.set(self.calls.get() + 1);
        self.records.borrow().get(&id).map(f).unwrap_or_default()
    }

    fn write(&self, id: EntityId, f: impl FnOnce(&mut Record)) {
        self.calls.set(self.calls.get() + 1);
        if let Some(record) = self.records.borrow_mut().get_mut(&id) {
            f(record);
        }
    }

    fn count(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl HostCalls for TestHost {
    fn input_is_key_down(&self, key: KeyCode) -> bool {
        self.count();
        self.keys.borrow().contains(&key)
    }

    fn input_is_mouse_button_down(&self, button: MouseCode) -> bool {
        self.count();
        self.buttons.borrow().contains(&button)
    }

    fn input_mouse_position(&self) -> (f32, f32) {
        self.count();
        self.mouse.get()
    }

    fn log(&self, level: LogLevel, text: &str) {
        self.count();
        self.logs.borrow_mut().push((level, text.to_owned()));
    }

    fn window_width(&self) -> f32 {
        self.count();
        self.window.get().0
    }

    fn window_height(&self) -> f32 {
        self.count();
        self.window.get().1
    }

    fn entity_has_component(&self, id: EntityId, kind: ComponentKind) -> bool {
        self.read(id, |r| r.components.contains(kind))
    }

    fn entity_find_by_name(&self, name: &str) -> EntityId {
        self.count();
        self.records
            .borrow()
            .iter()
            .filter(|(_, record)| record.name == name)
            .map(|(id, _)| *id)
            .min()
            .unwrap_or(EntityId::NULL)
    }

    fn entity_name(&self, id: EntityId) -> String {
        self.read(id, |r| r.name.clone())
    }

    fn entity_script_instance(&self, id: EntityId) -> Option<ScriptObject> {
        self.read(id, |r| r.script.clone())
    }

    fn transform_translation(&self, id: EntityId) -> Vector3 {
        self.read(id, |r| r.translation)
    }

    fn transform_set_translation(&self, id: EntityId, translation: Vector3) {
        self.write(id, |r| r.translation = translation);
    }

    fn transform_eulers(&self, id: EntityId) -> Vector3 {
        self.read(id, |r| r.eulers)
    }

    fn transform_set_eulers(&self, id: EntityId, eulers: Vector3) {
        self.write(id, |r| r.eulers = eulers);
    }

    fn transform_scale(&self, id: EntityId) -> Vector3 {
        self.read(id, |r| r.scale)
    }

    fn transform_set_scale(&self, id: EntityId, scale: Vector3) {
        self.write(id, |r| r.scale = scale);
    }

    fn sprite_tint(&self, id: EntityId) -> Vector4 {
        self.read(id, |r| r.tint)
    }

    fn sprite_set_tint(&self, id: EntityId, tint: Vector4) {
        self.write(id, |r| r.tint = tint);
    }

    fn circle_colour(&self, id: EntityId) -> Vector4 {
        self.read(id, |r| r.colour)
    }

    fn circle_set_colour(&self, id: EntityId, colour: Vector4) {
        self.write(id, |r| r.colour = colour);
    }

    fn circle_thickness(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.thickness)
    }

    fn circle_set_thickness(&self, id: EntityId, thickness: f32) {
        self.write(id, |r| r.thickness = thickness);
    }

    fn circle_fade(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.fade)
    }

    fn circle_set_fade(&self, id: EntityId, fade: f32) {
        self.write(id, |r| r.fade = fade);
    }

    fn camera_projection_type(&self, id: EntityId) -> ProjectionType {
        self.read(id, |r| r.projection)
    }

    fn camera_set_projection_type(&self, id: EntityId, projection: ProjectionType) {
        self.write(id, |r| r.projection = projection);
    }

    fn camera_vertical_fov(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.vertical_fov)
    }

    fn camera_set_vertical_fov(&self, id: EntityId, fov: f32) {
        self.write(id, |r| r.vertical_fov = fov);
    }

    fn camera_near_plane(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.near)
    }

    fn camera_set_near_plane(&self, id: EntityId, near: f32) {
        self.write(id, |r| r.near = near);
    }

    fn camera_far_plane(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.far)
    }

    fn camera_set_far_plane(&self, id: EntityId, far: f32) {
        self.write(id, |r| r.far = far);
    }

    fn camera_fixed_aspect_ratio(&self, id: EntityId) -> bool {
        self.read(id, |r| r.fixed_aspect)
    }

    fn camera_set_fixed_aspect_ratio(&self, id: EntityId, fixed: bool) {
        self.write(id, |r| r.fixed_aspect = fixed);
    }

    fn script_component_name(&self, id: EntityId) -> String {
        self.read(id, |r| r.script_name.clone())
    }

    fn rigid_body_apply_linear_impulse(&self, id: EntityId, impulse: Vector2, wake: bool) {
        self.write(id, |r| r.body.impulses.push((impulse, wake)));
    }

    fn rigid_body_apply_force(&self, id: EntityId, force: Vector2, wake: bool) {
        self.write(id, |r| r.body.forces.push((force, wake)));
    }

    fn rigid_body_velocity(&self, id: EntityId) -> Vector2 {
        self.read(id, |r| r.body.velocity)
    }

    fn rigid_body_apply_torque(&self, id: EntityId, torque: f32, wake: bool) {
        self.write(id, |r| r.body.torques.push((torque, wake)));
    }

    fn rigid_body_angular_velocity(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.body.angular_velocity)
    }

    fn rigid_body_body_type(&self, id: EntityId) -> BodyType {
        self.read(id, |r| r.body.body_type)
    }

    fn rigid_body_set_body_type(&self, id: EntityId, body_type: BodyType) {
        self.write(id, |r| r.body.body_type = body_type);
    }

    fn rigid_body_fixed_rotation(&self, id: EntityId) -> bool {
        self.read(id, |r| r.body.fixed_rotation)
    }

    fn rigid_body_set_fixed_rotation(&self, id: EntityId, fixed: bool) {
        self.write(id, |r| r.body.fixed_rotation = fixed);
    }

    fn rect_collider_offset(&self, id: EntityId) -> Vector2 {
        self.read(id, |r| r.rect.offset)
    }

    fn rect_collider_set_offset(&self, id: EntityId, offset: Vector2) {
        self.write(id, |r| r.rect.offset = offset);
    }

    fn rect_collider_half_extent(&self, id: EntityId) -> Vector2 {
        self.read(id, |r| r.rect.size)
    }

    fn rect_collider_set_half_extent(&self, id: EntityId, half_extent: Vector2) {
        self.write(id, |r| r.rect.size = half_extent);
    }

    fn rect_collider_density(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.rect.density)
    }

    fn rect_collider_set_density(&self, id: EntityId, density: f32) {
        self.write(id, |r| r.rect.density = density);
    }

    fn rect_collider_friction(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.rect.friction)
    }

    fn rect_collider_set_friction(&self, id: EntityId, friction: f32) {
        self.write(id, |r| r.rect.friction = friction);
    }

    fn rect_collider_restitution(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.rect.restitution)
    }

    fn rect_collider_set_restitution(&self, id: EntityId, restitution: f32) {
        self.write(id, |r| r.rect.restitution = restitution);
    }

    fn rect_collider_restitution_threshold(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.rect.restitution_threshold)
    }

    fn rect_collider_set_restitution_threshold(&self, id: EntityId, threshold: f32) {
        self.write(id, |r| r.rect.restitution_threshold = threshold);
    }

    fn circle_collider_offset(&self, id: EntityId) -> Vector2 {
        self.read(id, |r| r.circle.offset)
    }

    fn circle_collider_set_offset(&self, id: EntityId, offset: Vector2) {
        self.write(id, |r| r.circle.offset = offset);
    }

    fn circle_collider_radius(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.circle.radius)
    }

    fn circle_collider_set_radius(&self, id: EntityId, radius: f32) {
        self.write(id, |r| r.circle.radius = radius);
    }

    fn circle_collider_density(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.circle.density)
    }

    fn circle_collider_set_density(&self, id: EntityId, density: f32) {
        self.write(id, |r| r.circle.density = density);
    }

    fn circle_collider_friction(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.circle.friction)
    }

    fn circle_collider_set_friction(&self, id: EntityId, friction: f32) {
        self.write(id, |r| r.circle.friction = friction);
    }

    fn circle_collider_restitution(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.circle.restitution)
    }

    fn circle_collider_set_restitution(&self, id: EntityId, restitution: f32) {
        self.write(id, |r| r.circle.restitution = restitution);
    }

    fn circle_collider_restitution_threshold(&self, id: EntityId) -> f32 {
        self.read(id, |r| r.circle.restitution_threshold)
    }

    fn circle_collider_set_restitution_threshold(&self, id: EntityId, threshold: f32) {
        self.write(id, |r| r.circle.restitution_threshold = threshold);
    }

    fn supports_runtime_shape_mutation(&self) -> bool {
        self.shape_mutation.get()
    }
}
