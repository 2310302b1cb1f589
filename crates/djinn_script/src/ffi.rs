//! Host call boundary
//!
//! Handle-based access to engine systems. [`HostCalls`] lists every call a
//! script can make into the engine; wrappers in this crate forward to it and
//! never validate, batch or retry.

use crate::components::{BodyType, ProjectionType};
use crate::script::ScriptObject;
use djinn_core::input::{KeyCode, MouseCode};
use djinn_core::math::{Vector2, Vector3, Vector4};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Opaque entity identifier issued by the host.
///
/// Uniqueness and lifetime belong to the host. Zero is reserved as the
/// "no entity" sentinel.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    pub const NULL: Self = Self(0);

    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    pub fn to_bits(self) -> u64 {
        self.0
    }

    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Closed set of component kinds a script can ask about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Transform,
    Sprite,
    Circle,
    Camera,
    Script,
    RigidBody2D,
    RectCollider,
    CircleCollider,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Transform,
        ComponentKind::Sprite,
        ComponentKind::Circle,
        ComponentKind::Camera,
        ComponentKind::Script,
        ComponentKind::RigidBody2D,
        ComponentKind::RectCollider,
        ComponentKind::CircleCollider,
    ];

    /// Bit position inside a [`ComponentSet`].
    pub const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ComponentKind::Transform => "TransformComponent",
            ComponentKind::Sprite => "SpriteComponent",
            ComponentKind::Circle => "CircleComponent",
            ComponentKind::Camera => "CameraComponent",
            ComponentKind::Script => "ScriptComponent",
            ComponentKind::RigidBody2D => "RigidBody2DComponent",
            ComponentKind::RectCollider => "RectColliderComponent",
            ComponentKind::CircleCollider => "CircleColliderComponent",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Presence bitset over [`ComponentKind`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ComponentSet(u16);

impl ComponentSet {
    pub const EMPTY: Self = Self(0);

    pub fn contains(self, kind: ComponentKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn insert(&mut self, kind: ComponentKind) {
        self.0 |= kind.bit();
    }

    pub fn remove(&mut self, kind: ComponentKind) {
        self.0 &= !kind.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = ComponentKind> {
        ComponentKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl FromIterator<ComponentKind> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = ComponentKind>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

/// Severity of a script log line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Info,
    Warn,
    Error,
    Critical,
}

/// Shared handle to the host a wrapper was issued by.
pub type Host = Rc<dyn HostCalls>;

/// The complete catalog of calls from scripts into the host engine.
///
/// Each method is a single synchronous round trip. Calls carrying an
/// [`EntityId`] the host does not know are the host's to reject or ignore.
/// Implementations must not call back into script code.
pub trait HostCalls {
    // ---------------------------------------------------------------------
    // Input
    fn input_is_key_down(&self, key: KeyCode) -> bool;
    fn input_is_mouse_button_down(&self, button: MouseCode) -> bool;
    fn input_mouse_position(&self) -> (f32, f32);

    fn input_mouse_x(&self) -> f32 {
        self.input_mouse_position().0
    }

    fn input_mouse_y(&self) -> f32 {
        self.input_mouse_position().1
    }

    // ---------------------------------------------------------------------
    // Logging
    fn log(&self, level: LogLevel, text: &str);

    // ---------------------------------------------------------------------
    // Window
    fn window_width(&self) -> f32;
    fn window_height(&self) -> f32;

    // ---------------------------------------------------------------------
    // Entity
    fn entity_has_component(&self, id: EntityId, kind: ComponentKind) -> bool;
    /// Returns [`EntityId::NULL`] when no entity carries `name`.
    fn entity_find_by_name(&self, name: &str) -> EntityId;
    fn entity_name(&self, id: EntityId) -> String;
    fn entity_script_instance(&self, id: EntityId) -> Option<ScriptObject>;

    // ---------------------------------------------------------------------
    // Transform
    fn transform_translation(&self, id: EntityId) -> Vector3;
    fn transform_set_translation(&self, id: EntityId, translation: Vector3);
    fn transform_eulers(&self, id: EntityId) -> Vector3;
    fn transform_set_eulers(&self, id: EntityId, eulers: Vector3);
    fn transform_scale(&self, id: EntityId) -> Vector3;
    fn transform_set_scale(&self, id: EntityId, scale: Vector3);

    // ---------------------------------------------------------------------
    // Sprite
    fn sprite_tint(&self, id: EntityId) -> Vector4;
    fn sprite_set_tint(&self, id: EntityId, tint: Vector4);

    // ---------------------------------------------------------------------
    // Circle
    fn circle_colour(&self, id: EntityId) -> Vector4;
    fn circle_set_colour(&self, id: EntityId, colour: Vector4);
    fn circle_thickness(&self, id: EntityId) -> f32;
    fn circle_set_thickness(&self, id: EntityId, thickness: f32);
    fn circle_fade(&self, id: EntityId) -> f32;
    fn circle_set_fade(&self, id: EntityId, fade: f32);

    // ---------------------------------------------------------------------
    // Camera
    fn camera_projection_type(&self, id: EntityId) -> ProjectionType;
    fn camera_set_projection_type(&self, id: EntityId, projection: ProjectionType);
    fn camera_vertical_fov(&self, id: EntityId) -> f32;
    fn camera_set_vertical_fov(&self, id: EntityId, fov: f32);
    fn camera_near_plane(&self, id: EntityId) -> f32;
    fn camera_set_near_plane(&self, id: EntityId, near: f32);
    fn camera_far_plane(&self, id: EntityId) -> f32;
    fn camera_set_far_plane(&self, id: EntityId, far: f32);
    fn camera_fixed_aspect_ratio(&self, id: EntityId) -> bool;
    fn camera_set_fixed_aspect_ratio(&self, id: EntityId, fixed: bool);

    // ---------------------------------------------------------------------
    // Script component
    fn script_component_name(&self, id: EntityId) -> String;

    // ---------------------------------------------------------------------
    // 2D rigid body
    fn rigid_body_apply_linear_impulse(&self, id: EntityId, impulse: Vector2, wake: bool);
    fn rigid_body_apply_force(&self, id: EntityId, force: Vector2, wake: bool);
    fn rigid_body_velocity(&self, id: EntityId) -> Vector2;
    fn rigid_body_apply_torque(&self, id: EntityId, torque: f32, wake: bool);
    fn rigid_body_angular_velocity(&self, id: EntityId) -> f32;
    fn rigid_body_body_type(&self, id: EntityId) -> BodyType;
    fn rigid_body_set_body_type(&self, id: EntityId, body_type: BodyType);
    fn rigid_body_fixed_rotation(&self, id: EntityId) -> bool;
    fn rigid_body_set_fixed_rotation(&self, id: EntityId, fixed: bool);

    // ---------------------------------------------------------------------
    // Rectangular collider
    fn rect_collider_offset(&self, id: EntityId) -> Vector2;
    fn rect_collider_set_offset(&self, id: EntityId, offset: Vector2);
    fn rect_collider_half_extent(&self, id: EntityId) -> Vector2;
    fn rect_collider_set_half_extent(&self, id: EntityId, half_extent: Vector2);
    fn rect_collider_density(&self, id: EntityId) -> f32;
    fn rect_collider_set_density(&self, id: EntityId, density: f32);
    fn rect_collider_friction(&self, id: EntityId) -> f32;
    fn rect_collider_set_friction(&self, id: EntityId, friction: f32);
    fn rect_collider_restitution(&self, id: EntityId) -> f32;
    fn rect_collider_set_restitution(&self, id: EntityId, restitution: f32);
    fn rect_collider_restitution_threshold(&self, id: EntityId) -> f32;
    fn rect_collider_set_restitution_threshold(&self, id: EntityId, threshold: f32);

    // ---------------------------------------------------------------------
    // Circular collider
    fn circle_collider_offset(&self, id: EntityId) -> Vector2;
    fn circle_collider_set_offset(&self, id: EntityId, offset: Vector2);
    fn circle_collider_radius(&self, id: EntityId) -> f32;
    fn circle_collider_set_radius(&self, id: EntityId, radius: f32);
    fn circle_collider_density(&self, id: EntityId) -> f32;
    fn circle_collider_set_density(&self, id: EntityId, density: f32);
    fn circle_collider_friction(&self, id: EntityId) -> f32;
    fn circle_collider_set_friction(&self, id: EntityId, friction: f32);
    fn circle_collider_restitution(&self, id: EntityId) -> f32;
    fn circle_collider_set_restitution(&self, id: EntityId, restitution: f32);
    fn circle_collider_restitution_threshold(&self, id: EntityId) -> f32;
    fn circle_collider_set_restitution_threshold(&self, id: EntityId, threshold: f32);

    // ---------------------------------------------------------------------
    // Capabilities

    /// Whether body-type, fixed-rotation and collider-shape setters take
    /// effect while the physics world is running. Hosts that must rebuild
    /// the physics world to change a shape leave this `false`, and the
    /// wrapper setters for those properties become no-ops.
    fn supports_runtime_shape_mutation(&self) -> bool {
        false
    }
}
