//! 2D physics components
//!
//! Forces, impulses and torques are commands; velocities are queries. Body
//! type, fixed rotation and every collider property are readable, but their
//! setters only reach the host when it reports
//! [`HostCalls::supports_runtime_shape_mutation`](crate::HostCalls::supports_runtime_shape_mutation).
//! Otherwise they are no-ops.

use super::{component_wrapper, forward_shape_setter, Component};
use crate::error::ScriptError;
use crate::ffi::ComponentKind;
use djinn_core::math::Vector2;
use serde::{Deserialize, Serialize};

/// How the physics world moves a body.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum BodyType {
    #[default]
    Static = 0,
    Dynamic = 1,
    Kinematic = 2,
}

impl TryFrom<i32> for BodyType {
    type Error = ScriptError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(BodyType::Static),
            1 => Ok(BodyType::Dynamic),
            2 => Ok(BodyType::Kinematic),
            other => Err(ScriptError::UnknownBodyType(other)),
        }
    }
}

impl From<BodyType> for i32 {
    fn from(body_type: BodyType) -> Self {
        body_type as i32
    }
}

component_wrapper!(RigidBody2D, ComponentKind::RigidBody2D);

impl RigidBody2D {
    /// Apply an impulse at the centre of mass. `wake` rouses a sleeping body.
    pub fn apply_linear_impulse(&self, impulse: Vector2, wake: bool) {
        self.entity
            .host()
            .rigid_body_apply_linear_impulse(self.entity.id(), impulse, wake);
    }

    /// Apply a force at the centre of mass for the next physics step.
    pub fn apply_force(&self, force: Vector2, wake: bool) {
        self.entity
            .host()
            .rigid_body_apply_force(self.entity.id(), force, wake);
    }

    pub fn apply_torque(&self, torque: f32, wake: bool) {
        self.entity
            .host()
            .rigid_body_apply_torque(self.entity.id(), torque, wake);
    }

    pub fn velocity(&self) -> Vector2 {
        self.entity.host().rigid_body_velocity(self.entity.id())
    }

    pub fn angular_velocity(&self) -> f32 {
        self.entity.host().rigid_body_angular_velocity(self.entity.id())
    }

    pub fn body_type(&self) -> BodyType {
        self.entity.host().rigid_body_body_type(self.entity.id())
    }

    pub fn set_body_type(&self, body_type: BodyType) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "body_type", |host, id| {
            host.rigid_body_set_body_type(id, body_type)
        });
    }

    pub fn fixed_rotation(&self) -> bool {
        self.entity.host().rigid_body_fixed_rotation(self.entity.id())
    }

    pub fn set_fixed_rotation(&self, fixed: bool) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "fixed_rotation", |host, id| {
            host.rigid_body_set_fixed_rotation(id, fixed)
        });
    }
}

component_wrapper!(
    /// Axis-aligned box collider, sized by half extents.
    RectCollider,
    ComponentKind::RectCollider
);

impl RectCollider {
    pub fn offset(&self) -> Vector2 {
        self.entity.host().rect_collider_offset(self.entity.id())
    }

    pub fn set_offset(&self, offset: Vector2) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "offset", |host, id| {
            host.rect_collider_set_offset(id, offset)
        });
    }

    pub fn half_extent(&self) -> Vector2 {
        self.entity.host().rect_collider_half_extent(self.entity.id())
    }

    pub fn set_half_extent(&self, half_extent: Vector2) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "half_extent", |host, id| {
            host.rect_collider_set_half_extent(id, half_extent)
        });
    }

    pub fn density(&self) -> f32 {
        self.entity.host().rect_collider_density(self.entity.id())
    }

    pub fn set_density(&self, density: f32) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "density", |host, id| {
            host.rect_collider_set_density(id, density)
        });
    }

    pub fn friction(&self) -> f32 {
        self.entity.host().rect_collider_friction(self.entity.id())
    }

    pub fn set_friction(&self, friction: f32) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "friction", |host, id| {
            host.rect_collider_set_friction(id, friction)
        });
    }

    pub fn restitution(&self) -> f32 {
        self.entity.host().rect_collider_restitution(self.entity.id())
    }

    pub fn set_restitution(&self, restitution: f32) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "restitution", |host, id| {
            host.rect_collider_set_restitution(id, restitution)
        });
    }

    pub fn restitution_threshold(&self) -> f32 {
        self.entity
            .host()
            .rect_collider_restitution_threshold(self.entity.id())
    }

    pub fn set_restitution_threshold(&self, threshold: f32) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "restitution_threshold", |host, id| {
            host.rect_collider_set_restitution_threshold(id, threshold)
        });
    }
}

component_wrapper!(CircleCollider, ComponentKind::CircleCollider);

impl CircleCollider {
    pub fn offset(&self) -> Vector2 {
        self.entity.host().circle_collider_offset(self.entity.id())
    }

    pub fn set_offset(&self, offset: Vector2) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "offset", |host, id| {
            host.circle_collider_set_offset(id, offset)
        });
    }

    pub fn radius(&self) -> f32 {
        self.entity.host().circle_collider_radius(self.entity.id())
    }

    pub fn set_radius(&self, radius: f32) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "radius", |host, id| {
            host.circle_collider_set_radius(id, radius)
        });
    }

    pub fn density(&self) -> f32 {
        self.entity.host().circle_collider_density(self.entity.id())
    }

    pub fn set_density(&self, density: f32) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "density", |host, id| {
            host.circle_collider_set_density(id, density)
        });
    }

    pub fn friction(&self) -> f32 {
        self.entity.host().circle_collider_friction(self.entity.id())
    }

    pub fn set_friction(&self, friction: f32) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "friction", |host, id| {
            host.circle_collider_set_friction(id, friction)
        });
    }

    pub fn restitution(&self) -> f32 {
        self.entity.host().circle_collider_restitution(self.entity.id())
    }

    pub fn set_restitution(&self, restitution: f32) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "restitution", |host, id| {
            host.circle_collider_set_restitution(id, restitution)
        });
    }

    pub fn restitution_threshold(&self) -> f32 {
        self.entity
            .host()
            .circle_collider_restitution_threshold(self.entity.id())
    }

    pub fn set_restitution_threshold(&self, threshold: f32) {
        forward_shape_setter(&self.entity, <Self as Component>::KIND, "restitution_threshold", |host, id| {
            host.circle_collider_set_restitution_threshold(id, threshold)
        });
    }
}
