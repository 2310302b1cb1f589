//! Shared movement helpers
//!
//! Bodies are assumed to be unit shapes stretched by the transform scale, so
//! mass and moment of inertia follow from the collider density and the scale.

use djinn_core::math::Vector2;
use djinn_script::{CircleCollider, Entity, Input, KeyCode, RectCollider, Transform};
use std::f32::consts::PI;

/// Gravitational acceleration applied by the physics world.
pub const GRAVITY: f32 = 9.8;

/// Key bindings for four-way movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionKeys {
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
}

impl DirectionKeys {
    pub const WASD: Self = Self {
        left: KeyCode::A,
        right: KeyCode::D,
        up: KeyCode::W,
        down: KeyCode::S,
    };

    pub const ARROWS: Self = Self {
        left: KeyCode::Left,
        right: KeyCode::Right,
        up: KeyCode::Up,
        down: KeyCode::Down,
    };

    pub fn select(wasd: bool) -> Self {
        if wasd {
            Self::WASD
        } else {
            Self::ARROWS
        }
    }

    /// Unnormalised direction, each component in `{-1, 0, 1}`. Left wins over
    /// right and up wins over down when both are held.
    pub fn direction(&self, input: &Input<'_>) -> Vector2 {
        let mut direction = Vector2::ZERO;
        if input.is_key_down(self.left) {
            direction.x = -1.0;
        } else if input.is_key_down(self.right) {
            direction.x = 1.0;
        }
        if input.is_key_down(self.up) {
            direction.y = 1.0;
        } else if input.is_key_down(self.down) {
            direction.y = -1.0;
        }
        direction
    }
}

/// Mass and moment of inertia of a body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MassProperties {
    pub mass: f32,
    pub moment_of_inertia: f32,
}

/// Mass and moment from the entity's collider, preferring a circle collider.
/// Zero when the entity has neither collider.
pub fn mass_properties(entity: &Entity, transform: &Transform) -> MassProperties {
    let scale = transform.scale();
    let spread = scale.x * scale.x + scale.y * scale.y;

    if let Some(collider) = entity.get_component::<CircleCollider>() {
        let mass = collider.density() * PI * 0.25 * scale.x * scale.y;
        MassProperties {
            mass,
            moment_of_inertia: mass * spread / 16.0,
        }
    } else if let Some(collider) = entity.get_component::<RectCollider>() {
        let mass = collider.density() * scale.x * scale.y;
        MassProperties {
            mass,
            moment_of_inertia: mass * spread / 12.0,
        }
    } else {
        MassProperties::default()
    }
}

pub fn body_mass(entity: &Entity, transform: &Transform) -> f32 {
    mass_properties(entity, transform).mass
}

/// Quadratic drag, opposing the velocity.
pub fn quadratic_drag(velocity: Vector2, drag: f32) -> Vector2 {
    velocity * -velocity.norm() * drag
}
