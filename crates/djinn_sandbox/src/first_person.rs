use crate::movement::{mass_properties, quadratic_drag, GRAVITY};
use djinn_core::math::{Quaternion, Vector3};
use djinn_script::{Entity, KeyCode, RigidBody2D, Script, Transform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirstPersonConfig {
    pub input_strength_linear: f32,
    /// Angular acceleration from the turn keys, in radians per second squared.
    pub input_strength_rotation: f32,
    pub drag_linear: f32,
    pub drag_rotation: f32,
}

impl Default for FirstPersonConfig {
    fn default() -> Self {
        Self {
            input_strength_linear: 10.0,
            input_strength_rotation: 2.0,
            drag_linear: 0.1,
            drag_rotation: 0.1,
        }
    }
}

/// Top-down body steered relative to its own heading.
///
/// Q/E strafe, W/S move forward and back, A/D turn. The world's gravity is
/// cancelled so the body floats.
pub struct FirstPerson {
    entity: Entity,
    config: FirstPersonConfig,
    transform: Option<Transform>,
    body: Option<RigidBody2D>,
}

impl FirstPerson {
    pub const CLASS_NAME: &'static str = "Bud.Examples.FirstPerson";

    pub fn new(entity: Entity, config: FirstPersonConfig) -> Self {
        Self {
            entity,
            config,
            transform: None,
            body: None,
        }
    }

    pub fn position(&self) -> Vector3 {
        self.transform
            .as_ref()
            .map(Transform::translation)
            .unwrap_or_default()
    }
}

impl Script for FirstPerson {
    fn on_create(&mut self) {
        self.transform = self.entity.get_component::<Transform>();
        self.body = self.entity.get_component::<RigidBody2D>();
        if self.transform.is_none() || self.body.is_none() {
            self.entity
                .log()
                .warn("FirstPerson needs Transform and RigidBody2D components");
        }
    }

    fn on_early_update(&mut self, _dt: f32) {
        let (Some(transform), Some(body)) = (&self.transform, &self.body) else {
            return;
        };
        let props = mass_properties(&self.entity, transform);
        let input = self.entity.input();

        let mut local = Vector3::ZERO;
        if input.is_key_down(KeyCode::Q) {
            local.x = -1.0;
        } else if input.is_key_down(KeyCode::E) {
            local.x = 1.0;
        }
        if input.is_key_down(KeyCode::W) {
            local.y = 1.0;
        } else if input.is_key_down(KeyCode::S) {
            local.y = -1.0;
        }
        local.normalise();
        local *= self.config.input_strength_linear;

        let heading = Quaternion::from_eulers(Vector3::new(0.0, 0.0, transform.eulers().z));
        let mut force = heading.rotate(local).xy();
        force.y += GRAVITY * props.mass;
        force += quadratic_drag(body.velocity(), self.config.drag_linear);
        body.apply_force(force, true);

        let turn = input.axis(KeyCode::D, KeyCode::A);
        let spin = body.angular_velocity();
        let torque = turn * self.config.input_strength_rotation * props.moment_of_inertia
            - spin * spin.abs() * self.config.drag_rotation;
        body.apply_torque(torque, true);
    }
}
