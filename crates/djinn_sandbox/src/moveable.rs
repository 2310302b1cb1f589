use crate::movement::{body_mass, quadratic_drag, DirectionKeys, GRAVITY};
use djinn_core::math::Vector3;
use djinn_script::{Entity, RigidBody2D, Script, Transform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveableConfig {
    pub input_strength: f32,
    pub drag: f32,
    pub affected_by_gravity: bool,
    pub wasd: bool,
}

impl Default for MoveableConfig {
    fn default() -> Self {
        Self {
            input_strength: 10.0,
            drag: 0.1,
            affected_by_gravity: false,
            wasd: true,
        }
    }
}

/// Like [`Player`](crate::Player), but gravity is opt-in and applied by the
/// script itself.
pub struct Moveable {
    entity: Entity,
    config: MoveableConfig,
    transform: Option<Transform>,
    body: Option<RigidBody2D>,
}

impl Moveable {
    pub const CLASS_NAME: &'static str = "Bud.Examples.Moveable";

    pub fn new(entity: Entity, config: MoveableConfig) -> Self {
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

impl Script for Moveable {
    fn on_create(&mut self) {
        self.transform = self.entity.get_component::<Transform>();
        self.body = self.entity.get_component::<RigidBody2D>();
        if self.transform.is_none() || self.body.is_none() {
            self.entity
                .log()
                .warn("Moveable needs Transform and RigidBody2D components");
        }
    }

    fn on_early_update(&mut self, _dt: f32) {
        let (Some(transform), Some(body)) = (&self.transform, &self.body) else {
            return;
        };

        let keys = DirectionKeys::select(self.config.wasd);
        let mut force = keys.direction(&self.entity.input());
        force.normalise();
        force *= self.config.input_strength;

        if self.config.affected_by_gravity {
            force.y *= 2.0;
            force.y -= GRAVITY * body_mass(&self.entity, transform);
        }

        force += quadratic_drag(body.velocity(), self.config.drag);
        body.apply_force(force, true);
    }
}
