use crate::movement::{body_mass, quadratic_drag, DirectionKeys, GRAVITY};
use djinn_core::math::Vector3;
use djinn_script::{Entity, RigidBody2D, Script, Transform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub input_strength: f32,
    pub drag: f32,
    /// Cancel the world's gravity with an equal upward force.
    pub ignore_gravity: bool,
    /// WASD instead of the arrow keys.
    pub wasd: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            input_strength: 10.0,
            drag: 0.1,
            ignore_gravity: false,
            wasd: false,
        }
    }
}

/// Keyboard-steered body with quadratic drag.
///
/// Vertical input is twice as strong as horizontal, enough to climb against
/// gravity.
pub struct Player {
    entity: Entity,
    config: PlayerConfig,
    transform: Option<Transform>,
    body: Option<RigidBody2D>,
}

impl Player {
    pub const CLASS_NAME: &'static str = "Bud.Examples.Player";

    pub fn new(entity: Entity, config: PlayerConfig) -> Self {
        Self {
            entity,
            config,
            transform: None,
            body: None,
        }
    }

    /// Current translation, or zero before `on_create`.
    pub fn position(&self) -> Vector3 {
        self.transform
            .as_ref()
            .map(Transform::translation)
            .unwrap_or_default()
    }
}

impl Script for Player {
    fn on_create(&mut self) {
        self.transform = self.entity.get_component::<Transform>();
        self.body = self.entity.get_component::<RigidBody2D>();
        if self.transform.is_none() || self.body.is_none() {
            self.entity
                .log()
                .warn("Player needs Transform and RigidBody2D components");
        }
    }

    fn on_early_update(&mut self, _dt: f32) {
        let (Some(transform), Some(body)) = (&self.transform, &self.body) else {
            return;
        };

        let keys = DirectionKeys::select(self.config.wasd);
        let mut force = keys.direction(&self.entity.input());
        force.normalise();
        force.y *= 2.0;
        force *= self.config.input_strength;

        if self.config.ignore_gravity {
            force.y += GRAVITY * body_mass(&self.entity, transform);
        }

        force += quadratic_drag(body.velocity(), self.config.drag);
        body.apply_force(force, true);
    }
}
