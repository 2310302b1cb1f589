use crate::movement::DirectionKeys;
use djinn_script::{Entity, RigidBody2D, Script};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WasdConfig {
    pub power: f32,
    /// Push with `impulse * dt` instead of a continuous force.
    pub use_impulse: bool,
}

impl Default for WasdConfig {
    fn default() -> Self {
        Self {
            power: 10.0,
            use_impulse: false,
        }
    }
}

/// Pushes its body around with the WASD keys.
pub struct Wasd {
    entity: Entity,
    config: WasdConfig,
    body: Option<RigidBody2D>,
}

impl Wasd {
    pub const CLASS_NAME: &'static str = "Bud.WASD";

    pub fn new(entity: Entity, config: WasdConfig) -> Self {
        Self {
            entity,
            config,
            body: None,
        }
    }

    pub fn config(&self) -> &WasdConfig {
        &self.config
    }
}

impl Script for Wasd {
    fn on_create(&mut self) {
        self.body = self.entity.get_component::<RigidBody2D>();
        if self.body.is_none() {
            self.entity.log().warn("WASD needs a RigidBody2D component");
        }
    }

    fn on_update(&mut self, dt: f32) {
        let Some(body) = &self.body else {
            return;
        };

        let push = DirectionKeys::WASD.direction(&self.entity.input()) * self.config.power;
        if self.config.use_impulse {
            body.apply_linear_impulse(push * dt, true);
        } else {
            body.apply_force(push, true);
        }
    }
}
