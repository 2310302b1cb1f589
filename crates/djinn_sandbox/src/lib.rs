//! Djinn Sandbox
//!
//! Example gameplay scripts built on the scripting API:
//! - [`Wasd`]: force-driven WASD movement
//! - [`Player`] and [`Moveable`]: steering with drag and optional gravity
//!   handling
//! - [`FirstPerson`]: heading-relative movement and turning
//! - [`CameraFollow`]: a camera trailing a named entity
//! - [`MazeGenerator`]: seeded percolation mazes

pub mod camera_follow;
pub mod first_person;
pub mod maze;
pub mod moveable;
pub mod movement;
pub mod player;
pub mod wasd;

pub use camera_follow::{CameraFollow, CameraFollowConfig};
pub use first_person::{FirstPerson, FirstPersonConfig};
pub use maze::{MazeConfig, MazeGenerator};
pub use moveable::{Moveable, MoveableConfig};
pub use player::{Player, PlayerConfig};
pub use wasd::{Wasd, WasdConfig};

use djinn_host::{EngineError, ScriptEngine};
use serde::{Deserialize, Serialize};

/// Tunables for every sandbox script, one section per class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub wasd: WasdConfig,
    pub player: PlayerConfig,
    pub moveable: MoveableConfig,
    pub first_person: FirstPersonConfig,
    pub camera_follow: CameraFollowConfig,
    pub maze: MazeConfig,
}

/// Register every sandbox script with default tunables.
pub fn register_all(engine: &mut ScriptEngine) -> Result<(), EngineError> {
    register_all_with(engine, &SandboxConfig::default())
}

/// Register every sandbox script; each instance gets a copy of its section
/// of `config`.
pub fn register_all_with(engine: &mut ScriptEngine, config: &SandboxConfig) -> Result<(), EngineError> {
    let wasd = config.wasd.clone();
    engine.register(Wasd::CLASS_NAME, move |entity| Wasd::new(entity, wasd.clone()))?;

    let player = config.player.clone();
    engine.register(Player::CLASS_NAME, move |entity| {
        Player::new(entity, player.clone())
    })?;

    let moveable = config.moveable.clone();
    engine.register(Moveable::CLASS_NAME, move |entity| {
        Moveable::new(entity, moveable.clone())
    })?;

    let first_person = config.first_person.clone();
    engine.register(FirstPerson::CLASS_NAME, move |entity| {
        FirstPerson::new(entity, first_person.clone())
    })?;

    let camera_follow = config.camera_follow.clone();
    engine.register(CameraFollow::CLASS_NAME, move |entity| {
        CameraFollow::new(entity, camera_follow.clone())
    })?;

    let maze = config.maze.clone();
    engine.register(MazeGenerator::CLASS_NAME, move |entity| {
        MazeGenerator::new(entity, maze.clone())
    })?;

    tracing::debug!(classes = engine.class_names().count(), "sandbox scripts registered");
    Ok(())
}
