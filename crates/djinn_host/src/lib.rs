//! Djinn Host Layer
//!
//! A reference in-process engine host for the scripting API:
//! - [`SceneHost`]: stores component state and answers every [`HostCalls`]
//!   method; physics commands are recorded, never simulated
//! - [`EntityBuilder`]: assembles entities before they are spawned
//! - [`ScriptEngine`]: script class registry and per-frame lifecycle driver
//! - [`Settings`]: runtime configuration
//!
//! [`HostCalls`]: djinn_script::HostCalls

pub mod builder;
pub mod components;
pub mod engine;
pub mod error;
pub mod scene;
pub mod settings;

pub use builder::{EntityBuilder, SceneComponent};
pub use components::{
    CameraData, CircleColliderData, CircleData, RectColliderData, RigidBodyData, ScriptData,
    SpriteData, TransformData,
};
pub use engine::ScriptEngine;
pub use error::EngineError;
pub use scene::{EntityRecord, PhysicsCommand, SceneHost};
pub use settings::Settings;
