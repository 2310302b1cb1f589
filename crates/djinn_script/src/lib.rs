//! Djinn Scripting API
//!
//! The gameplay-facing surface of the engine: entity handles, typed
//! component views and the script lifecycle, all layered over a single
//! host-call boundary.
//!
//! ## Architecture
//!
//! - **Boundary:** [`HostCalls`] is the complete catalog of calls into the
//!   host engine. Nothing in this crate stores component state.
//! - **Wrappers:** [`Entity`] and the [`components`] types turn each call into
//!   a getter, setter or command. Every access is one host round trip.
//! - **Scripts:** [`Script`] objects are created and ticked by the host; they
//!   reach the engine only through the wrappers they hold.
//!
//! Every wrapper carries the [`Host`] handle it was created from, so several
//! hosts can coexist in one process.

pub mod cache;
pub mod components;
pub mod entity;
pub mod error;
pub mod ffi;
pub mod input;
pub mod log;
pub mod script;
pub mod window;

#[cfg(test)]
pub(crate) mod test_host;

pub use cache::ComponentCache;
pub use components::{
    BodyType, Camera, Circle, CircleCollider, Component, ProjectionType, RectCollider, RigidBody2D,
    ScriptComponent, Sprite, Transform,
};
pub use entity::Entity;
pub use error::ScriptError;
pub use ffi::{ComponentKind, ComponentSet, EntityId, Host, HostCalls, LogLevel};
pub use input::Input;
pub use log::Log;
pub use script::{Script, ScriptObject};
pub use window::Window;

pub use djinn_core::input::{KeyCode, MouseCode};
pub use djinn_core::math::{Quaternion, Vector2, Vector3, Vector4};
