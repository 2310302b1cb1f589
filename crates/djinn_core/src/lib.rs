//! Djinn Core
//!
//! Value types shared by the scripting API and any host that serves it:
//! - Vector and quaternion math
//! - Keyboard and mouse codes
//! - Fixed-step frame clock

pub mod input;
pub mod math;
pub mod time;

pub use glam;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
