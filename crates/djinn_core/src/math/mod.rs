//! Script-facing math
//!
//! Plain `f32` value types with the semantics scripts rely on. Arithmetic is
//! delegated to `glam`; the wrappers keep a stable serde layout and the
//! zero-norm rules below.

mod quaternion;
mod rng;
mod vector2;
mod vector3;
mod vector4;

pub use quaternion::Quaternion;
pub use rng::DeterministicRng;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

use thiserror::Error;

/// Errors raised by the checked variants of math operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("cannot {operation} a quaternion with zero norm")]
    ZeroNorm { operation: &'static str },
}

/// Absolute-tolerance float comparison used by the tests of this crate and
/// its dependents.
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}
