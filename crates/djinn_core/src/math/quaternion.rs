use super::{MathError, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Hamilton quaternion `w + xi + yj + zk`.
///
/// Unlike the vector types, normalising or inverting a zero quaternion is a
/// fault: [`Quaternion::normalise`] and [`Quaternion::inverse`] panic. Use
/// the `try_` variants where a zero value is a legitimate input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Multiplicative identity, the zero rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    pub const fn from_parts(real: f32, imaginary: Vector3) -> Self {
        Self::new(real, imaginary.x, imaginary.y, imaginary.z)
    }

    /// Unit quaternion for the Euler angles (radians), applied z first, then
    /// y, then x (`Rx * Ry * Rz`).
    pub fn from_eulers(eulers: Vector3) -> Self {
        let (sx, cx) = (eulers.x * 0.5).sin_cos();
        let (sy, cy) = (eulers.y * 0.5).sin_cos();
        let (sz, cz) = (eulers.z * 0.5).sin_cos();

        Self::new(
            cx * cy * cz + sx * sy * sz,
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
        )
    }

    pub fn real(self) -> f32 {
        self.w
    }

    pub fn set_real(&mut self, real: f32) {
        self.w = real;
    }

    pub fn imaginary(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn set_imaginary(&mut self, imaginary: Vector3) {
        self.x = imaginary.x;
        self.y = imaginary.y;
        self.z = imaginary.z;
    }

    pub fn norm_squared(self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn norm(self) -> f32 {
        self.norm_squared().sqrt()
    }

    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Scale to unit norm in place.
    ///
    /// # Panics
    /// If the norm is zero.
    #[track_caller]
    pub fn normalise(&mut self) {
        if let Err(err) = self.try_normalise() {
            panic!("{err}");
        }
    }

    pub fn try_normalise(&mut self) -> Result<(), MathError> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(MathError::ZeroNorm {
                operation: "normalise",
            });
        }

        *self = *self * (1.0 / norm);
        Ok(())
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    /// If the norm is zero.
    #[track_caller]
    pub fn inverse(self) -> Self {
        match self.try_inverse() {
            Ok(inverse) => inverse,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_inverse(self) -> Result<Self, MathError> {
        let norm_squared = self.norm_squared();
        if norm_squared == 0.0 {
            return Err(MathError::ZeroNorm { operation: "invert" });
        }

        Ok(self.conjugate() * (1.0 / norm_squared))
    }

    /// Rotate `u` by this quaternion (`q u q*`). Only a rotation when `self`
    /// has unit norm.
    pub fn rotate(self, u: Vector3) -> Vector3 {
        let q = Self::from_parts(0.0, u);
        (self * q * self.conjugate()).imaginary()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.w * scalar, self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y + a.y * b.w + a.z * b.x - a.x * b.z,
            a.w * b.z + a.z * b.w + a.x * b.y - a.y * b.x,
        )
    }
}

impl From<glam::Quat> for Quaternion {
    fn from(q: glam::Quat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(q: Quaternion) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}
