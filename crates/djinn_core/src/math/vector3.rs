use super::Vector2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Three-component `f32` vector.
///
/// `Vector3 * Vector3` is the component-wise (Hadamard) product, which is
/// what scripts use for per-axis scaling such as camera zoom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(scalar: f32) -> Self {
        Self {
            x: scalar,
            y: scalar,
            z: scalar,
        }
    }

    pub const fn from_xy(xy: Vector2, z: f32) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    pub fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn set_xy(&mut self, xy: Vector2) {
        self.x = xy.x;
        self.y = xy.y;
    }

    pub fn norm_squared(self) -> f32 {
        glam::Vec3::from(self).length_squared()
    }

    pub fn norm(self) -> f32 {
        self.norm_squared().sqrt()
    }

    pub fn dot(self, other: Self) -> f32 {
        glam::Vec3::from(self).dot(other.into())
    }

    pub fn cross(self, other: Self) -> Self {
        glam::Vec3::from(self).cross(other.into()).into()
    }

    /// Scale to unit length in place. A zero vector is left unchanged.
    pub fn normalise(&mut self) {
        let norm = self.norm();
        if norm == 0.0 {
            return;
        }

        *self = (glam::Vec3::from(*self) / norm).into();
    }

    pub fn normalised(mut self) -> Self {
        self.normalise();
        self
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        (glam::Vec3::from(self) + glam::Vec3::from(rhs)).into()
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        (glam::Vec3::from(self) - glam::Vec3::from(rhs)).into()
    }
}

impl Mul for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        (glam::Vec3::from(self) * glam::Vec3::from(rhs)).into()
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        (glam::Vec3::from(self) * scalar).into()
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, vector: Vector3) -> Vector3 {
        vector * self
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        (-glam::Vec3::from(self)).into()
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vector3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}
