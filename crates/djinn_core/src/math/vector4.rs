use super::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Four-component `f32` vector, mostly used for RGBA colours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn splat(scalar: f32) -> Self {
        Self::new(scalar, scalar, scalar, scalar)
    }

    pub const fn from_xyz(xyz: Vector3, w: f32) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    pub fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn norm_squared(self) -> f32 {
        glam::Vec4::from(self).length_squared()
    }

    pub fn norm(self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Scale to unit length in place. A zero vector is left unchanged.
    pub fn normalise(&mut self) {
        let norm = self.norm();
        if norm == 0.0 {
            return;
        }

        *self = (glam::Vec4::from(*self) / norm).into();
    }
}

impl Add for Vector4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        (glam::Vec4::from(self) + glam::Vec4::from(rhs)).into()
    }
}

impl Sub for Vector4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        (glam::Vec4::from(self) - glam::Vec4::from(rhs)).into()
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        (glam::Vec4::from(self) * scalar).into()
    }
}

impl From<glam::Vec4> for Vector4 {
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for glam::Vec4 {
    fn from(v: Vector4) -> Self {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}
