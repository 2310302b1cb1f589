use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Two-component `f32` vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(scalar: f32) -> Self {
        Self {
            x: scalar,
            y: scalar,
        }
    }

    pub fn norm_squared(self) -> f32 {
        glam::Vec2::from(self).length_squared()
    }

    pub fn norm(self) -> f32 {
        self.norm_squared().sqrt()
    }

    pub fn dot(self, other: Self) -> f32 {
        glam::Vec2::from(self).dot(other.into())
    }

    /// Scale to unit length in place. A zero vector is left unchanged.
    pub fn normalise(&mut self) {
        let norm = self.norm();
        if norm == 0.0 {
            return;
        }

        *self = (glam::Vec2::from(*self) / norm).into();
    }

    /// By-value form of [`Vector2::normalise`].
    pub fn normalised(mut self) -> Self {
        self.normalise();
        self
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        (glam::Vec2::from(self) + glam::Vec2::from(rhs)).into()
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        (glam::Vec2::from(self) - glam::Vec2::from(rhs)).into()
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        (glam::Vec2::from(self) * scalar).into()
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    fn mul(self, vector: Vector2) -> Vector2 {
        vector * self
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        (-glam::Vec2::from(self)).into()
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn normalise_zero_is_noop() {
        let mut v = Vector2::ZERO;
        v.normalise();
        assert_eq!(v, Vector2::ZERO);
    }

    #[test]
    fn normalise_gives_unit_length() {
        for v in [
            Vector2::new(3.0, 4.0),
            Vector2::new(-0.001, 0.0),
            Vector2::new(1.0e4, -2.5e3),
        ] {
            assert!(approx_eq(v.normalised().norm(), 1.0, 1e-6), "{v:?}");
        }
    }

    #[test]
    fn arithmetic() {
        let mut v = Vector2::new(1.0, 2.0) + Vector2::ONE - Vector2::new(0.5, 0.5);
        assert_eq!(v, Vector2::new(1.5, 2.5));
        v *= 2.0;
        assert_eq!(v, Vector2::new(3.0, 5.0));
        assert_eq!(-v, Vector2::new(-3.0, -5.0));
        assert_eq!(0.5 * v, Vector2::new(1.5, 2.5));
        assert_eq!(v.dot(Vector2::new(1.0, 1.0)), 8.0);
    }

    #[test]
    fn glam_conversion() {
        let g: glam::Vec2 = Vector2::new(1.0, -1.0).into();
        assert_eq!(Vector2::from(g), Vector2::new(1.0, -1.0));
    }
}
