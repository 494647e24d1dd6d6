//! Two-dimensional vector used for positions, velocities and directions.
//!
//! Screen convention is y-down: negative `y` points up.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{SkyburstError, SkyburstResult};

/// Immutable 2D vector value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Vector2D {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vector2D {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or [`Vector2D::ZERO`] when the
    /// magnitude is zero. Never fails.
    #[must_use]
    pub fn normalize(self) -> Self {
        let m = self.magnitude();
        if m > 0.0 {
            Self::new(self.x / m, self.y / m)
        } else {
            Self::ZERO
        }
    }

    /// Divides by a float scalar. Exact zero is rejected.
    pub fn try_div(self, scalar: f32) -> SkyburstResult<Self> {
        if scalar == 0.0 {
            return Err(SkyburstError::DivideByZero("float scalar"));
        }
        Ok(Self::new(self.x / scalar, self.y / scalar))
    }

    /// Divides by an integer scalar. Zero is rejected.
    pub fn try_div_int(self, scalar: i32) -> SkyburstResult<Self> {
        if scalar == 0 {
            return Err(SkyburstError::DivideByZero("integer scalar"));
        }
        let s = scalar as f32;
        Ok(Self::new(self.x / s, self.y / s))
    }

    /// Returns true when both components are within `eps` of `other`.
    #[must_use]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2D> for f32 {
    type Output = Vector2D;

    fn mul(self, v: Vector2D) -> Vector2D {
        v * self
    }
}

impl Mul<i32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: i32) -> Self {
        self * scalar as f32
    }
}

impl From<Vec2> for Vector2D {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vec2 {
    fn from(v: Vector2D) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
