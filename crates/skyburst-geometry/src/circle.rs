//! Circle approximated by a fixed number of perimeter points.

use std::f32::consts::TAU;
use std::sync::OnceLock;

use skyburst_common::{Colour, SkyburstError, SkyburstResult, Vector2D};

/// Number of perimeter points in a circle's vertex list.
pub const CIRCLE_POINT_COUNT: usize = 60;

/// Circle with a lazily computed vertex list.
///
/// Vertices are cached until the geometry changes via [`Circle::move_to`].
#[derive(Debug, Clone)]
pub struct Circle {
    center: Vector2D,
    radius: f32,
    colour: Colour,
    vertices: OnceLock<Vec<Vector2D>>,
}

impl Circle {
    /// Creates a circle. The radius must be strictly positive.
    pub fn new(center: Vector2D, radius: f32, colour: Colour) -> SkyburstResult<Self> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(SkyburstError::invalid(format!(
                "circle radius must be greater than zero, got {radius}"
            )));
        }
        Ok(Self {
            center,
            radius,
            colour,
            vertices: OnceLock::new(),
        })
    }

    /// Center point.
    #[must_use]
    pub const fn center(&self) -> Vector2D {
        self.center
    }

    /// Radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Fill colour.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// Moves the circle, invalidating the cached vertices if the center changed.
    pub fn move_to(&mut self, center: Vector2D) {
        if center != self.center {
            self.center = center;
            self.vertices = OnceLock::new();
        }
    }

    /// Perimeter points at angles `2π·i/60`, starting on the positive x axis.
    pub fn vertices(&self) -> &[Vector2D] {
        self.vertices
            .get_or_init(|| perimeter(self.center, self.radius, CIRCLE_POINT_COUNT))
    }
}

fn perimeter(center: Vector2D, radius: f32, n: usize) -> Vec<Vector2D> {
    let step = TAU / n as f32;
    (0..n)
        .map(|i| {
            let angle = i as f32 * step;
            Vector2D::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
