//! Five-point star.

use std::f32::consts::{FRAC_PI_2, TAU};

use skyburst_common::{Colour, SkyburstError, SkyburstResult, Vector2D};

/// Number of star points.
pub const STAR_POINT_COUNT: usize = 5;

/// Five points on a circle, the first pointing straight up.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    center: Vector2D,
    radius: f32,
    colour: Colour,
    vertices: Vec<Vector2D>,
}

impl Star {
    /// Creates a star. The radius must be strictly positive.
    pub fn new(center: Vector2D, radius: f32, colour: Colour) -> SkyburstResult<Self> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(SkyburstError::invalid(format!(
                "star radius must be greater than zero, got {radius}"
            )));
        }

        // -90° then 72° steps
        let step = TAU / STAR_POINT_COUNT as f32;
        let vertices = (0..STAR_POINT_COUNT)
            .map(|i| {
                let angle = -FRAC_PI_2 + i as f32 * step;
                Vector2D::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();

        Ok(Self {
            center,
            radius,
            colour,
            vertices,
        })
    }

    /// Center point.
    #[must_use]
    pub const fn center(&self) -> Vector2D {
        self.center
    }

    /// Circumradius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Fill colour.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// The five points.
    #[must_use]
    pub fn vertices(&self) -> &[Vector2D] {
        &self.vertices
    }
}
