//! Axis-aligned rectangle.

use skyburst_common::{Colour, Vector2D};

/// Axis-aligned rectangle given by an origin and a signed extent.
///
/// Negative width or height is allowed; the corners simply reflect the
/// signed extent and are not re-normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    colour: Colour,
    vertices: [Vector2D; 4],
}

impl Rectangle {
    /// Creates a rectangle.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32, colour: Colour) -> Self {
        let vertices = [
            Vector2D::new(x, y),
            Vector2D::new(x + width, y),
            Vector2D::new(x + width, y + height),
            Vector2D::new(x, y + height),
        ];
        Self {
            x,
            y,
            width,
            height,
            colour,
            vertices,
        }
    }

    /// Origin x.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Origin y.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Signed width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Signed height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Fill colour.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// Corners: top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub fn vertices(&self) -> &[Vector2D] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_order() {
        let r = Rectangle::new(50.0, 50.0, 100.0, 100.0, Colour::WHITE);
        assert_eq!(
            r.vertices(),
            &[
                Vector2D::new(50.0, 50.0),
                Vector2D::new(150.0, 50.0),
                Vector2D::new(150.0, 150.0),
                Vector2D::new(50.0, 150.0),
            ]
        );
    }

    #[test]
    fn test_negative_extent_is_kept() {
        let r = Rectangle::new(10.0, 10.0, -4.0, -2.0, Colour::BLACK);
        assert_eq!(r.vertices()[1], Vector2D::new(6.0, 10.0));
        assert_eq!(r.vertices()[2], Vector2D::new(6.0, 8.0));
    }
}
