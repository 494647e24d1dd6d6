//! Sum type over the supported shapes.

use skyburst_common::{Colour, Vector2D};

use crate::circle::Circle;
use crate::rectangle::Rectangle;
use crate::star::Star;

/// Any shape an explosion pattern can be derived from.
#[derive(Debug, Clone)]
pub enum Shape {
    /// 60-point circle
    Circle(Circle),
    /// Four-corner rectangle
    Rectangle(Rectangle),
    /// Five-point star
    Star(Star),
}

impl Shape {
    /// Ordered vertex list.
    pub fn vertices(&self) -> &[Vector2D] {
        match self {
            Self::Circle(c) => c.vertices(),
            Self::Rectangle(r) => r.vertices(),
            Self::Star(s) => s.vertices(),
        }
    }

    /// Fill colour.
    #[must_use]
    pub fn colour(&self) -> Colour {
        match self {
            Self::Circle(c) => c.colour(),
            Self::Rectangle(r) => r.colour(),
            Self::Star(s) => s.colour(),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}

impl From<Star> for Shape {
    fn from(s: Star) -> Self {
        Self::Star(s)
    }
}
