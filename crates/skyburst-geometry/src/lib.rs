//! # Skyburst Geometry
//!
//! Pure vertex geometry for the shapes explosion patterns are derived from.
//!
//! This crate provides:
//! - `Circle`: 60 evenly spaced points, computed lazily
//! - `Rectangle`: 4 corners from a signed origin and extent
//! - `Star`: 5 points starting straight up
//! - `Shape`: sum type over the three
//! - Polygon helpers for centroid and direction extraction

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod circle;
pub mod polygon;
pub mod rectangle;
pub mod shape;
pub mod star;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::circle::*;
    pub use crate::polygon::*;
    pub use crate::rectangle::*;
    pub use crate::shape::*;
    pub use crate::star::*;
}

pub use prelude::*;
