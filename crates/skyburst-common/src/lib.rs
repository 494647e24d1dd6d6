//! # Skyburst Common
//!
//! Value types and shared abstractions for the Skyburst fireworks simulation.
//!
//! This crate provides the foundational types used across all Skyburst crates:
//! - `Vector2D` for positions, velocities and directions
//! - `Colour` with saturating channel arithmetic
//! - The error taxonomy raised by fallible constructors
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod colour;
pub mod error;
pub mod vector;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::colour::*;
    pub use crate::error::*;
    pub use crate::vector::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_exports_value_types() {
        let v = Vector2D::new(3.0, 4.0);
        let c = Colour::new(10, 20, 30);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(c.green(), 20);
    }

    #[test]
    fn test_divide_by_zero_is_reported() {
        let err = Vector2D::new(1.0, 1.0).try_div(0.0);
        assert!(matches!(err, Err(SkyburstError::DivideByZero(_))));
    }
}
