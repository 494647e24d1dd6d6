//! # Skyburst Sim
//!
//! Fireworks simulation: timed launches, explosions and particle decay.
//!
//! This crate handles:
//! - `Particle`: gravity-influenced point with a finite lifetime
//! - `ExplosionPattern`: particle count, launch velocity and burst velocities
//! - `Firework`: the launch → explode → decay state machine
//! - `FireworkEnvironment`: bulk updates with parallel fan-out and sequential reaping
//! - A read-only render view for the host
//!
//! The crate performs no I/O. Rendering, audio and input belong to the host.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod environment;
pub mod firework;
pub mod particle;
pub mod pattern;
pub mod render;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::environment::*;
    pub use crate::firework::*;
    pub use crate::particle::*;
    pub use crate::pattern::*;
    pub use crate::render::*;
}

pub use prelude::*;
