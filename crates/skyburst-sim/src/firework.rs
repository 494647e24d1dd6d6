//! Firework state machine.
//!
//! A firework goes through four states:
//!
//! ```text
//! Unlaunched --launch()--> Flying --launcher expires--> Exploded
//! Exploded --last particle expires--> Finished
//! ```
//!
//! While flying, a single launcher particle rises until its lifetime runs
//! out. It then bursts into the particles its [`ExplosionPattern`] asks for,
//! each starting from the launcher's final position and velocity. Exploding
//! happens exactly once.
//!
//! # Example
//!
//! ```
//! use skyburst_common::Colour;
//! use skyburst_sim::firework::{Firework, FireworkState};
//! use skyburst_sim::pattern::ExplosionPattern;
//!
//! let mut firework = Firework::builder(800.0, 600.0)
//!     .colour(Colour::new(255, 180, 40))
//!     .pattern(ExplosionPattern::uniform())
//!     .build()
//!     .unwrap();
//!
//! firework.launch();
//! assert_eq!(firework.state(), FireworkState::Flying);
//! ```

use std::num::NonZeroU32;

use fastrand::Rng;
use rayon::prelude::*;
use skyburst_common::{Colour, SkyburstError, SkyburstResult, Vector2D};
use skyburst_geometry::Circle;
use tracing::{debug, trace};

use crate::particle::{Particle, MARKER_RADIUS};
use crate::pattern::ExplosionPattern;

/// Shortest launcher lifetime in ticks.
pub const LAUNCHER_LIFETIME_MIN: u32 = 45;
/// Longest launcher lifetime in ticks.
pub const LAUNCHER_LIFETIME_MAX: u32 = 70;
/// Lifetime of every particle spawned by an explosion.
pub const PARTICLE_LIFETIME: u32 = 120;
/// Above this many particles, per-particle updates run on the rayon pool.
pub const PARALLEL_PARTICLE_THRESHOLD: usize = 200;

fn ticks(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
}

/// Where a firework is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FireworkState {
    /// Constructed, no launcher yet
    Unlaunched,
    /// Launcher rising
    Flying,
    /// Burst, particles still alive
    Exploded,
    /// Burst and every particle expired
    Finished,
}

/// A single firework: one launcher, one pattern, and its burst particles.
#[derive(Debug)]
pub struct Firework {
    width: f32,
    height: f32,
    colour: Colour,
    pattern: ExplosionPattern,
    rng: Rng,
    marker: Circle,
    launcher: Option<Particle>,
    particles: Vec<Particle>,
    exploded: bool,
}

impl Firework {
    /// Starts building a firework for a field of the given size.
    #[must_use]
    pub fn builder(width: f32, height: f32) -> FireworkBuilder {
        FireworkBuilder::new(width, height)
    }

    /// Unlaunched firework; [`Firework::launch`] picks a random x and lifetime.
    pub fn new(
        width: f32,
        height: f32,
        colour: Colour,
        pattern: ExplosionPattern,
    ) -> SkyburstResult<Self> {
        Self::builder(width, height)
            .colour(colour)
            .pattern(pattern)
            .build()
    }

    /// Firework whose launcher already exists at `position` with `lifetime` ticks.
    pub fn with_launch(
        width: f32,
        height: f32,
        position: Vector2D,
        colour: Colour,
        lifetime: i32,
        pattern: ExplosionPattern,
    ) -> SkyburstResult<Self> {
        Self::builder(width, height)
            .colour(colour)
            .pattern(pattern)
            .launch_at(position, lifetime)
            .build()
    }

    /// Field width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Field height. Random launches start here.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Colour of the launcher and every particle.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// The explosion pattern.
    #[must_use]
    pub const fn pattern(&self) -> &ExplosionPattern {
        &self.pattern
    }

    /// True once the firework has burst. Never reverts.
    #[must_use]
    pub const fn exploded(&self) -> bool {
        self.exploded
    }

    /// The launcher while flying.
    #[must_use]
    pub const fn launcher(&self) -> Option<&Particle> {
        self.launcher.as_ref()
    }

    /// Live burst particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> FireworkState {
        match (self.exploded, self.launcher.is_some()) {
            (true, _) if self.particles.is_empty() => FireworkState::Finished,
            (true, _) => FireworkState::Exploded,
            (false, true) => FireworkState::Flying,
            (false, false) => FireworkState::Unlaunched,
        }
    }

    /// True when exploded with no particles left.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.exploded && self.particles.is_empty()
    }

    /// Creates the launcher at a random x along the bottom edge with a
    /// random lifetime. No-op once launched.
    pub fn launch(&mut self) {
        if self.launcher.is_some() || self.exploded {
            return;
        }
        let lifetime = self.rng.u32(LAUNCHER_LIFETIME_MIN..=LAUNCHER_LIFETIME_MAX);
        let x = self.rng.f32() * self.width;
        self.create_launcher(Vector2D::new(x, self.height), ticks(lifetime));
    }

    /// Advances one tick.
    ///
    /// Ages the launcher and bursts when it expires. Once exploded, updates
    /// every particle (in parallel above [`PARALLEL_PARTICLE_THRESHOLD`]),
    /// then removes the expired ones in a separate sequential pass.
    pub fn update(&mut self) {
        if !self.exploded {
            let Some(launcher) = self.launcher.as_mut() else {
                return;
            };
            launcher.update();
            if launcher.is_done() {
                self.explode();
            }
        }

        if self.exploded && !self.particles.is_empty() {
            self.update_particles();
        }
    }

    fn create_launcher(&mut self, position: Vector2D, lifetime: NonZeroU32) {
        let mut launcher = Particle::with_marker(position, lifetime, &self.marker);
        launcher.apply_velocity(self.pattern.launch_velocity());
        debug!(
            x = position.x,
            y = position.y,
            lifetime = lifetime.get(),
            pattern = self.pattern.name(),
            "Firework launched"
        );
        self.launcher = Some(launcher);
    }

    fn explode(&mut self) {
        let Some(launcher) = self.launcher.take() else {
            return;
        };
        self.exploded = true;

        let origin = launcher.position();
        let base_velocity = launcher.velocity();
        let count = self.pattern.number_of_particles();

        self.particles.reserve(count as usize);
        for _ in 0..count {
            let mut particle =
                Particle::with_marker(origin, ticks(PARTICLE_LIFETIME), &self.marker);
            particle.apply_velocity(base_velocity + self.pattern.next_explosion_velocity());
            self.particles.push(particle);
        }

        debug!(
            x = origin.x,
            y = origin.y,
            particles = count,
            "Firework exploded"
        );
    }

    fn update_particles(&mut self) {
        if self.particles.len() > PARALLEL_PARTICLE_THRESHOLD {
            self.particles.par_iter_mut().for_each(Particle::update);
        } else {
            self.particles.iter_mut().for_each(Particle::update);
        }

        let before = self.particles.len();
        self.particles.retain(|p| !p.is_done());
        trace!(
            alive = self.particles.len(),
            expired = before - self.particles.len(),
            "Particles updated"
        );
    }
}

/// Builder for [`Firework`].
///
/// The pattern is required; everything else has a default (white, random
/// launch, entropy-seeded random source).
#[derive(Debug)]
pub struct FireworkBuilder {
    width: f32,
    height: f32,
    colour: Colour,
    pattern: Option<ExplosionPattern>,
    launch: Option<(Vector2D, i32)>,
    seed: Option<u64>,
}

impl FireworkBuilder {
    /// New builder for a field of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            colour: Colour::WHITE,
            pattern: None,
            launch: None,
            seed: None,
        }
    }

    /// Sets the colour.
    pub fn colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    /// Sets the explosion pattern.
    pub fn pattern(mut self, pattern: impl Into<ExplosionPattern>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Launches immediately from `position` with a launcher lifetime in ticks.
    pub fn launch_at(mut self, position: Vector2D, lifetime: i32) -> Self {
        self.launch = Some((position, lifetime));
        self
    }

    /// Seeds the firework's random source (launch position and lifetime).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates and builds.
    pub fn build(self) -> SkyburstResult<Firework> {
        let pattern = self
            .pattern
            .ok_or(SkyburstError::MissingRequiredValue("pattern"))?;

        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(SkyburstError::invalid(format!(
                "field width and height must be greater than zero, got {}x{}",
                self.width, self.height
            )));
        }

        let marker = Circle::new(Vector2D::ZERO, MARKER_RADIUS, self.colour)?;
        let rng = self.seed.map_or_else(Rng::new, Rng::with_seed);

        let mut firework = Firework {
            width: self.width,
            height: self.height,
            colour: self.colour,
            pattern,
            rng,
            marker,
            launcher: None,
            particles: Vec::new(),
            exploded: false,
        };

        if let Some((position, lifetime)) = self.launch {
            let lifetime = u32::try_from(lifetime)
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or_else(|| {
                    SkyburstError::invalid(format!(
                        "launcher lifetime must be greater than zero, got {lifetime}"
                    ))
                })?;

            let inside = (0.0..=firework.width).contains(&position.x)
                && (0.0..=firework.height).contains(&position.y);
            if !inside {
                return Err(SkyburstError::invalid(format!(
                    "launch position {position} is outside the {}x{} field",
                    firework.width, firework.height
                )));
            }

            firework.create_launcher(position, lifetime);
        }

        Ok(firework)
    }
}
