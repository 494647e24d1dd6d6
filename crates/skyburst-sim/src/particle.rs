//! Decaying point particle with a circular marker.
//!
//! Units are pixels and ticks. The y axis points down, so gravity is
//! a positive y increment.

use std::num::NonZeroU32;

use skyburst_common::{Colour, SkyburstError, SkyburstResult, Vector2D};
use skyburst_geometry::Circle;

/// Radius of the circle drawn for every particle.
pub const MARKER_RADIUS: f32 = 3.0;

/// Acceleration set by [`Particle::apply_gravity`].
pub const GRAVITY: Vector2D = Vector2D::new(0.0, 0.2);

/// Velocity increment applied on every [`Particle::update`].
pub const FRAME_GRAVITY: Vector2D = Vector2D::new(0.0, 0.1);

/// A single decaying physical point.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Vector2D,
    velocity: Vector2D,
    acceleration: Vector2D,
    colour: Colour,
    remaining_lifetime: i32,
    marker: Circle,
}

impl Particle {
    /// Creates a particle at rest. `lifetime` is in ticks and must be positive.
    pub fn new(position: Vector2D, colour: Colour, lifetime: i32) -> SkyburstResult<Self> {
        if lifetime <= 0 {
            return Err(SkyburstError::invalid(format!(
                "particle lifetime must be greater than zero, got {lifetime}"
            )));
        }
        let marker = Circle::new(position, MARKER_RADIUS, colour)?;
        Ok(Self {
            position,
            velocity: Vector2D::ZERO,
            acceleration: Vector2D::ZERO,
            colour,
            remaining_lifetime: lifetime,
            marker,
        })
    }

    /// Creates a particle at rest that reuses an already validated marker
    /// shape (radius and colour), moved to `position`.
    #[must_use]
    pub fn with_marker(position: Vector2D, lifetime: NonZeroU32, marker: &Circle) -> Self {
        let mut marker = marker.clone();
        marker.move_to(position);
        Self {
            position,
            velocity: Vector2D::ZERO,
            acceleration: Vector2D::ZERO,
            colour: marker.colour(),
            remaining_lifetime: i32::try_from(lifetime.get()).unwrap_or(i32::MAX),
            marker,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Vector2D {
        self.position
    }

    /// Current velocity.
    #[must_use]
    pub const fn velocity(&self) -> Vector2D {
        self.velocity
    }

    /// Acceleration set by [`Particle::apply_gravity`]. Not integrated by `update`.
    #[must_use]
    pub const fn acceleration(&self) -> Vector2D {
        self.acceleration
    }

    /// Colour.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// Ticks left before the particle is done.
    #[must_use]
    pub const fn remaining_lifetime(&self) -> i32 {
        self.remaining_lifetime
    }

    /// Marker radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.marker.radius()
    }

    /// Circle centred on the current position.
    #[must_use]
    pub const fn marker(&self) -> &Circle {
        &self.marker
    }

    /// True once the lifetime has run out.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.remaining_lifetime <= 0
    }

    /// Sets the acceleration to [`GRAVITY`].
    pub fn apply_gravity(&mut self) {
        self.acceleration = GRAVITY;
    }

    /// Adds `velocity` to the current velocity. Additive across calls.
    pub fn apply_velocity(&mut self, velocity: Vector2D) {
        self.velocity = self.velocity + velocity;
    }

    /// Advances one tick. No-op once done.
    pub fn update(&mut self) {
        if self.is_done() {
            return;
        }
        self.velocity = self.velocity + FRAME_GRAVITY;
        self.position = self.position + self.velocity;
        self.remaining_lifetime -= 1;
        self.marker.move_to(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(lifetime: i32) -> Particle {
        Particle::new(Vector2D::new(10.0, 20.0), Colour::WHITE, lifetime).expect("particle")
    }

    #[test]
    fn test_rejects_non_positive_lifetime() {
        for lifetime in [0, -5] {
            let err = Particle::new(Vector2D::ZERO, Colour::WHITE, lifetime);
            assert!(matches!(err, Err(SkyburstError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_update_integrates_frame_gravity() {
        let mut p = particle(10);
        p.apply_velocity(Vector2D::new(1.0, -2.0));
        p.update();

        assert!(p.velocity().approx_eq(Vector2D::new(1.0, -1.9), 1e-6));
        assert!(p.position().approx_eq(Vector2D::new(11.0, 18.1), 1e-5));
        assert_eq!(p.remaining_lifetime(), 9);
        assert_eq!(p.marker().center(), p.position());
    }

    #[test]
    fn test_apply_velocity_is_additive() {
        let mut p = particle(1);
        p.apply_velocity(Vector2D::new(1.0, 1.0));
        p.apply_velocity(Vector2D::new(2.0, -3.0));
        assert_eq!(p.velocity(), Vector2D::new(3.0, -2.0));
    }

    #[test]
    fn test_apply_gravity_sets_acceleration_only() {
        let mut p = particle(3);
        p.apply_gravity();
        assert_eq!(p.acceleration(), GRAVITY);
        p.update();
        // update only adds the per-frame increment
        assert!(p.velocity().approx_eq(FRAME_GRAVITY, 1e-6));
    }

    #[test]
    fn test_done_particle_stops_moving() {
        let mut p = particle(2);
        p.update();
        p.update();
        assert!(p.is_done());

        let frozen = p.position();
        p.update();
        assert_eq!(p.position(), frozen);
        assert_eq!(p.remaining_lifetime(), 0);
    }

    #[test]
    fn test_with_marker_reuses_shape() {
        let template = Circle::new(Vector2D::ZERO, MARKER_RADIUS, Colour::new(9, 8, 7))
            .expect("circle");
        let lifetime = NonZeroU32::new(4).expect("non-zero");
        let p = Particle::with_marker(Vector2D::new(5.0, 6.0), lifetime, &template);

        assert_eq!(p.colour(), Colour::new(9, 8, 7));
        assert_eq!(p.radius(), MARKER_RADIUS);
        assert_eq!(p.marker().center(), Vector2D::new(5.0, 6.0));
        assert_eq!(p.remaining_lifetime(), 4);
    }
}
