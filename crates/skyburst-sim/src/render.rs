//! Read-only view handed to the rendering collaborator.
//!
//! The simulation never draws anything itself. A host either walks the
//! marker circles through a [`DrawTarget`] or uploads a flat
//! [`ParticleInstance`] buffer to the GPU.

use skyburst_geometry::Circle;

use crate::environment::FireworkEnvironment;
use crate::firework::Firework;
use crate::particle::Particle;

/// Anything that can draw a filled circle.
pub trait DrawTarget {
    /// Draws one particle marker.
    fn draw_circle(&mut self, circle: &Circle);
}

/// GPU-friendly particle instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    /// Position (x, y).
    pub position: [f32; 2],
    /// Marker radius.
    pub radius: f32,
    /// Keeps `colour` 16-byte aligned.
    pub _padding: f32,
    /// Colour with alpha.
    pub colour: [f32; 4],
}

impl ParticleInstance {
    /// Size in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Create from a particle.
    #[must_use]
    pub fn from_particle(particle: &Particle) -> Self {
        let position = particle.position();
        Self {
            position: [position.x, position.y],
            radius: particle.radius(),
            _padding: 0.0,
            colour: particle.colour().to_rgba_f32(),
        }
    }
}

impl Firework {
    /// The launcher (while flying) followed by every live particle.
    pub fn drawable_particles(&self) -> impl Iterator<Item = &Particle> {
        self.launcher().into_iter().chain(self.particles())
    }
}

impl FireworkEnvironment {
    /// Visits every launcher and particle marker.
    pub fn draw(&self, target: &mut impl DrawTarget) {
        for particle in self.items().iter().flat_map(Firework::drawable_particles) {
            target.draw_circle(particle.marker());
        }
    }

    /// Flat instance buffer of every launcher and particle.
    #[must_use]
    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.items()
            .iter()
            .flat_map(Firework::drawable_particles)
            .map(ParticleInstance::from_particle)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::ExplosionPattern;
    use skyburst_common::{Colour, Vector2D};

    #[derive(Default)]
    struct Recorder {
        centers: Vec<Vector2D>,
    }

    impl DrawTarget for Recorder {
        fn draw_circle(&mut self, circle: &Circle) {
            self.centers.push(circle.center());
        }
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(ParticleInstance::SIZE, 32);
        let instance = ParticleInstance::default();
        let bytes: &[u8] = bytemuck::bytes_of(&instance);
        assert_eq!(bytes.len(), 32);
        assert!(bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_visits_launchers_then_particles() {
        let mut env = FireworkEnvironment::new();
        let rect =
            ExplosionPattern::rectangle(0.0, 0.0, 1.0, 1.0, Colour::WHITE).expect("pattern");
        let launch = Vector2D::new(10.0, 600.0);
        let fw = Firework::with_launch(800.0, 600.0, launch, Colour::WHITE, 1, rect)
            .expect("firework");
        env.add(fw);

        let mut recorder = Recorder::default();
        env.draw(&mut recorder);
        assert_eq!(recorder.centers, vec![Vector2D::new(10.0, 600.0)]);

        env.update();
        let mut recorder = Recorder::default();
        env.draw(&mut recorder);
        assert_eq!(recorder.centers.len(), 4);
    }

    #[test]
    fn test_instances_carry_colour() {
        let mut env = FireworkEnvironment::new();
        let fw = Firework::new(800.0, 600.0, Colour::new(255, 0, 0), ExplosionPattern::uniform())
            .expect("firework");
        env.add(fw);

        let instances = env.instances();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].colour, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(instances[0].position[1], 600.0);
    }
}
