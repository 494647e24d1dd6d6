//! Collection of fireworks advanced together.
//!
//! Each tick runs in two phases: every firework is updated on the rayon
//! pool, and only after all of them have finished are the finished ones
//! removed, sequentially.

use rayon::prelude::*;
use tracing::{trace, warn};

use crate::firework::Firework;

/// Above this many fireworks, [`FireworkEnvironment::clear_if_over_capacity`]
/// drops all of them.
pub const CAPACITY_LIMIT: usize = 50;

/// Owns every live firework.
#[derive(Debug, Default)]
pub struct FireworkEnvironment {
    items: Vec<Firework>,
}

impl FireworkEnvironment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Launches `firework` and takes ownership of it. `None` is ignored.
    pub fn add(&mut self, firework: impl Into<Option<Firework>>) {
        let Some(mut firework) = firework.into() else {
            return;
        };
        firework.launch();
        self.items.push(firework);
    }

    /// Advances every firework one tick, then removes the finished ones.
    pub fn update(&mut self) {
        if self.items.is_empty() {
            return;
        }

        self.items.par_iter_mut().for_each(Firework::update);

        let before = self.items.len();
        self.items.retain(|f| !f.is_finished());
        let removed = before - self.items.len();
        if removed > 0 {
            trace!(removed, remaining = self.items.len(), "Finished fireworks removed");
        }
    }

    /// Drops every firework when more than [`CAPACITY_LIMIT`] are live.
    ///
    /// This is a blunt safety valve, not an eviction policy: nothing is kept.
    /// Returns how many fireworks were dropped.
    pub fn clear_if_over_capacity(&mut self) -> usize {
        let count = self.items.len();
        if count <= CAPACITY_LIMIT {
            return 0;
        }
        warn!(count, limit = CAPACITY_LIMIT, "Firework capacity exceeded, clearing all");
        self.items.clear();
        count
    }

    /// Live fireworks, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Firework] {
        &self.items
    }

    /// Number of live fireworks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no fireworks are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Burst particles across all fireworks (launchers not included).
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.items.iter().map(|f| f.particles().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::ExplosionPattern;
    use skyburst_common::Colour;

    fn firework() -> Firework {
        Firework::new(800.0, 600.0, Colour::new(100, 100, 100), ExplosionPattern::uniform())
            .expect("firework")
    }

    #[test]
    fn test_add_none_is_noop() {
        let mut env = FireworkEnvironment::new();
        env.add(None::<Firework>);
        assert!(env.is_empty());
    }

    #[test]
    fn test_add_launches_and_stores() {
        let mut env = FireworkEnvironment::new();
        env.add(firework());
        assert_eq!(env.len(), 1);
        assert!(env.items()[0].launcher().is_some());
    }

    #[test]
    fn test_update_on_empty_is_noop() {
        let mut env = FireworkEnvironment::new();
        env.update();
        assert!(env.is_empty());
    }

    #[test]
    fn test_update_removes_finished_fireworks() {
        let mut env = FireworkEnvironment::new();
        for _ in 0..5 {
            env.add(firework());
        }

        let mut ticks = 0;
        while !env.is_empty() && ticks < 800 {
            env.update();
            ticks += 1;
        }
        assert!(env.is_empty());
        assert_eq!(env.particle_count(), 0);
    }

    #[test]
    fn test_particles_counted_after_burst() {
        let mut env = FireworkEnvironment::new();
        env.add(firework());
        while env.items().first().is_some_and(|f| !f.exploded()) {
            env.update();
        }
        let expected = env.items()[0].pattern().number_of_particles() as usize;
        assert_eq!(env.particle_count(), expected);
    }

    #[test]
    fn test_capacity_valve_clears_everything() {
        let mut env = FireworkEnvironment::new();
        for _ in 0..55 {
            env.add(firework());
        }
        assert_eq!(env.clear_if_over_capacity(), 55);
        assert_eq!(env.len(), 0);
    }

    #[test]
    fn test_capacity_valve_keeps_exactly_limit() {
        let mut env = FireworkEnvironment::new();
        for _ in 0..CAPACITY_LIMIT {
            env.add(firework());
        }
        assert_eq!(env.clear_if_over_capacity(), 0);
        assert_eq!(env.len(), CAPACITY_LIMIT);
    }
}
