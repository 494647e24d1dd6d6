//! Explosion patterns.
//!
//! A pattern decides how many particles a firework spawns when it bursts,
//! the fixed upward velocity it launches with, and one velocity per spawned
//! particle.
//!
//! - [`UniformPattern`]: random count in `[60, 100]`, directions uniform on the circle
//! - [`ShapePattern`]: one particle per chosen polygon direction, consumed last-in first-out
//! - [`StarPattern`]: up to 5 particles along randomly picked star directions
//!
//! Every pattern owns its own random source. Mutable state sits behind a
//! `parking_lot::Mutex`, so all capabilities take `&self` and a pattern can
//! be shared read-only across worker threads.
//!
//! # Example
//!
//! ```
//! use skyburst_common::Colour;
//! use skyburst_sim::pattern::ExplosionPattern;
//!
//! let pattern = ExplosionPattern::rectangle(50.0, 50.0, 100.0, 100.0, Colour::WHITE).unwrap();
//! assert_eq!(pattern.number_of_particles(), 4);
//! assert!(pattern.launch_velocity().y < 0.0);
//! ```

use std::f32::consts::TAU;

use fastrand::Rng;
use parking_lot::Mutex;
use skyburst_common::{Colour, SkyburstError, SkyburstResult, Vector2D};
use skyburst_geometry::{unit_directions, Circle, Rectangle, Shape, Star};

/// Direction used when a polygon yields none, or a shape pattern is drained.
pub const FALLBACK_DIRECTION: Vector2D = Vector2D::new(1.0, 0.0);

/// Fewest particles a uniform pattern spawns.
pub const UNIFORM_MIN_PARTICLES: u32 = 60;
/// Most particles a uniform pattern spawns.
pub const UNIFORM_MAX_PARTICLES: u32 = 100;

const UNIFORM_SPEED: (f32, f32) = (3.5, 6.5);
const UNIFORM_LAUNCH_SPEED: (f32, f32) = (6.0, 9.0);

const SHAPE_SPEED: (f32, f32) = (5.0, 6.5);
const SHAPE_LAUNCH_SPEED: (f32, f32) = (6.0, 8.0);
const SHAPE_JITTER: f32 = 0.125;
/// Number of directions sampled from large polygons such as circles.
pub const SHAPE_SAMPLE_COUNT: usize = 8;
const DUPLICATE_TOLERANCE: f32 = 1e-4;

/// Most particles a star pattern spawns.
pub const STAR_MAX_PARTICLES: u32 = 5;
const STAR_SPEED: (f32, f32) = (3.5, 6.5);
const STAR_LAUNCH_SPEED: (f32, f32) = (6.0, 9.0);
const STAR_JITTER: f32 = 0.2;

/// Uniform draw in `[min, max]`.
fn random_range(rng: &mut Rng, (min, max): (f32, f32)) -> f32 {
    min + rng.f32() * (max - min)
}

/// Straight-up launch velocity with a random speed.
fn upward(rng: &mut Rng, speed: (f32, f32)) -> Vector2D {
    Vector2D::new(0.0, -random_range(rng, speed))
}

/// Perturbs each axis of `dir` by up to `jitter`, then re-normalizes.
fn jittered(rng: &mut Rng, dir: Vector2D, jitter: f32) -> Vector2D {
    let jx = random_range(rng, (-jitter, jitter));
    let jy = random_range(rng, (-jitter, jitter));
    Vector2D::new(dir.x + jx, dir.y + jy).normalize()
}

/// Memoryless pattern: random count, directions uniform on the circle.
#[derive(Debug)]
pub struct UniformPattern {
    number_of_particles: u32,
    launch_velocity: Vector2D,
    rng: Mutex<Rng>,
}

impl UniformPattern {
    /// Creates a pattern with an entropy-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    /// Creates a pattern drawing from `rng`.
    #[must_use]
    pub fn with_rng(mut rng: Rng) -> Self {
        let number_of_particles = rng.u32(UNIFORM_MIN_PARTICLES..=UNIFORM_MAX_PARTICLES);
        let launch_velocity = upward(&mut rng, UNIFORM_LAUNCH_SPEED);
        Self {
            number_of_particles,
            launch_velocity,
            rng: Mutex::new(rng),
        }
    }

    fn next_explosion_velocity(&self) -> Vector2D {
        let mut rng = self.rng.lock();
        let angle = rng.f32() * TAU;
        let speed = random_range(&mut rng, UNIFORM_SPEED);
        Vector2D::new(angle.cos(), angle.sin()) * speed
    }
}

impl Default for UniformPattern {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct ShapeState {
    /// Unconsumed directions; the last one is handed out next.
    directions: Vec<Vector2D>,
    rng: Rng,
}

/// Pattern derived from a polygon's vertex directions.
///
/// Directions are consumed last-in first-out, one per spawned particle.
/// Calls beyond [`ShapePattern::remaining`] fall back to
/// [`FALLBACK_DIRECTION`]. Explosions draw from this on the single thread
/// running the burst; the mutex only makes the pattern `Sync`.
#[derive(Debug)]
pub struct ShapePattern {
    number_of_particles: u32,
    launch_velocity: Vector2D,
    state: Mutex<ShapeState>,
}

impl ShapePattern {
    /// Builds a pattern from an arbitrary polygon.
    pub fn from_vertices(vertices: &[Vector2D]) -> SkyburstResult<Self> {
        Self::from_vertices_with_rng(vertices, Rng::new())
    }

    /// Builds a pattern from an arbitrary polygon, drawing from `rng`.
    pub fn from_vertices_with_rng(vertices: &[Vector2D], mut rng: Rng) -> SkyburstResult<Self> {
        if vertices.is_empty() {
            return Err(SkyburstError::invalid("shape has no vertices"));
        }

        let mut all = unit_directions(vertices);
        if all.is_empty() {
            all.push(FALLBACK_DIRECTION);
        }
        let directions = select_directions(all);
        let launch_velocity = upward(&mut rng, SHAPE_LAUNCH_SPEED);

        Ok(Self {
            number_of_particles: directions.len() as u32,
            launch_velocity,
            state: Mutex::new(ShapeState { directions, rng }),
        })
    }

    /// Directions not yet consumed.
    pub fn remaining(&self) -> usize {
        self.state.lock().directions.len()
    }

    fn next_explosion_velocity(&self) -> Vector2D {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let base = state.directions.pop().unwrap_or(FALLBACK_DIRECTION);
        let dir = jittered(&mut state.rng, base, SHAPE_JITTER);
        dir * random_range(&mut state.rng, SHAPE_SPEED)
    }
}

/// Picks the directions a shape pattern fires along.
///
/// Four directions (a rectangle) are kept as-is. Eight or more (a circle)
/// are thinned to [`SHAPE_SAMPLE_COUNT`] roughly evenly spaced picks,
/// skipping a pick equal to the one before it. Anything else is kept.
fn select_directions(all: Vec<Vector2D>) -> Vec<Vector2D> {
    let n = all.len();
    if n == 4 || n < SHAPE_SAMPLE_COUNT {
        return all;
    }

    let mut chosen: Vec<Vector2D> = Vec::with_capacity(SHAPE_SAMPLE_COUNT);
    for k in 0..SHAPE_SAMPLE_COUNT {
        let idx = ((k * n) / SHAPE_SAMPLE_COUNT).min(n - 1);
        let dir = all[idx];
        let duplicate = chosen
            .last()
            .is_some_and(|&prev| dir.approx_eq(prev, DUPLICATE_TOLERANCE));
        if !duplicate {
            chosen.push(dir);
        }
    }
    chosen
}

/// Memoryless pattern firing along randomly picked star directions.
#[derive(Debug)]
pub struct StarPattern {
    directions: Vec<Vector2D>,
    number_of_particles: u32,
    launch_velocity: Vector2D,
    rng: Mutex<Rng>,
}

impl StarPattern {
    /// Builds a pattern from a star's (or any polygon's) vertices.
    pub fn from_vertices(vertices: &[Vector2D]) -> SkyburstResult<Self> {
        Self::from_vertices_with_rng(vertices, Rng::new())
    }

    /// Builds a pattern from vertices, drawing from `rng`.
    pub fn from_vertices_with_rng(vertices: &[Vector2D], mut rng: Rng) -> SkyburstResult<Self> {
        if vertices.is_empty() {
            return Err(SkyburstError::invalid("shape must have at least one vertex"));
        }

        let mut directions = unit_directions(vertices);
        if directions.is_empty() {
            directions.push(FALLBACK_DIRECTION);
        }
        let number_of_particles = STAR_MAX_PARTICLES.min(directions.len() as u32);
        let launch_velocity = upward(&mut rng, STAR_LAUNCH_SPEED);

        Ok(Self {
            directions,
            number_of_particles,
            launch_velocity,
            rng: Mutex::new(rng),
        })
    }

    /// Unit directions from the centroid to each vertex.
    pub fn directions(&self) -> &[Vector2D] {
        &self.directions
    }

    fn next_explosion_velocity(&self) -> Vector2D {
        let mut rng = self.rng.lock();
        let base = self.directions[rng.usize(..self.directions.len())];
        let dir = jittered(&mut rng, base, STAR_JITTER);
        dir * random_range(&mut rng, STAR_SPEED)
    }
}

/// Explosion strategy consulted by a firework.
#[derive(Debug)]
pub enum ExplosionPattern {
    /// Random count, uniform directions
    Uniform(UniformPattern),
    /// Polygon directions, consumed once each (rectangles, circles, arbitrary polygons)
    Shape(ShapePattern),
    /// Star directions, picked at random
    Star(StarPattern),
}

impl ExplosionPattern {
    /// Default pattern with its own random source.
    #[must_use]
    pub fn uniform() -> Self {
        Self::Uniform(UniformPattern::new())
    }

    /// Default pattern drawing from `rng`.
    #[must_use]
    pub fn uniform_with_rng(rng: Rng) -> Self {
        Self::Uniform(UniformPattern::with_rng(rng))
    }

    /// Shape-derived pattern from a rectangle: one particle per corner.
    pub fn rectangle(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        colour: Colour,
    ) -> SkyburstResult<Self> {
        Self::from_shape(&Rectangle::new(x, y, width, height, colour).into())
    }

    /// Shape-derived pattern from a circle: eight sampled directions.
    pub fn circle(x: f32, y: f32, radius: f32, colour: Colour) -> SkyburstResult<Self> {
        Self::from_shape(&Circle::new(Vector2D::new(x, y), radius, colour)?.into())
    }

    /// Star-derived pattern from a five-point star.
    pub fn star(x: f32, y: f32, radius: f32, colour: Colour) -> SkyburstResult<Self> {
        Self::from_shape(&Star::new(Vector2D::new(x, y), radius, colour)?.into())
    }

    /// Pattern for `shape`: stars get the star-derived pattern, everything
    /// else the shape-derived one.
    pub fn from_shape(shape: &Shape) -> SkyburstResult<Self> {
        Self::from_shape_with_rng(shape, Rng::new())
    }

    /// Like [`ExplosionPattern::from_shape`], drawing from `rng`.
    pub fn from_shape_with_rng(shape: &Shape, rng: Rng) -> SkyburstResult<Self> {
        match shape {
            Shape::Star(s) => {
                StarPattern::from_vertices_with_rng(s.vertices(), rng).map(Self::Star)
            },
            Shape::Circle(_) | Shape::Rectangle(_) => {
                ShapePattern::from_vertices_with_rng(shape.vertices(), rng).map(Self::Shape)
            },
        }
    }

    /// Shape-derived pattern from an arbitrary polygon.
    pub fn from_polygon(vertices: &[Vector2D]) -> SkyburstResult<Self> {
        ShapePattern::from_vertices(vertices).map(Self::Shape)
    }

    /// Particles spawned per explosion. Fixed at construction.
    #[must_use]
    pub fn number_of_particles(&self) -> u32 {
        match self {
            Self::Uniform(p) => p.number_of_particles,
            Self::Shape(p) => p.number_of_particles,
            Self::Star(p) => p.number_of_particles,
        }
    }

    /// Launch velocity. Fixed at construction; `x == 0`, `y < 0`.
    #[must_use]
    pub fn launch_velocity(&self) -> Vector2D {
        match self {
            Self::Uniform(p) => p.launch_velocity,
            Self::Shape(p) => p.launch_velocity,
            Self::Star(p) => p.launch_velocity,
        }
    }

    /// Velocity for the next spawned particle.
    pub fn next_explosion_velocity(&self) -> Vector2D {
        match self {
            Self::Uniform(p) => p.next_explosion_velocity(),
            Self::Shape(p) => p.next_explosion_velocity(),
            Self::Star(p) => p.next_explosion_velocity(),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Uniform(_) => "uniform",
            Self::Shape(_) => "shape",
            Self::Star(_) => "star",
        }
    }
}

impl From<UniformPattern> for ExplosionPattern {
    fn from(p: UniformPattern) -> Self {
        Self::Uniform(p)
    }
}

impl From<ShapePattern> for ExplosionPattern {
    fn from(p: ShapePattern) -> Self {
        Self::Shape(p)
    }
}

impl From<StarPattern> for ExplosionPattern {
    fn from(p: StarPattern) -> Self {
        Self::Star(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Rng {
        Rng::with_seed(seed)
    }

    fn speed_within(v: Vector2D, (min, max): (f32, f32)) -> bool {
        let m = v.magnitude();
        m >= min - 1e-4 && m <= max + 1e-4
    }

    #[test]
    fn test_uniform_count_and_launch() {
        for seed in 0..50 {
            let p = ExplosionPattern::uniform_with_rng(seeded(seed));
            let n = p.number_of_particles();
            assert!((UNIFORM_MIN_PARTICLES..=UNIFORM_MAX_PARTICLES).contains(&n));
            assert_eq!(p.launch_velocity().x, 0.0);
            assert!(p.launch_velocity().y <= -6.0 && p.launch_velocity().y >= -9.0);
        }
    }

    #[test]
    fn test_uniform_velocities_go_both_ways() {
        let p = ExplosionPattern::uniform();
        let mut up = false;
        let mut down = false;
        for _ in 0..200 {
            let v = p.next_explosion_velocity();
            assert!(speed_within(v, UNIFORM_SPEED));
            up |= v.y < 0.0;
            down |= v.y > 0.0;
        }
        assert!(up && down);
    }

    #[test]
    fn test_uniform_is_deterministic_per_seed() {
        let a = ExplosionPattern::uniform_with_rng(seeded(42));
        let b = ExplosionPattern::uniform_with_rng(seeded(42));
        assert_eq!(a.number_of_particles(), b.number_of_particles());
        assert_eq!(a.launch_velocity(), b.launch_velocity());
        for _ in 0..10 {
            assert_eq!(a.next_explosion_velocity(), b.next_explosion_velocity());
        }
    }

    #[test]
    fn test_rectangle_uses_four_corners_lifo() {
        let rect = Shape::from(Rectangle::new(50.0, 50.0, 100.0, 100.0, Colour::WHITE));
        let p = ExplosionPattern::from_shape_with_rng(&rect, seeded(1)).expect("pattern");
        assert_eq!(p.number_of_particles(), 4);
        assert!(p.launch_velocity().y <= -6.0 && p.launch_velocity().y >= -8.0);

        // bottom-left corner is popped first
        let first = p.next_explosion_velocity();
        assert!(first.x < 0.0 && first.y > 0.0);
        assert!(speed_within(first, SHAPE_SPEED));

        // then bottom-right
        let second = p.next_explosion_velocity();
        assert!(second.x > 0.0 && second.y > 0.0);

        let ExplosionPattern::Shape(shape) = &p else {
            panic!("expected a shape pattern");
        };
        assert_eq!(shape.remaining(), 2);
    }

    #[test]
    fn test_drained_shape_pattern_falls_back() {
        let p = ExplosionPattern::rectangle(0.0, 0.0, 10.0, 10.0, Colour::WHITE).expect("pattern");
        for _ in 0..p.number_of_particles() {
            p.next_explosion_velocity();
        }
        for _ in 0..5 {
            let v = p.next_explosion_velocity();
            assert!(v.x > 0.0);
            assert!(v.y.abs() < v.x);
            assert!(speed_within(v, SHAPE_SPEED));
        }
    }

    #[test]
    fn test_circle_samples_eight_directions() {
        let p = ExplosionPattern::circle(400.0, 300.0, 120.0, Colour::WHITE).expect("pattern");
        assert_eq!(p.number_of_particles(), 8);
    }

    #[test]
    fn test_circle_picks_evenly_spaced_directions() {
        let center = Vector2D::new(400.0, 300.0);
        let circle = Circle::new(center, 120.0, Colour::WHITE).expect("circle");
        let chosen = select_directions(unit_directions(circle.vertices()));

        // indices (k * 60) / 8 on a 6-degree grid
        let expected = [0.0f32, 42.0, 90.0, 132.0, 180.0, 222.0, 270.0, 312.0];
        assert_eq!(chosen.len(), expected.len());
        for (dir, deg) in chosen.iter().zip(expected) {
            let want = Vector2D::new(deg.to_radians().cos(), deg.to_radians().sin());
            assert!(dir.approx_eq(want, 1e-3), "{dir} vs {deg} degrees");
        }

        // last pick (312 degrees) is consumed first
        let p = ExplosionPattern::from_shape_with_rng(&circle.clone().into(), seeded(5))
            .expect("pattern");
        let first = p.next_explosion_velocity().normalize();
        assert!((first - chosen[7]).magnitude() < 0.2);
    }

    #[test]
    fn test_star_picks_random_star_directions() {
        let star = Star::new(Vector2D::ZERO, 50.0, Colour::WHITE).expect("star");
        let pattern = StarPattern::from_vertices_with_rng(star.vertices(), seeded(17))
            .expect("pattern");
        let directions = pattern.directions().to_vec();
        assert_eq!(directions.len(), 5);
        let pattern = ExplosionPattern::from(pattern);

        let mut hits = [0usize; 5];
        let mut picks = Vec::new();
        for _ in 0..100 {
            let v = pattern.next_explosion_velocity().normalize();
            // jitter of 0.2 per axis turns a unit vector by under 17 degrees
            let (idx, dist) = directions
                .iter()
                .map(|&d| (v - d).magnitude())
                .enumerate()
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .expect("five directions");
            assert!(dist < 0.3, "draw {v} is {dist} away from every star direction");
            hits[idx] += 1;
            picks.push(idx);
        }

        assert!(hits.iter().all(|&n| n > 0), "hits: {hits:?}");
        let sequential = picks.windows(2).all(|w| w[1] == (w[0] + 1) % 5);
        assert!(!sequential);
    }

    #[test]
    fn test_select_directions_skips_adjacent_duplicates() {
        let mut dirs = vec![Vector2D::new(1.0, 0.0); 8];
        dirs.extend(std::iter::repeat(Vector2D::new(0.0, 1.0)).take(8));
        let chosen = select_directions(dirs);
        assert_eq!(chosen, vec![Vector2D::new(1.0, 0.0), Vector2D::new(0.0, 1.0)]);
    }

    #[test]
    fn test_other_counts_keep_all_directions() {
        let triangle = [
            Vector2D::new(0.0, 0.0),
            Vector2D::new(4.0, 0.0),
            Vector2D::new(2.0, 3.0),
        ];
        let p = ExplosionPattern::from_polygon(&triangle).expect("pattern");
        assert_eq!(p.number_of_particles(), 3);
    }

    #[test]
    fn test_degenerate_rectangle_falls_back_to_one_direction() {
        let p = ExplosionPattern::rectangle(5.0, 5.0, 0.0, 0.0, Colour::WHITE).expect("pattern");
        assert_eq!(p.number_of_particles(), 1);
        assert!(p.next_explosion_velocity().x > 0.0);
    }

    #[test]
    fn test_empty_polygon_is_rejected() {
        assert!(matches!(
            ExplosionPattern::from_polygon(&[]),
            Err(SkyburstError::InvalidArgument(_))
        ));
        assert!(StarPattern::from_vertices(&[]).is_err());
    }

    #[test]
    fn test_star_pattern() {
        let p = ExplosionPattern::star(0.0, 0.0, 50.0, Colour::WHITE).expect("pattern");
        assert_eq!(p.name(), "star");
        assert_eq!(p.number_of_particles(), STAR_MAX_PARTICLES);
        assert_eq!(p.launch_velocity().x, 0.0);
        assert!(p.launch_velocity().y < 0.0);

        // memoryless: any number of draws stays in range
        for _ in 0..100 {
            assert!(speed_within(p.next_explosion_velocity(), STAR_SPEED));
        }
    }

    #[test]
    fn test_star_count_capped_by_directions() {
        let pair = [Vector2D::new(-1.0, 0.0), Vector2D::new(1.0, 0.0)];
        let p = StarPattern::from_vertices_with_rng(&pair, seeded(3)).expect("pattern");
        assert_eq!(ExplosionPattern::from(p).number_of_particles(), 2);
    }

    #[test]
    fn test_invalid_geometry_propagates() {
        assert!(ExplosionPattern::circle(0.0, 0.0, 0.0, Colour::WHITE).is_err());
        assert!(ExplosionPattern::star(0.0, 0.0, -1.0, Colour::WHITE).is_err());
    }
}
