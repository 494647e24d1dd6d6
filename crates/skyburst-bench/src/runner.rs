//! Timed batches: build N fireworks, tick until the environment empties.

use std::time::Instant;

use anyhow::{Context, Result};
use fastrand::Rng;
use skyburst_common::{Colour, Vector2D};
use skyburst_geometry::{Circle, Rectangle, Shape, Star};
use skyburst_sim::{ExplosionPattern, Firework, FireworkEnvironment};
use tracing::{debug, info};

use crate::config::{BenchConfig, PatternChoice};
use crate::perf::{RunSample, RunStats};

/// Colour every benchmark firework uses.
const BENCH_COLOUR: Colour = Colour::WHITE;

/// Runs the configured batch `config.runs` times.
pub fn run(config: &BenchConfig) -> Result<RunStats> {
    let mut rng = config.seed.map_or_else(Rng::new, Rng::with_seed);
    let mut stats = RunStats::new();

    for run in 1..=config.runs {
        let env = populate(config, &mut rng)
            .with_context(|| format!("building fireworks for run {run}"))?;
        let sample = tick_until_empty(env, config.max_ticks);
        info!(
            run,
            elapsed_ms = sample.elapsed.as_millis() as u64,
            ticks = sample.ticks,
            timed_out = sample.timed_out,
            "Run complete"
        );
        stats.record(sample);
    }

    Ok(stats)
}

/// Builds an environment holding `config.firework_count` launched fireworks.
pub fn populate(config: &BenchConfig, rng: &mut Rng) -> Result<FireworkEnvironment> {
    let mut env = FireworkEnvironment::new();
    for _ in 0..config.firework_count {
        let pattern = pattern(config, Rng::with_seed(rng.u64(..)))?;
        let firework = Firework::builder(config.width, config.height)
            .colour(BENCH_COLOUR)
            .pattern(pattern)
            .seed(rng.u64(..))
            .build()?;
        env.add(firework);
    }
    debug!(count = env.len(), pattern = config.pattern.label(), "Environment populated");
    Ok(env)
}

fn pattern(config: &BenchConfig, rng: Rng) -> Result<ExplosionPattern> {
    let center = Vector2D::new(config.width / 2.0, config.height / 2.0);
    let r = config.pattern_radius;

    let shape: Shape = match config.pattern {
        PatternChoice::Uniform => return Ok(ExplosionPattern::uniform_with_rng(rng)),
        PatternChoice::Circle => Circle::new(center, r, BENCH_COLOUR)?.into(),
        PatternChoice::Rectangle => {
            Rectangle::new(center.x - r, center.y - r, 2.0 * r, 2.0 * r, BENCH_COLOUR).into()
        },
        PatternChoice::Star => Star::new(center, r, BENCH_COLOUR)?.into(),
    };
    Ok(ExplosionPattern::from_shape_with_rng(&shape, rng)?)
}

/// Ticks until no fireworks remain or `max_ticks` is reached.
pub fn tick_until_empty(mut env: FireworkEnvironment, max_ticks: u32) -> RunSample {
    let start = Instant::now();
    let mut ticks = 0;
    while !env.is_empty() && ticks < max_ticks {
        env.update();
        ticks += 1;
    }
    RunSample {
        elapsed: start.elapsed(),
        ticks,
        timed_out: !env.is_empty(),
    }
}
