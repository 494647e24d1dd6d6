//! Run timing statistics.

use std::time::Duration;

/// Outcome of one timed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSample {
    /// Wall time spent ticking
    pub elapsed: Duration,
    /// Ticks until the environment emptied (or the limit)
    pub ticks: u32,
    /// True if the run hit the tick limit before emptying
    pub timed_out: bool,
}

/// Collects run samples and summarizes them.
#[derive(Debug, Default)]
pub struct RunStats {
    samples: Vec<RunSample>,
}

impl RunStats {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one run.
    pub fn record(&mut self, sample: RunSample) {
        self.samples.push(sample);
    }

    /// Recorded runs.
    #[must_use]
    pub fn samples(&self) -> &[RunSample] {
        &self.samples
    }

    /// Average wall time in milliseconds.
    #[must_use]
    pub fn mean_ms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let total: f64 = self.samples.iter().map(|s| millis(s.elapsed)).sum();
        total / self.samples.len() as f64
    }

    /// Fastest run in milliseconds.
    #[must_use]
    pub fn min_ms(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| millis(s.elapsed))
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Slowest run in milliseconds.
    #[must_use]
    pub fn max_ms(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| millis(s.elapsed))
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Runs that hit the tick limit.
    #[must_use]
    pub fn timeouts(&self) -> usize {
        self.samples.iter().filter(|s| s.timed_out).count()
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
