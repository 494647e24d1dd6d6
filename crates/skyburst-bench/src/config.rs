//! Benchmark configuration.
//!
//! Loaded from a TOML file. Missing or invalid files fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Configuration file name.
const CONFIG_FILE: &str = "skyburst.toml";

/// Which explosion pattern every firework in a batch gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternChoice {
    /// Random count, uniform directions
    #[default]
    Uniform,
    /// Circle-derived, eight directions
    Circle,
    /// Rectangle-derived, four corners
    Rectangle,
    /// Star-derived, five directions
    Star,
}

impl PatternChoice {
    /// Name used in logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Star => "star",
        }
    }
}

/// Benchmark parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Field width in pixels
    pub width: f32,
    /// Field height in pixels
    pub height: f32,
    /// Fireworks created per run
    pub firework_count: usize,
    /// Number of timed runs
    pub runs: usize,
    /// Pattern used for every firework
    pub pattern: PatternChoice,
    /// Radius (or half extent) of shape-derived patterns
    pub pattern_radius: f32,
    /// Seed for reproducible runs (None = entropy)
    pub seed: Option<u64>,
    /// Ticks after which a run is abandoned
    pub max_ticks: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            firework_count: 100,
            runs: 100,
            pattern: PatternChoice::Uniform,
            pattern_radius: 120.0,
            seed: None,
            max_ticks: 10_000,
        }
    }
}

impl BenchConfig {
    /// Load configuration from `path`, or `skyburst.toml` in the working
    /// directory when no path is given.
    pub fn load(path: Option<&Path>) -> Self {
        Self::load_from(path.map_or_else(|| PathBuf::from(CONFIG_FILE), Path::to_path_buf))
    }

    /// Load configuration from a specific path. A missing, unreadable or
    /// malformed file yields the defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No bench config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => {
                info!("Loaded bench config from {}", path.display());
                config
            },
            Err(e) => {
                warn!("Ignoring bench config: {e:#}");
                Self::default()
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    /// Write configuration as TOML, creating parent directories.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(path, toml::to_string_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }
}
