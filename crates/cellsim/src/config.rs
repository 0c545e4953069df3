//! Simulation configuration.

use quadtree::QuadtreeConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "cellsim.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub quadtree: QuadtreeConfig,
}

impl Config {
    /// Load configuration from `cellsim.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from `path`, writing the defaults there if the
    /// file does not exist yet.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }
}

/// World size, population and pacing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Screen width in world units.
    #[serde(default = "default_width")]
    pub width: f32,
    /// Screen height in world units.
    #[serde(default = "default_height")]
    pub height: f32,
    /// Number of cells spawned at startup.
    #[serde(default = "default_cells")]
    pub cells: usize,
    /// Cell radius.
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Maximum absolute velocity component at spawn.
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// How far a cell senses its neighbours.
    #[serde(default = "default_vision")]
    pub vision: f32,
    /// Tick interval in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Stop after this many ticks (0 = run until every cell has left).
    #[serde(default)]
    pub max_ticks: u64,
    /// Log a summary at info level every this many ticks.
    #[serde(default = "default_report_every")]
    pub report_every: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            cells: default_cells(),
            radius: default_radius(),
            speed: default_speed(),
            vision: default_vision(),
            tick_interval_ms: default_tick_interval(),
            max_ticks: 0,
            report_every: default_report_every(),
        }
    }
}

fn default_width() -> f32 {
    1280.0
}
fn default_height() -> f32 {
    720.0
}
fn default_cells() -> usize {
    100
}
fn default_radius() -> f32 {
    5.0
}
fn default_speed() -> f32 {
    2.0
}
fn default_vision() -> f32 {
    30.0
}
fn default_tick_interval() -> u64 {
    16
}
fn default_report_every() -> u64 {
    60
}
