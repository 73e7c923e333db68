//! Configuration settings for the simulator

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub height: usize,
    pub width: usize,
    pub generations: usize,
    /// Probability of a cell starting alive when no pattern is given
    pub density: f64,
    /// Fixed seed for the random fill; a fresh one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Edge length of one cell in pixels, for pointer mapping
    pub cell_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: OutputFormat,
    pub delay_ms: u64,
    /// Print a frame every this many generations
    pub show_every: usize,
    pub color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                height: 50,
                width: 50,
                generations: 100,
                density: 0.3,
                seed: None,
                cell_size: 10,
            },
            display: DisplayConfig {
                format: OutputFormat::Text,
                delay_ms: 200,
                show_every: 1,
                color: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if sim.height == 0 || sim.width == 0 {
            anyhow::bail!("Grid dimensions must be positive, got {}x{}", sim.height, sim.width);
        }

        if sim.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if !(0.0..=1.0).contains(&sim.density) {
            anyhow::bail!("Density must lie in [0, 1], got {}", sim.density);
        }

        if sim.cell_size == 0 {
            anyhow::bail!("Cell size must be positive");
        }

        if self.display.show_every == 0 {
            anyhow::bail!("Frame interval must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(height) = cli_overrides.height {
            self.simulation.height = height;
        }
        if let Some(width) = cli_overrides.width {
            self.simulation.width = width;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(density) = cli_overrides.density {
            self.simulation.density = density;
        }
        if cli_overrides.seed.is_some() {
            self.simulation.seed = cli_overrides.seed;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.display.delay_ms = delay_ms;
        }
        if let Some(format) = cli_overrides.format {
            self.display.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub height: Option<usize>,
    pub width: Option<usize>,
    pub generations: Option<usize>,
    pub density: Option<f64>,
    pub seed: Option<u64>,
    pub delay_ms: Option<u64>,
    pub format: Option<OutputFormat>,
}
