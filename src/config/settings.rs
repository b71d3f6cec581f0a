//! Configuration settings for the Game of Life console simulation

use crate::game_of_life::Pattern;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub pattern: PatternConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    pub kind: Pattern,
    /// Probability of a cell starting alive, only used by the random pattern
    pub density: f64,
    /// Fixed seed for the random pattern; drawn from system entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub offset_row: isize,
    #[serde(default)]
    pub offset_col: isize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub generations: usize,
    pub delay_ms: u64,
    pub clear_screen: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig { rows: 20, cols: 40 },
            pattern: PatternConfig {
                kind: Pattern::Random,
                density: 0.1,
                seed: None,
                offset_row: 0,
                offset_col: 0,
            },
            display: DisplayConfig {
                generations: 60,
                delay_ms: 100,
                clear_screen: true,
                format: OutputFormat::Text,
            },
        }
    }
}

impl DisplayConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
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
        if self.grid.rows == 0 || self.grid.cols == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.rows,
                self.grid.cols
            );
        }

        if self.display.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.grid.cols = cols;
        }
        if let Some(pattern) = cli_overrides.pattern {
            self.pattern.kind = pattern;
        }
        if let Some(density) = cli_overrides.density {
            self.pattern.density = density;
        }
        if cli_overrides.seed.is_some() {
            self.pattern.seed = cli_overrides.seed;
        }
        if let Some(generations) = cli_overrides.generations {
            self.display.generations = generations;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.display.delay_ms = delay_ms;
        }
        if let Some(format) = cli_overrides.format {
            self.display.format = format;
        }
        if cli_overrides.no_clear {
            self.display.clear_screen = false;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub pattern: Option<Pattern>,
    pub density: Option<f64>,
    pub seed: Option<u64>,
    pub generations: Option<usize>,
    pub delay_ms: Option<u64>,
    pub format: Option<OutputFormat>,
    pub no_clear: bool,
}
