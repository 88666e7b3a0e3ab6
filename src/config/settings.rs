//! Configuration settings for the simulator

use crate::error::LifeError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted window side or border width, in pixels
pub const MAX_WINDOW_SIDE: usize = 16_384;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub display: DisplayConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

/// Pixel geometry and colors used by the frame renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub cell_size: usize,
    pub border_width: usize,
    pub window_width: usize,
    pub window_height: usize,
    pub alive_color: Rgb,
    pub dead_color: Rgb,
    pub border_color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Advance once per rendered frame in addition to explicit steps
    pub auto_play: bool,
    /// Steps taken by the headless `run` command
    pub generations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
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
            grid: GridConfig {
                width: 50,
                height: 50,
            },
            display: DisplayConfig {
                cell_size: 10,
                border_width: 10,
                window_width: 800,
                window_height: 600,
                alive_color: Rgb(255, 255, 255),
                dead_color: Rgb(0, 0, 0),
                border_color: Rgb(50, 50, 50),
            },
            simulation: SimulationConfig {
                auto_play: true,
                generations: 10,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file. Call `validate` once any command
    /// line overrides have been merged.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::warn!("config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
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
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(LifeError::InvalidDimensions {
                width: self.grid.width,
                height: self.grid.height,
            }
            .into());
        }

        if self.display.cell_size == 0 {
            anyhow::bail!("Cell size must be positive");
        }

        let fits = |extent: Option<usize>| extent.is_some_and(|v| isize::try_from(v).is_ok());
        if !fits(self.grid.width.checked_mul(self.display.cell_size))
            || !fits(self.grid.height.checked_mul(self.display.cell_size))
        {
            anyhow::bail!(
                "Grid of {}x{} cells at {}px per cell does not fit in pixel space",
                self.grid.width,
                self.grid.height,
                self.display.cell_size
            );
        }

        let display = &self.display;
        if display.window_width > MAX_WINDOW_SIDE
            || display.window_height > MAX_WINDOW_SIDE
            || display.border_width > MAX_WINDOW_SIDE
        {
            anyhow::bail!(
                "Window {}x{} with border {} exceeds the {}px limit",
                display.window_width,
                display.window_height,
                display.border_width,
                MAX_WINDOW_SIDE
            );
        }

        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(auto_play) = cli_overrides.auto_play {
            self.simulation.auto_play = auto_play;
        }
    }

    /// Pixel extent of the grid area as (width, height), `None` on overflow
    pub fn grid_pixel_size(&self) -> Option<(usize, usize)> {
        Some((
            self.grid.width.checked_mul(self.display.cell_size)?,
            self.grid.height.checked_mul(self.display.cell_size)?,
        ))
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub generations: Option<usize>,
    pub format: Option<OutputFormat>,
    pub auto_play: Option<bool>,
}
