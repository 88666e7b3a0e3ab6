//! Configuration management for the simulator

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, GridConfig, OutputConfig, OutputFormat, Rgb, Settings,
    SimulationConfig,
};
