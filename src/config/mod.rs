//! Configuration management for the Game of Life console simulation

pub mod settings;

pub use settings::{CliOverrides, DisplayConfig, GridConfig, OutputFormat, PatternConfig, Settings};
