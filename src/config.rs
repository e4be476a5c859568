use crate::model::{Direction, ShimmerOptions};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Optional YAML configuration, used by the demo binary to supply defaults
/// that command line flags can override.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text to display.
    pub text: Option<String>,
    /// Base color as a hex string.
    pub color: Option<String>,
    /// Milliseconds between animation frames.
    pub interval_ms: Option<u64>,
    /// Peak lightness percentage.
    pub peak_light: Option<u8>,
    /// Wave width in characters.
    pub wave_width: Option<usize>,
    /// Pause between sweeps, in ticks.
    pub wave_pause: Option<usize>,
    /// Sweep direction.
    pub direction: Option<Direction>,
}

/// Errors that can occur while loading a configuration file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    InvalidConfig(#[from] serde_yaml::Error),
}

impl Config {
    /// Load a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a configuration from YAML contents.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Animation options with this configuration applied on top of the
    /// defaults.
    pub fn options(&self) -> ShimmerOptions {
        let defaults = ShimmerOptions::default();
        ShimmerOptions {
            interval: self
                .interval_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.interval),
            peak_light: self.peak_light.unwrap_or(defaults.peak_light),
            wave_width: self.wave_width.unwrap_or(defaults.wave_width),
            wave_pause: self.wave_pause.unwrap_or(defaults.wave_pause),
            direction: self.direction.unwrap_or(defaults.direction),
        }
    }
}
