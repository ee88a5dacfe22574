//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::feedback::FeedbackConfig;
use super::limits::LimitsConfig;
use crate::options::ColorType;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Lobby configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Chat command recognition.
    #[serde(default)]
    pub commands: CommandsConfig,
    /// Delivery of command feedback to the host.
    #[serde(default)]
    pub feedback: FeedbackConfig,
    /// Accepted ranges for numeric command arguments.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Hide and Seek start-of-game effects.
    #[serde(default)]
    pub hide_and_seek: HideAndSeekConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Chat command recognition.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandsConfig {
    /// Leading text that marks a chat line as a command (default: "/").
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

/// Colors applied when a Hide and Seek game starts.
#[derive(Debug, Clone, Deserialize)]
pub struct HideAndSeekConfig {
    /// Color for impostors, who do the seeking (default: red).
    #[serde(default = "default_seeker_color")]
    pub seeker_color: ColorType,
    /// Color for everyone else (default: lime).
    #[serde(default = "default_hider_color")]
    pub hider_color: ColorType,
}

impl Default for HideAndSeekConfig {
    fn default() -> Self {
        Self {
            seeker_color: default_seeker_color(),
            hider_color: default_hider_color(),
        }
    }
}

fn default_prefix() -> String {
    "/".to_string()
}

fn default_seeker_color() -> ColorType {
    ColorType::Red
}

fn default_hider_color() -> ColorType {
    ColorType::Lime
}
