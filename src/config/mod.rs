//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, CommandsConfig, HideAndSeekConfig)
//! - [`feedback`]: How command feedback reaches the host (FeedbackConfig)
//! - [`limits`]: Accepted value ranges for numeric commands (LimitsConfig)
//! - [`validation`]: Startup validation of a loaded config

mod feedback;
mod limits;
mod types;
pub mod validation;

pub use feedback::{FeedbackConfig, FeedbackStyle};
pub use limits::LimitsConfig;
pub use types::{CommandsConfig, Config, ConfigError, HideAndSeekConfig};
