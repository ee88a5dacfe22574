//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("commands.prefix must not be empty")]
    EmptyPrefix,
    #[error("commands.prefix must not contain whitespace, got '{0}'")]
    WhitespaceInPrefix(String),
    #[error("feedback.label must not be empty")]
    EmptyLabel,
    #[error("limits.{0} must be a finite number")]
    NonFiniteLimit(&'static str),
    #[error("limits.{0}_min ({1}) is greater than limits.{0}_max ({2})")]
    InvertedRange(&'static str, f32, f32),
    #[error("hide_and_seek.seeker_color and hider_color are both {0}")]
    SameColors(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let prefix = &config.commands.prefix;
    if prefix.is_empty() {
        errors.push(ValidationError::EmptyPrefix);
    } else if prefix.chars().any(char::is_whitespace) {
        errors.push(ValidationError::WhitespaceInPrefix(prefix.clone()));
    }

    if config.feedback.label.trim().is_empty() {
        errors.push(ValidationError::EmptyLabel);
    }

    let limits = &config.limits;
    let ranges = [
        ("kill_cooldown", limits.kill_cooldown_min, limits.kill_cooldown_max),
        ("vision", limits.vision_min, limits.vision_max),
    ];
    for (name, min, max) in ranges {
        if !min.is_finite() || !max.is_finite() {
            errors.push(ValidationError::NonFiniteLimit(name));
        } else if min > max {
            errors.push(ValidationError::InvertedRange(name, min, max));
        }
    }

    let hns = &config.hide_and_seek;
    if hns.seeker_color == hns.hider_color {
        errors.push(ValidationError::SameColors(hns.seeker_color.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
