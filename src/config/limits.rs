//! Accepted ranges for numeric command arguments.

use serde::Deserialize;

/// Accepted ranges for numeric command arguments.
///
/// Values outside these bounds are rejected when a command is parsed and
/// never reach the game options.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Lowest kill cooldown in seconds (default: 0).
    #[serde(default = "default_kill_cooldown_min")]
    pub kill_cooldown_min: f32,
    /// Highest kill cooldown in seconds (default: 60).
    #[serde(default = "default_kill_cooldown_max")]
    pub kill_cooldown_max: f32,
    /// Lowest vision multiplier (default: 0).
    #[serde(default = "default_vision_min")]
    pub vision_min: f32,
    /// Highest vision multiplier (default: 5).
    #[serde(default = "default_vision_max")]
    pub vision_max: f32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            kill_cooldown_min: default_kill_cooldown_min(),
            kill_cooldown_max: default_kill_cooldown_max(),
            vision_min: default_vision_min(),
            vision_max: default_vision_max(),
        }
    }
}

fn default_kill_cooldown_min() -> f32 {
    0.0
}

fn default_kill_cooldown_max() -> f32 {
    60.0
}

fn default_vision_min() -> f32 {
    0.0
}

fn default_vision_max() -> f32 {
    5.0
}
