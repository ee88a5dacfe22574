//! Command feedback configuration.

use serde::Deserialize;

/// How feedback reaches the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStyle {
    /// Temporarily rename the host to `label` and chat as them.
    #[default]
    Disguised,
    /// Chat privately as the host without renaming.
    Whisper,
}

/// Command feedback configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default)]
    pub style: FeedbackStyle,
    /// Name the host wears while disguised feedback is sent (default: "Server").
    #[serde(default = "default_label")]
    pub label: String,
    /// Send disguised feedback only to the host instead of the whole lobby.
    #[serde(default)]
    pub private: bool,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            style: FeedbackStyle::default(),
            label: default_label(),
            private: false,
        }
    }
}

fn default_label() -> String {
    "Server".to_string()
}
