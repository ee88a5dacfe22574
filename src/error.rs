//! Error types for the lobby command layer.
//!
//! Command errors are recovered inside the dispatcher and turned into host
//! feedback. Registry errors mean the platform integration delivered events
//! out of order and abort the single operation that hit them.

use crate::state::GameCode;
use thiserror::Error;

// ============================================================================
// Registry Errors (session lifecycle)
// ============================================================================

/// Errors from the per-session mode registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("game {0} is already registered")]
    AlreadyRegistered(GameCode),

    #[error("game {0} is not registered")]
    NotRegistered(GameCode),
}

// ============================================================================
// Platform Errors (outbound calls)
// ============================================================================

/// Failures reported by the host platform for outbound calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("participant is no longer connected")]
    Disconnected,

    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type for platform calls.
pub type PlatformResult<T> = Result<T, PlatformError>;

// ============================================================================
// Command Errors (chat command parsing)
// ============================================================================

/// A command whose arguments did not match its grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandUsage {
    GameMode,
    KillCooldown,
    Vision,
}

impl CommandUsage {
    /// Usage line shown to the host, using the configured command prefix.
    pub fn expecting(self, prefix: &str) -> String {
        let grammar = match self {
            Self::GameMode => "gamemode {normal|hns}",
            Self::KillCooldown => "killcd VALUE",
            Self::Vision => "vision {impostor|crewmate} VALUE",
        };
        format!("Invalid command. Expecting: '{prefix}{grammar}'")
    }
}

/// Errors produced while turning a chat line into a command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("malformed arguments for {0:?}")]
    Usage(CommandUsage),

    #[error("{field} {value} outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("unknown map: {0}")]
    UnknownMap(String),

    #[error("unknown game mode: {0}")]
    UnknownMode(String),

    #[error("unknown vision target: {0}")]
    UnknownVisionTarget(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl CommandError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::OutOfRange { .. } => "out_of_range",
            Self::UnknownMap(_) => "unknown_map",
            Self::UnknownMode(_) => "unknown_mode",
            Self::UnknownVisionTarget(_) => "unknown_vision_target",
            Self::UnknownCommand(_) => "unknown_command",
        }
    }

    /// Feedback text for the host.
    ///
    /// Returns `None` for errors that are only logged server-side.
    pub fn reply_text(&self, prefix: &str) -> Option<String> {
        let text = match self {
            Self::Usage(usage) => usage.expecting(prefix),
            Self::OutOfRange {
                field, min, max, ..
            } => format!("Invalid {field}. Expecting a value from {min} to {max}."),
            Self::UnknownMap(_) => format!(
                "Unknown map. Available Maps: {}",
                crate::options::MapType::listing()
            ),
            Self::UnknownMode(_) => CommandUsage::GameMode.expecting(prefix),
            Self::UnknownVisionTarget(_) => CommandUsage::Vision.expecting(prefix),
            Self::UnknownCommand(_) => return None,
        };
        Some(text)
    }
}
