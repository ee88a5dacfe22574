//! Host platform interface.
//!
//! The lobby layer never owns games or players. The platform hands it trait
//! objects for both and is asked to do the actual networking: pushing options
//! to clients, renaming players, sending chat and changing colors.

pub mod memory;

use crate::error::PlatformResult;
use crate::options::{ColorType, GameOptions};
use crate::state::GameCode;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Lifecycle state of a game as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    NotStarted,
    Started,
    Ended,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameState::NotStarted => "not started",
            GameState::Started => "started",
            GameState::Ended => "ended",
        })
    }
}

/// A hosted game session.
#[async_trait]
pub trait GameSession: Send + Sync {
    fn code(&self) -> GameCode;

    fn state(&self) -> GameState;

    /// The live options clients will receive on the next sync.
    ///
    /// Callers lock it only for synchronous edits and never across `.await`.
    fn options(&self) -> &Mutex<GameOptions>;

    fn players(&self) -> Vec<Arc<dyn Participant>>;

    /// Push the live options to every connected client.
    async fn sync_settings(&self) -> PlatformResult<()>;
}

/// A player connected to a game.
#[async_trait]
pub trait Participant: Send + Sync {
    /// Current display name.
    fn name(&self) -> String;

    fn is_host(&self) -> bool;

    fn is_impostor(&self) -> bool;

    async fn set_name(&self, name: &str) -> PlatformResult<()>;

    /// Send chat as this player, visible to the whole lobby.
    async fn send_chat(&self, text: &str) -> PlatformResult<()>;

    /// Send chat as this player, visible only to this player.
    async fn send_chat_private(&self, text: &str) -> PlatformResult<()>;

    async fn set_color(&self, color: ColorType) -> PlatformResult<()>;
}
