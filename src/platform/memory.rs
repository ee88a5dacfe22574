//! In-memory platform.
//!
//! Backs the console binary and the integration tests. Every outbound call
//! is recorded so callers can inspect what the lobby layer asked for.

use super::{GameSession, GameState, Participant};
use crate::error::{PlatformError, PlatformResult};
use crate::options::{ColorType, GameOptions};
use crate::state::GameCode;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::debug;

/// Something a [`MemoryPlayer`] was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    Renamed(String),
    Chat { sender: String, text: String },
    PrivateChat { sender: String, text: String },
    Colored(ColorType),
}

pub struct MemoryPlayer {
    name: Mutex<String>,
    host: bool,
    impostor: AtomicBool,
    connected: AtomicBool,
    color: Mutex<Option<ColorType>>,
    actions: Mutex<Vec<PlayerAction>>,
}

impl MemoryPlayer {
    pub fn new(name: impl Into<String>, host: bool) -> Arc<Self> {
        Arc::new(Self {
            name: Mutex::new(name.into()),
            host,
            impostor: AtomicBool::new(false),
            connected: AtomicBool::new(true),
            color: Mutex::new(None),
            actions: Mutex::new(Vec::new()),
        })
    }

    pub fn set_impostor(&self, impostor: bool) {
        self.impostor.store(impostor, Ordering::Relaxed);
    }

    /// Make every further outbound call for this player fail.
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::Relaxed);
    }

    pub fn color(&self) -> Option<ColorType> {
        *self.color.lock()
    }

    pub fn actions(&self) -> Vec<PlayerAction> {
        self.actions.lock().clone()
    }

    /// Text of every chat line sent as this player, public or private.
    pub fn chat_lines(&self) -> Vec<String> {
        self.actions
            .lock()
            .iter()
            .filter_map(|action| match action {
                PlayerAction::Chat { text, .. } | PlayerAction::PrivateChat { text, .. } => {
                    Some(text.clone())
                }
                _ => None,
            })
            .collect()
    }

    fn ensure_connected(&self) -> PlatformResult<()> {
        if self.connected.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(PlatformError::Disconnected)
        }
    }

    fn record(&self, action: PlayerAction) {
        self.actions.lock().push(action);
    }
}

#[async_trait]
impl Participant for MemoryPlayer {
    fn name(&self) -> String {
        self.name.lock().clone()
    }

    fn is_host(&self) -> bool {
        self.host
    }

    fn is_impostor(&self) -> bool {
        self.impostor.load(Ordering::Relaxed)
    }

    async fn set_name(&self, name: &str) -> PlatformResult<()> {
        self.ensure_connected()?;
        *self.name.lock() = name.to_string();
        self.record(PlayerAction::Renamed(name.to_string()));
        Ok(())
    }

    async fn send_chat(&self, text: &str) -> PlatformResult<()> {
        self.ensure_connected()?;
        self.record(PlayerAction::Chat {
            sender: self.name(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_chat_private(&self, text: &str) -> PlatformResult<()> {
        self.ensure_connected()?;
        self.record(PlayerAction::PrivateChat {
            sender: self.name(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn set_color(&self, color: ColorType) -> PlatformResult<()> {
        self.ensure_connected()?;
        *self.color.lock() = Some(color);
        self.record(PlayerAction::Colored(color));
        Ok(())
    }
}

pub struct MemorySession {
    code: GameCode,
    state: Mutex<GameState>,
    options: Mutex<GameOptions>,
    players: Mutex<Vec<Arc<MemoryPlayer>>>,
    syncs: AtomicUsize,
}

impl MemorySession {
    pub fn new(code: GameCode) -> Arc<Self> {
        Arc::new(Self {
            code,
            state: Mutex::new(GameState::NotStarted),
            options: Mutex::new(GameOptions::default()),
            players: Mutex::new(Vec::new()),
            syncs: AtomicUsize::new(0),
        })
    }

    pub fn add_player(&self, player: Arc<MemoryPlayer>) {
        self.players.lock().push(player);
    }

    /// Find a player by current display name.
    pub fn player(&self, name: &str) -> Option<Arc<MemoryPlayer>> {
        self.players
            .lock()
            .iter()
            .find(|p| p.name() == name)
            .cloned()
    }

    pub fn set_state(&self, state: GameState) {
        *self.state.lock() = state;
    }

    /// Number of successful [`GameSession::sync_settings`] calls.
    pub fn sync_count(&self) -> usize {
        self.syncs.load(Ordering::Relaxed)
    }

    pub fn options_snapshot(&self) -> GameOptions {
        self.options.lock().clone()
    }
}

#[async_trait]
impl GameSession for MemorySession {
    fn code(&self) -> GameCode {
        self.code.clone()
    }

    fn state(&self) -> GameState {
        *self.state.lock()
    }

    fn options(&self) -> &Mutex<GameOptions> {
        &self.options
    }

    fn players(&self) -> Vec<Arc<dyn Participant>> {
        self.players
            .lock()
            .iter()
            .map(|p| Arc::clone(p) as Arc<dyn Participant>)
            .collect()
    }

    async fn sync_settings(&self) -> PlatformResult<()> {
        self.syncs.fetch_add(1, Ordering::Relaxed);
        debug!(game = %self.code, "Settings synced to clients");
        Ok(())
    }
}
