//! Lobby event coordinator.
//!
//! Receives the platform's game lifecycle and chat events in the order the
//! platform emits them and drives the mode registry, the command dispatcher
//! and the Hide and Seek start effect. It schedules nothing of its own.

use crate::commands::{ChatOutcome, CommandDispatcher};
use crate::config::{Config, HideAndSeekConfig};
use crate::error::RegistryError;
use crate::feedback::{self, FeedbackDelivery};
use crate::platform::{GameSession, Participant};
use crate::state::{GameMode, ModeRegistry};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// An event reported by the host platform.
pub enum LobbyEvent<'a> {
    GameCreated(&'a dyn GameSession),
    GameDestroyed(&'a dyn GameSession),
    GameStarted(&'a dyn GameSession),
    GameEnded(&'a dyn GameSession),
    PlayerChat {
        session: &'a dyn GameSession,
        sender: &'a dyn Participant,
        message: &'a str,
    },
}

pub struct Lobby {
    registry: Arc<ModeRegistry>,
    dispatcher: CommandDispatcher,
    hide_and_seek: HideAndSeekConfig,
}

impl Lobby {
    /// Build a lobby with the feedback delivery named in `config`.
    pub fn new(config: &Config) -> Self {
        Self::with_feedback(config, feedback::from_config(&config.feedback))
    }

    pub fn with_feedback(config: &Config, feedback: Arc<dyn FeedbackDelivery>) -> Self {
        let registry = Arc::new(ModeRegistry::new());
        let dispatcher = CommandDispatcher::new(Arc::clone(&registry), feedback, config);
        Self {
            registry,
            dispatcher,
            hide_and_seek: config.hide_and_seek.clone(),
        }
    }

    pub fn registry(&self) -> &Arc<ModeRegistry> {
        &self.registry
    }

    /// Route a platform event to its handler.
    pub async fn handle_event(&self, event: LobbyEvent<'_>) -> Result<(), RegistryError> {
        match event {
            LobbyEvent::GameCreated(session) => self.on_game_created(session),
            LobbyEvent::GameDestroyed(session) => {
                self.on_game_destroyed(session);
                Ok(())
            }
            LobbyEvent::GameStarted(session) => self.on_game_started(session).await,
            LobbyEvent::GameEnded(session) => {
                self.on_game_ended(session);
                Ok(())
            }
            LobbyEvent::PlayerChat {
                session,
                sender,
                message,
            } => self
                .on_player_chat(session, sender, message)
                .await
                .map(|_| ()),
        }
    }

    pub fn on_game_created(&self, session: &dyn GameSession) -> Result<(), RegistryError> {
        let code = session.code();
        self.registry.register(code.clone()).inspect_err(|e| {
            error!(game = %code, error = %e, "Game created twice");
        })?;
        info!(game = %code, "Game created");
        Ok(())
    }

    pub fn on_game_destroyed(&self, session: &dyn GameSession) {
        let code = session.code();
        if self.registry.unregister(&code) {
            info!(game = %code, "Game destroyed");
        } else {
            debug!(game = %code, "Destroyed game had no mode state");
        }
    }

    /// Color every player by role when a Hide and Seek game starts.
    ///
    /// A player who cannot be recolored is logged and skipped.
    pub async fn on_game_started(&self, session: &dyn GameSession) -> Result<(), RegistryError> {
        let code = session.code();
        let state = self.registry.lock(&code).await.inspect_err(|e| {
            error!(game = %code, error = %e, "Started game has no mode state");
        })?;

        if state.mode() != GameMode::HideAndSeek {
            return Ok(());
        }

        let players = session.players();
        info!(game = %code, players = players.len(), "Applying Hide and Seek colors");
        for player in players {
            let color = if player.is_impostor() {
                self.hide_and_seek.seeker_color
            } else {
                self.hide_and_seek.hider_color
            };
            if let Err(e) = player.set_color(color).await {
                warn!(
                    game = %code,
                    player = %player.name(),
                    %color,
                    error = %e,
                    "Failed to set Hide and Seek color"
                );
            }
        }
        Ok(())
    }

    pub fn on_game_ended(&self, session: &dyn GameSession) {
        debug!(game = %session.code(), "Game ended");
    }

    pub async fn on_player_chat(
        &self,
        session: &dyn GameSession,
        sender: &dyn Participant,
        message: &str,
    ) -> Result<ChatOutcome, RegistryError> {
        self.dispatcher.handle_chat(session, sender, message).await
    }
}
