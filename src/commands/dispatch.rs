//! Chat command dispatch.
//!
//! Filters chat down to host commands in unstarted games, runs them under the
//! game's mode lock and applies the resulting effects.

use super::execute::{LobbyEffect, execute};
use super::parse::{LobbyCommand, parse};
use crate::config::{Config, LimitsConfig};
use crate::error::{CommandError, RegistryError};
use crate::feedback::FeedbackDelivery;
use crate::platform::{GameSession, GameState, Participant};
use crate::state::{ModeRegistry, ModeState};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// What happened to a chat line.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    /// Ordinary chat, a non-host sender, or a game already in progress.
    Ignored,
    /// A command ran; its effects have been applied.
    Executed,
    /// A command was recognized as one but rejected.
    Rejected(CommandError),
}

pub struct CommandDispatcher {
    registry: Arc<ModeRegistry>,
    feedback: Arc<dyn FeedbackDelivery>,
    prefix: String,
    limits: LimitsConfig,
}

impl CommandDispatcher {
    pub fn new(
        registry: Arc<ModeRegistry>,
        feedback: Arc<dyn FeedbackDelivery>,
        config: &Config,
    ) -> Self {
        if config.commands.prefix.is_empty() {
            warn!("Empty command prefix; every chat line will be treated as plain chat");
        }
        Self {
            registry,
            feedback,
            prefix: config.commands.prefix.clone(),
            limits: config.limits.clone(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Handle one chat line.
    ///
    /// Fails only when the game has no mode state, which means creation and
    /// chat events arrived out of order. The command is dropped in that case.
    pub async fn handle_chat(
        &self,
        session: &dyn GameSession,
        sender: &dyn Participant,
        message: &str,
    ) -> Result<ChatOutcome, RegistryError> {
        let Some(body) = self.command_body(session, sender, message) else {
            return Ok(ChatOutcome::Ignored);
        };

        let code = session.code();
        let mut state = self.registry.lock(&code).await.inspect_err(|e| {
            error!(game = %code, error = %e, "Dropping command for game without mode state");
        })?;

        let (outcome, effects) = match parse(body, &self.limits) {
            Ok(command) => {
                debug!(game = %code, ?command, "Executing lobby command");
                let effects = self.run(session, &mut state, command);
                (ChatOutcome::Executed, effects)
            }
            Err(err) => {
                let effects = match err.reply_text(&self.prefix) {
                    Some(text) => {
                        debug!(game = %code, reason = err.error_code(), "Rejected lobby command");
                        vec![LobbyEffect::Reply(text)]
                    }
                    None => {
                        info!(
                            game = %code,
                            sender = %sender.name(),
                            error = %err,
                            "Unknown lobby command"
                        );
                        Vec::new()
                    }
                };
                (ChatOutcome::Rejected(err), effects)
            }
        };

        // The mode lock stays held until the sync and feedback are done.
        self.apply_effects(session, sender, effects).await;
        drop(state);

        Ok(outcome)
    }

    /// Strip the prefix from a host command in an unstarted game.
    ///
    /// An empty prefix matches nothing, so plain chat never runs as a command.
    fn command_body<'m>(
        &self,
        session: &dyn GameSession,
        sender: &dyn Participant,
        message: &'m str,
    ) -> Option<&'m str> {
        if self.prefix.is_empty()
            || session.state() != GameState::NotStarted
            || !sender.is_host()
        {
            return None;
        }
        message.strip_prefix(self.prefix.as_str())
    }

    /// Execute with the platform's option lock held; never spans an `.await`.
    fn run(
        &self,
        session: &dyn GameSession,
        state: &mut ModeState,
        command: LobbyCommand,
    ) -> Vec<LobbyEffect> {
        let mut live = session.options().lock();
        execute(command, state, &mut live, &self.prefix)
    }

    async fn apply_effects(
        &self,
        session: &dyn GameSession,
        sender: &dyn Participant,
        effects: Vec<LobbyEffect>,
    ) {
        for effect in effects {
            match effect {
                LobbyEffect::SyncSettings => {
                    if let Err(e) = session.sync_settings().await {
                        warn!(game = %session.code(), error = %e, "Failed to sync settings");
                    }
                }
                LobbyEffect::Reply(text) => {
                    if let Err(e) = self.feedback.deliver(sender, &text).await {
                        warn!(
                            game = %session.code(),
                            recipient = %sender.name(),
                            error = %e,
                            "Failed to deliver command feedback"
                        );
                    }
                }
            }
        }
    }
}
