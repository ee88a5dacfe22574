//! Integration test common infrastructure.
//!
//! Provides a lobby wired to the in-memory platform with one created game,
//! a host and a couple of guests.

#![allow(dead_code)]

use lobby_commands::platform::memory::{MemoryPlayer, MemorySession};
use lobby_commands::{ChatOutcome, Config, GameCode, Lobby, LobbyEvent, RegistryError};
use std::sync::Arc;

pub struct TestLobby {
    pub lobby: Lobby,
    pub session: Arc<MemorySession>,
    pub host: Arc<MemoryPlayer>,
    pub crewmate: Arc<MemoryPlayer>,
    pub impostor: Arc<MemoryPlayer>,
}

impl TestLobby {
    /// A created game with default config.
    pub async fn spawn(code: &str) -> anyhow::Result<Self> {
        Self::spawn_with(code, Config::default()).await
    }

    pub async fn spawn_with(code: &str, config: Config) -> anyhow::Result<Self> {
        let lobby = Lobby::new(&config);
        let session = MemorySession::new(GameCode::new(code));

        let host = MemoryPlayer::new("Host", true);
        let crewmate = MemoryPlayer::new("Crew", false);
        let impostor = MemoryPlayer::new("Imp", false);
        impostor.set_impostor(true);
        for player in [&host, &crewmate, &impostor] {
            session.add_player(Arc::clone(player));
        }

        lobby
            .handle_event(LobbyEvent::GameCreated(&*session))
            .await?;

        Ok(Self {
            lobby,
            session,
            host,
            crewmate,
            impostor,
        })
    }

    /// Send chat as the host.
    pub async fn host_says(&self, text: &str) -> Result<ChatOutcome, RegistryError> {
        self.lobby
            .on_player_chat(&*self.session, &*self.host, text)
            .await
    }

    /// Send chat as a non-host player.
    pub async fn guest_says(&self, text: &str) -> Result<ChatOutcome, RegistryError> {
        self.lobby
            .on_player_chat(&*self.session, &*self.crewmate, text)
            .await
    }

    /// Feedback lines the host has received so far.
    pub fn host_feedback(&self) -> Vec<String> {
        self.host.chat_lines()
    }
}
