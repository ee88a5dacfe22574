//! Line-oriented console over the in-memory platform.
//!
//! ```text
//! create CODE
//! join CODE NAME [host] [impostor]
//! chat CODE NAME TEXT...
//! start CODE | end CODE | destroy CODE | show CODE
//! ```

use anyhow::{Context, anyhow, bail};
use lobby_commands::platform::memory::{MemoryPlayer, MemorySession};
use lobby_commands::{Config, GameCode, GameSession, GameState, Lobby, LobbyEvent};
use std::collections::HashMap;
use std::sync::Arc;

/// A parsed console line.
#[derive(Debug, PartialEq)]
enum ConsoleCommand {
    Create(GameCode),
    Join {
        code: GameCode,
        name: String,
        host: bool,
        impostor: bool,
    },
    Chat {
        code: GameCode,
        name: String,
        text: String,
    },
    Start(GameCode),
    End(GameCode),
    Destroy(GameCode),
    Show(GameCode),
}

fn parse_line(line: &str) -> anyhow::Result<Option<ConsoleCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim_start();
    let mut words = rest.split_whitespace();
    let code = words
        .next()
        .map(GameCode::new)
        .ok_or_else(|| anyhow!("'{verb}' needs a game code"))?;

    let command = match verb {
        "create" => ConsoleCommand::Create(code),
        "start" => ConsoleCommand::Start(code),
        "end" => ConsoleCommand::End(code),
        "destroy" => ConsoleCommand::Destroy(code),
        "show" => ConsoleCommand::Show(code),
        "join" => {
            let name = words.next().context("'join' needs a player name")?.to_string();
            let mut host = false;
            let mut impostor = false;
            for flag in words {
                match flag {
                    "host" => host = true,
                    "impostor" => impostor = true,
                    other => bail!("unknown join flag '{other}'"),
                }
            }
            ConsoleCommand::Join {
                code,
                name,
                host,
                impostor,
            }
        }
        "chat" => {
            // Keep the message verbatim after the code and name.
            let after_code = rest
                .split_once(char::is_whitespace)
                .map(|(_, tail)| tail.trim_start())
                .unwrap_or("");
            let (name, text) = after_code
                .split_once(char::is_whitespace)
                .unwrap_or((after_code, ""));
            if name.is_empty() {
                bail!("'chat' needs a player name");
            }
            ConsoleCommand::Chat {
                code,
                name: name.to_string(),
                text: text.trim_start().to_string(),
            }
        }
        other => bail!("unknown console command '{other}'"),
    };
    Ok(Some(command))
}

pub struct Console {
    lobby: Lobby,
    games: HashMap<GameCode, Arc<MemorySession>>,
}

impl Console {
    pub fn new(config: &Config) -> Self {
        Self {
            lobby: Lobby::new(config),
            games: HashMap::new(),
        }
    }

    pub async fn run_line(&mut self, line: &str) -> anyhow::Result<()> {
        let Some(command) = parse_line(line)? else {
            return Ok(());
        };

        match command {
            ConsoleCommand::Create(code) => {
                let session = MemorySession::new(code.clone());
                self.lobby
                    .handle_event(LobbyEvent::GameCreated(&*session))
                    .await?;
                self.games.insert(code, session);
            }
            ConsoleCommand::Join {
                code,
                name,
                host,
                impostor,
            } => {
                let session = self.game(&code)?;
                let player = MemoryPlayer::new(name, host);
                player.set_impostor(impostor);
                session.add_player(player);
            }
            ConsoleCommand::Chat { code, name, text } => {
                let session = self.game(&code)?;
                let player = session
                    .player(&name)
                    .with_context(|| format!("no player '{name}' in {code}"))?;
                let seen = player.chat_lines().len();
                let outcome = self
                    .lobby
                    .on_player_chat(&*session, &*player, &text)
                    .await?;
                println!("[{code}] {name}: {text} -> {outcome:?}");
                for reply in player.chat_lines().into_iter().skip(seen) {
                    println!("[{code}]   {reply}");
                }
            }
            ConsoleCommand::Start(code) => {
                let session = self.game(&code)?;
                session.set_state(GameState::Started);
                self.lobby
                    .handle_event(LobbyEvent::GameStarted(&*session))
                    .await?;
            }
            ConsoleCommand::End(code) => {
                let session = self.game(&code)?;
                session.set_state(GameState::Ended);
                self.lobby
                    .handle_event(LobbyEvent::GameEnded(&*session))
                    .await?;
            }
            ConsoleCommand::Destroy(code) => {
                let session = self
                    .games
                    .remove(&code)
                    .with_context(|| format!("no game {code}"))?;
                self.lobby
                    .handle_event(LobbyEvent::GameDestroyed(&*session))
                    .await?;
            }
            ConsoleCommand::Show(code) => {
                let session = self.game(&code)?;
                let mode = self.lobby.registry().current_mode(&code).await?;
                println!("[{code}] {} ({mode})", session.state());
                println!("[{code}]   {}", session.options_snapshot());
                for player in session.players() {
                    println!(
                        "[{code}]   {}{}{}",
                        player.name(),
                        if player.is_host() { " (host)" } else { "" },
                        if player.is_impostor() { " (impostor)" } else { "" },
                    );
                }
            }
        }
        Ok(())
    }

    fn game(&self, code: &GameCode) -> anyhow::Result<Arc<MemorySession>> {
        self.games
            .get(code)
            .cloned()
            .with_context(|| format!("no game {code}"))
    }
}
