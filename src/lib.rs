//! lobby-commands - host chat commands and game mode snapshots for
//! multiplayer lobbies.
//!
//! The host platform reports game lifecycle and chat events to a [`Lobby`].
//! Hosts of games that have not started yet can retune options with short
//! chat commands and flip between a Standard and a Hide and Seek rule-set;
//! each mode keeps its own copy of the options across switches.

pub mod commands;
pub mod config;
pub mod error;
pub mod feedback;
pub mod lobby;
pub mod options;
pub mod platform;
pub mod state;

pub use commands::{ChatOutcome, CommandDispatcher, LobbyCommand, LobbyEffect};
pub use config::Config;
pub use error::{CommandError, PlatformError, RegistryError};
pub use lobby::{Lobby, LobbyEvent};
pub use options::GameOptions;
pub use platform::{GameSession, GameState, Participant};
pub use state::{GameCode, GameMode, ModeRegistry, ModeState};
