//! Command execution.
//!
//! Execution is synchronous and touches only the game's mode state and live
//! options. Anything that needs the platform is returned as a
//! [`LobbyEffect`] for the dispatcher to apply.

use super::parse::{LobbyCommand, VisionTarget};
use crate::options::{GameOptions, MapType};
use crate::state::{GameMode, ModeState};

/// Follow-up work produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum LobbyEffect {
    /// Push the live options to every client.
    SyncSettings,
    /// Send a line of feedback to the host.
    Reply(String),
}

/// Apply `command` to a game's mode state and live options.
pub fn execute(
    command: LobbyCommand,
    state: &mut ModeState,
    live: &mut GameOptions,
    prefix: &str,
) -> Vec<LobbyEffect> {
    match command {
        LobbyCommand::Help => vec![LobbyEffect::Reply(format!(
            "Commands list: {prefix}map, {prefix}gamemode, {prefix}killcd, {prefix}vision"
        ))],
        LobbyCommand::ListMaps => vec![LobbyEffect::Reply(format!(
            "Available Maps: {}",
            MapType::listing()
        ))],
        LobbyCommand::SetMap(map) => {
            live.map = map;
            changed(format!("Setting map to {map}"))
        }
        LobbyCommand::ShowMode => vec![
            LobbyEffect::Reply(format!("Current Game Mode: {}", state.mode())),
            LobbyEffect::Reply(format!("(Available Modes: {})", GameMode::listing())),
        ],
        LobbyCommand::SetMode(target) => {
            if state.switch_mode(target, live) {
                changed(format!("Setting game mode to {target}"))
            } else {
                Vec::new()
            }
        }
        LobbyCommand::SetKillCooldown(value) => {
            live.kill_cooldown = value;
            changed(format!("Setting kill cooldown to {value}"))
        }
        LobbyCommand::SetVision { target, value } => {
            match target {
                VisionTarget::Impostor => live.impostor_light_mod = value,
                VisionTarget::Crewmate => live.crew_light_mod = value,
            }
            changed(format!("Setting vision for {} to {value}", target.label()))
        }
    }
}

fn changed(confirmation: String) -> Vec<LobbyEffect> {
    vec![LobbyEffect::SyncSettings, LobbyEffect::Reply(confirmation)]
}
