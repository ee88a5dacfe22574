//! Chat command parser.

use crate::config::LimitsConfig;
use crate::error::{CommandError, CommandUsage};
use crate::options::MapType;
use crate::state::GameMode;

/// Which role a vision command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisionTarget {
    Impostor,
    Crewmate,
}

impl VisionTarget {
    fn from_alias(alias: &str) -> Option<Self> {
        match alias {
            "imp" | "impostor" | "impostors" | "imposter" | "imposters" => Some(Self::Impostor),
            "crew" | "crewmate" | "crewmates" => Some(Self::Crewmate),
            _ => None,
        }
    }

    /// Plural role name used in feedback.
    pub fn label(self) -> &'static str {
        match self {
            Self::Impostor => "Impostors",
            Self::Crewmate => "Crewmates",
        }
    }
}

/// A validated host command.
#[derive(Debug, Clone, PartialEq)]
pub enum LobbyCommand {
    Help,
    ListMaps,
    SetMap(MapType),
    ShowMode,
    SetMode(GameMode),
    SetKillCooldown(f32),
    SetVision { target: VisionTarget, value: f32 },
}

/// Parse the text of a chat command with its prefix already removed.
///
/// Matching is case-insensitive. Numeric arguments outside `limits` are
/// rejected here so they never reach the game options.
pub fn parse(body: &str, limits: &LimitsConfig) -> Result<LobbyCommand, CommandError> {
    let lowered = body.to_lowercase();
    let parts: Vec<&str> = lowered.split_whitespace().collect();
    let Some((&name, args)) = parts.split_first() else {
        return Err(CommandError::UnknownCommand(String::new()));
    };

    match name {
        "help" => Ok(LobbyCommand::Help),
        "map" => match args.first() {
            None => Ok(LobbyCommand::ListMaps),
            Some(map) => MapType::from_name(map)
                .map(LobbyCommand::SetMap)
                .ok_or_else(|| CommandError::UnknownMap(map.to_string())),
        },
        "gamemode" => match args {
            [] => Ok(LobbyCommand::ShowMode),
            [mode] => GameMode::from_alias(mode)
                .map(LobbyCommand::SetMode)
                .ok_or_else(|| CommandError::UnknownMode(mode.to_string())),
            _ => Err(CommandError::Usage(CommandUsage::GameMode)),
        },
        "killcd" => match args {
            [value] => parse_in_range(
                value,
                CommandUsage::KillCooldown,
                "kill cooldown",
                limits.kill_cooldown_min,
                limits.kill_cooldown_max,
            )
            .map(LobbyCommand::SetKillCooldown),
            _ => Err(CommandError::Usage(CommandUsage::KillCooldown)),
        },
        "vision" => match args {
            [target, value] => {
                let target = VisionTarget::from_alias(target)
                    .ok_or_else(|| CommandError::UnknownVisionTarget(target.to_string()))?;
                let value = parse_in_range(
                    value,
                    CommandUsage::Vision,
                    "vision",
                    limits.vision_min,
                    limits.vision_max,
                )?;
                Ok(LobbyCommand::SetVision { target, value })
            }
            _ => Err(CommandError::Usage(CommandUsage::Vision)),
        },
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn parse_in_range(
    text: &str,
    usage: CommandUsage,
    field: &'static str,
    min: f32,
    max: f32,
) -> Result<f32, CommandError> {
    let value: f32 = text.parse().map_err(|_| CommandError::Usage(usage))?;
    // NaN fails `contains`, so it is rejected along with infinities.
    if !(min..=max).contains(&value) {
        return Err(CommandError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(body: &str) -> Result<LobbyCommand, CommandError> {
        parse(body, &LimitsConfig::default())
    }

    #[test]
    fn help_and_listings() {
        assert_eq!(p("help"), Ok(LobbyCommand::Help));
        assert_eq!(p("HELP me"), Ok(LobbyCommand::Help));
        assert_eq!(p("map"), Ok(LobbyCommand::ListMaps));
        assert_eq!(p("gamemode"), Ok(LobbyCommand::ShowMode));
    }

    #[test]
    fn map_names_are_case_insensitive() {
        assert_eq!(p("map polus"), Ok(LobbyCommand::SetMap(MapType::Polus)));
        assert_eq!(p("MAP MiraHQ"), Ok(LobbyCommand::SetMap(MapType::MiraHQ)));
        assert_eq!(
            p("map dleks"),
            Err(CommandError::UnknownMap("dleks".to_string()))
        );
    }

    #[test]
    fn gamemode_aliases() {
        for alias in ["standard", "normal", "Normal"] {
            assert_eq!(
                p(&format!("gamemode {alias}")),
                Ok(LobbyCommand::SetMode(GameMode::Standard))
            );
        }
        for alias in ["hns", "HideNSeek", "hideandseek"] {
            assert_eq!(
                p(&format!("GameMode {alias}")),
                Ok(LobbyCommand::SetMode(GameMode::HideAndSeek))
            );
        }
        assert_eq!(
            p("gamemode tag"),
            Err(CommandError::UnknownMode("tag".to_string()))
        );
        assert_eq!(
            p("gamemode hns now"),
            Err(CommandError::Usage(CommandUsage::GameMode))
        );
    }

    #[test]
    fn killcd_parses_numbers() {
        assert_eq!(p("killcd 12.5"), Ok(LobbyCommand::SetKillCooldown(12.5)));
        assert_eq!(p("killcd 0"), Ok(LobbyCommand::SetKillCooldown(0.0)));
    }

    #[test]
    fn killcd_rejects_malformed_arguments() {
        let usage = Err(CommandError::Usage(CommandUsage::KillCooldown));
        assert_eq!(p("killcd abc"), usage);
        assert_eq!(p("killcd"), usage);
        assert_eq!(p("killcd 10 20"), usage);
    }

    #[test]
    fn killcd_rejects_out_of_range() {
        assert!(matches!(
            p("killcd 61"),
            Err(CommandError::OutOfRange {
                field: "kill cooldown",
                ..
            })
        ));
        assert!(matches!(p("killcd -1"), Err(CommandError::OutOfRange { .. })));
        assert!(matches!(p("killcd nan"), Err(CommandError::OutOfRange { .. })));
        assert!(matches!(p("killcd inf"), Err(CommandError::OutOfRange { .. })));
    }

    #[test]
    fn vision_targets() {
        for alias in ["imp", "impostor", "impostors", "imposter", "imposters"] {
            assert_eq!(
                p(&format!("vision {alias} 2.5")),
                Ok(LobbyCommand::SetVision {
                    target: VisionTarget::Impostor,
                    value: 2.5
                })
            );
        }
        for alias in ["crew", "crewmate", "CREWMATES"] {
            assert_eq!(
                p(&format!("vision {alias} 1.0")),
                Ok(LobbyCommand::SetVision {
                    target: VisionTarget::Crewmate,
                    value: 1.0
                })
            );
        }
    }

    #[test]
    fn vision_rejects_bad_input() {
        assert_eq!(
            p("vision ghost 1.0"),
            Err(CommandError::UnknownVisionTarget("ghost".to_string()))
        );
        assert_eq!(
            p("vision imp lots"),
            Err(CommandError::Usage(CommandUsage::Vision))
        );
        assert_eq!(
            p("vision imp"),
            Err(CommandError::Usage(CommandUsage::Vision))
        );
        assert!(matches!(
            p("vision crew 9"),
            Err(CommandError::OutOfRange { field: "vision", .. })
        ));
    }

    #[test]
    fn vision_target_checked_before_value() {
        assert_eq!(
            p("vision ghost 9"),
            Err(CommandError::UnknownVisionTarget("ghost".to_string()))
        );
        assert_eq!(
            p("vision ghost lots"),
            Err(CommandError::UnknownVisionTarget("ghost".to_string()))
        );
    }

    #[test]
    fn limits_come_from_config() {
        let limits = LimitsConfig {
            kill_cooldown_max: 100.0,
            ..LimitsConfig::default()
        };
        assert_eq!(
            parse("killcd 90", &limits),
            Ok(LobbyCommand::SetKillCooldown(90.0))
        );
    }

    #[test]
    fn unknown_and_empty_commands() {
        assert_eq!(
            p("dance now"),
            Err(CommandError::UnknownCommand("dance".to_string()))
        );
        assert_eq!(p("   "), Err(CommandError::UnknownCommand(String::new())));
    }
}
