//! Gameplay option snapshots.
//!
//! [`GameOptions`] is the bundle of parameters a lobby host can tune. The
//! platform keeps one live copy per session; the mode registry keeps one
//! saved copy per [`GameMode`](crate::state::GameMode).

mod cosmetics;
mod map;

pub use cosmetics::ColorType;
pub use map::MapType;

use std::fmt;

/// Distance at which an impostor can kill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KillDistance {
    Short,
    #[default]
    Normal,
    Long,
}

/// When the shared task bar is updated for crewmates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskBarUpdate {
    #[default]
    Always,
    Meetings,
    Never,
}

/// A point-in-time bundle of gameplay options.
///
/// No validation happens here. Values reach this type either from the
/// platform defaults, the Hide and Seek preset, or the command parser, which
/// rejects anything outside the configured limits.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    pub map: MapType,
    /// Vision radius multiplier for impostors.
    pub impostor_light_mod: f32,
    /// Vision radius multiplier for crewmates.
    pub crew_light_mod: f32,
    /// Seconds between kills.
    pub kill_cooldown: f32,
    pub kill_distance: KillDistance,
    /// Discussion phase length in seconds.
    pub discussion_time: u32,
    /// Voting phase length in seconds.
    pub voting_time: u32,
    pub num_emergency_meetings: u32,
    /// Seconds before the emergency button can be used.
    pub emergency_cooldown: u32,
    pub num_impostors: u32,
    /// Reveal whether an ejected player was an impostor.
    pub confirm_impostor: bool,
    pub visual_tasks: bool,
    pub anonymous_votes: bool,
    pub num_common_tasks: u32,
    pub num_short_tasks: u32,
    pub num_long_tasks: u32,
    /// Player movement speed multiplier.
    pub player_speed_mod: f32,
    pub task_bar_update: TaskBarUpdate,
}

impl Default for GameOptions {
    /// Options a freshly created game starts with on the platform.
    fn default() -> Self {
        Self {
            map: MapType::Skeld,
            impostor_light_mod: 1.5,
            crew_light_mod: 1.0,
            kill_cooldown: 15.0,
            kill_distance: KillDistance::Normal,
            discussion_time: 15,
            voting_time: 120,
            num_emergency_meetings: 1,
            emergency_cooldown: 15,
            num_impostors: 1,
            confirm_impostor: true,
            visual_tasks: true,
            anonymous_votes: false,
            num_common_tasks: 1,
            num_short_tasks: 2,
            num_long_tasks: 1,
            player_speed_mod: 1.0,
            task_bar_update: TaskBarUpdate::Always,
        }
    }
}

impl GameOptions {
    /// The fixed preset a session's Hide and Seek mode starts from.
    pub fn hide_and_seek() -> Self {
        Self {
            impostor_light_mod: 0.25,
            crew_light_mod: 0.75,
            kill_distance: KillDistance::Short,
            discussion_time: 0,
            voting_time: 1,
            kill_cooldown: 10.0,
            num_emergency_meetings: 0,
            num_impostors: 1,
            emergency_cooldown: 0,
            confirm_impostor: true,
            visual_tasks: false,
            anonymous_votes: true,
            num_common_tasks: 0,
            num_short_tasks: 4,
            num_long_tasks: 0,
            player_speed_mod: 1.5,
            task_bar_update: TaskBarUpdate::Always,
            ..Self::default()
        }
    }

    /// Overwrite every field of `self` with the values from `source`.
    ///
    /// `source` is destructured so a field added to the struct cannot be
    /// forgotten here.
    pub fn copy_from(&mut self, source: &GameOptions) {
        let GameOptions {
            map,
            impostor_light_mod,
            crew_light_mod,
            kill_cooldown,
            kill_distance,
            discussion_time,
            voting_time,
            num_emergency_meetings,
            emergency_cooldown,
            num_impostors,
            confirm_impostor,
            visual_tasks,
            anonymous_votes,
            num_common_tasks,
            num_short_tasks,
            num_long_tasks,
            player_speed_mod,
            task_bar_update,
        } = source;

        self.map = *map;
        self.impostor_light_mod = *impostor_light_mod;
        self.crew_light_mod = *crew_light_mod;
        self.kill_cooldown = *kill_cooldown;
        self.kill_distance = *kill_distance;
        self.discussion_time = *discussion_time;
        self.voting_time = *voting_time;
        self.num_emergency_meetings = *num_emergency_meetings;
        self.emergency_cooldown = *emergency_cooldown;
        self.num_impostors = *num_impostors;
        self.confirm_impostor = *confirm_impostor;
        self.visual_tasks = *visual_tasks;
        self.anonymous_votes = *anonymous_votes;
        self.num_common_tasks = *num_common_tasks;
        self.num_short_tasks = *num_short_tasks;
        self.num_long_tasks = *num_long_tasks;
        self.player_speed_mod = *player_speed_mod;
        self.task_bar_update = *task_bar_update;
    }
}

impl fmt::Display for GameOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "map={} kill_cd={} vision(imp={}, crew={}) impostors={} tasks(common={}, short={}, long={}) \
             discussion={}s voting={}s meetings={} speed={} anonymous_votes={} visual_tasks={}",
            self.map,
            self.kill_cooldown,
            self.impostor_light_mod,
            self.crew_light_mod,
            self.num_impostors,
            self.num_common_tasks,
            self.num_short_tasks,
            self.num_long_tasks,
            self.discussion_time,
            self.voting_time,
            self.num_emergency_meetings,
            self.player_speed_mod,
            self.anonymous_votes,
            self.visual_tasks,
        )
    }
}
