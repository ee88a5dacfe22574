//! Game mode registry.
//!
//! Each registered game owns a [`ModeState`]: the active [`GameMode`] plus a
//! saved [`GameOptions`] snapshot for both modes. Entries are created when a
//! game is created and removed when it is destroyed; nothing else adds or
//! removes them.
//!
//! Every entry sits behind its own async mutex. Whoever handles an event for
//! a game holds that lock for the whole operation, so a mode switch is
//! complete before the next command for the same game looks at the options.
//! Games never share a lock.

use super::code::GameCode;
use crate::error::RegistryError;
use crate::options::GameOptions;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Rule-set a game is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Standard,
    HideAndSeek,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Standard, GameMode::HideAndSeek];

    /// Name shown to players.
    pub fn name(self) -> &'static str {
        match self {
            GameMode::Standard => "Normal",
            GameMode::HideAndSeek => "HideNSeek",
        }
    }

    /// Resolve a lower-case mode alias typed by a host.
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias {
            "standard" | "normal" => Some(GameMode::Standard),
            "hns" | "hidenseek" | "hideandseek" => Some(GameMode::HideAndSeek),
            _ => None,
        }
    }

    pub fn listing() -> String {
        Self::ALL.map(GameMode::name).join(", ")
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mode bookkeeping for one game.
#[derive(Debug, Clone)]
pub struct ModeState {
    mode: GameMode,
    standard: GameOptions,
    hide_and_seek: GameOptions,
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeState {
    /// Standard starts from the platform defaults, Hide and Seek from its preset.
    pub fn new() -> Self {
        Self::with_snapshots(GameOptions::default(), GameOptions::hide_and_seek())
    }

    pub fn with_snapshots(standard: GameOptions, hide_and_seek: GameOptions) -> Self {
        Self {
            mode: GameMode::Standard,
            standard,
            hide_and_seek,
        }
    }

    /// The active mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The saved snapshot for `mode`.
    ///
    /// For the active mode this is only as fresh as the last switch; the
    /// live options are authoritative until the game switches away.
    pub fn snapshot(&self, mode: GameMode) -> &GameOptions {
        match mode {
            GameMode::Standard => &self.standard,
            GameMode::HideAndSeek => &self.hide_and_seek,
        }
    }

    fn snapshot_mut(&mut self, mode: GameMode) -> &mut GameOptions {
        match mode {
            GameMode::Standard => &mut self.standard,
            GameMode::HideAndSeek => &mut self.hide_and_seek,
        }
    }

    /// Switch to `target`, swapping the live options.
    ///
    /// The live options are saved into the snapshot of the mode being left,
    /// then overwritten with the snapshot of `target`. Returns `false` and
    /// touches nothing when `target` is already active.
    pub fn switch_mode(&mut self, target: GameMode, live: &mut GameOptions) -> bool {
        if self.mode == target {
            return false;
        }

        let leaving = self.mode;
        self.snapshot_mut(leaving).copy_from(live);
        self.mode = target;
        live.copy_from(self.snapshot(target));
        true
    }
}

/// Owner of every game's [`ModeState`], keyed by game code.
#[derive(Default)]
pub struct ModeRegistry {
    games: DashMap<GameCode, Arc<Mutex<ModeState>>>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the mode state for a newly created game.
    pub fn register(&self, code: GameCode) -> Result<(), RegistryError> {
        match self.games.entry(code) {
            Entry::Occupied(entry) => Err(RegistryError::AlreadyRegistered(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(Mutex::new(ModeState::new())));
                Ok(())
            }
        }
    }

    /// Drop the mode state of a destroyed game.
    ///
    /// Returns whether an entry existed; a missing entry is not an error.
    pub fn unregister(&self, code: &GameCode) -> bool {
        self.games.remove(code).is_some()
    }

    pub fn is_registered(&self, code: &GameCode) -> bool {
        self.games.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Take exclusive access to a game's mode state.
    ///
    /// The shard guard is dropped before awaiting the per-game lock, so a
    /// slow holder never blocks `register` or `unregister` for other games.
    pub async fn lock(&self, code: &GameCode) -> Result<OwnedMutexGuard<ModeState>, RegistryError> {
        let state = self
            .games
            .get(code)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| RegistryError::NotRegistered(code.clone()))?;
        Ok(state.lock_owned().await)
    }

    /// The active mode of a game.
    pub async fn current_mode(&self, code: &GameCode) -> Result<GameMode, RegistryError> {
        Ok(self.lock(code).await?.mode())
    }

    /// Switch a game to `target`, swapping `live` in place.
    ///
    /// Returns `Ok(false)` when `target` was already active.
    pub async fn switch_mode(
        &self,
        code: &GameCode,
        target: GameMode,
        live: &mut GameOptions,
    ) -> Result<bool, RegistryError> {
        let mut state = self.lock(code).await?;
        Ok(state.switch_mode(target, live))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MapType;

    fn code() -> GameCode {
        GameCode::new("ABCDEF")
    }

    #[test]
    fn mode_aliases() {
        assert_eq!(GameMode::from_alias("normal"), Some(GameMode::Standard));
        assert_eq!(GameMode::from_alias("standard"), Some(GameMode::Standard));
        assert_eq!(GameMode::from_alias("hns"), Some(GameMode::HideAndSeek));
        assert_eq!(GameMode::from_alias("hidenseek"), Some(GameMode::HideAndSeek));
        assert_eq!(GameMode::from_alias("hideandseek"), Some(GameMode::HideAndSeek));
        assert_eq!(GameMode::from_alias("ffa"), None);
        assert_eq!(GameMode::listing(), "Normal, HideNSeek");
    }

    #[test]
    fn new_state_starts_standard_with_both_snapshots() {
        let state = ModeState::new();
        assert_eq!(state.mode(), GameMode::Standard);
        assert_eq!(state.snapshot(GameMode::Standard), &GameOptions::default());
        assert_eq!(
            state.snapshot(GameMode::HideAndSeek),
            &GameOptions::hide_and_seek()
        );
    }

    #[test]
    fn switch_to_active_mode_is_noop() {
        let mut state = ModeState::new();
        let mut live = GameOptions {
            kill_cooldown: 33.0,
            ..GameOptions::default()
        };
        let before = live.clone();

        assert!(!state.switch_mode(GameMode::Standard, &mut live));
        assert_eq!(live, before);
        assert_eq!(state.snapshot(GameMode::Standard), &GameOptions::default());
        assert_eq!(
            state.snapshot(GameMode::HideAndSeek),
            &GameOptions::hide_and_seek()
        );
    }

    #[test]
    fn switch_saves_live_and_loads_target() {
        let mut state = ModeState::new();
        let mut live = GameOptions::default();
        live.kill_cooldown = 25.0;
        live.map = MapType::Polus;

        assert!(state.switch_mode(GameMode::HideAndSeek, &mut live));
        assert_eq!(state.mode(), GameMode::HideAndSeek);
        assert_eq!(live, GameOptions::hide_and_seek());
        assert_eq!(state.snapshot(GameMode::Standard).kill_cooldown, 25.0);
        assert_eq!(state.snapshot(GameMode::Standard).map, MapType::Polus);
    }

    #[test]
    fn round_trip_restores_edits_of_both_modes() {
        let mut state = ModeState::new();
        let mut live = GameOptions::default();

        live.kill_cooldown = 20.0;
        live.crew_light_mod = 0.5;
        let standard_edits = live.clone();

        state.switch_mode(GameMode::HideAndSeek, &mut live);
        live.impostor_light_mod = 0.5;
        live.map = MapType::Airship;
        let hns_edits = live.clone();

        state.switch_mode(GameMode::Standard, &mut live);
        assert_eq!(live, standard_edits);

        state.switch_mode(GameMode::HideAndSeek, &mut live);
        assert_eq!(live, hns_edits);

        // Toggling repeatedly without edits changes nothing.
        for _ in 0..5 {
            state.switch_mode(GameMode::Standard, &mut live);
            state.switch_mode(GameMode::HideAndSeek, &mut live);
        }
        assert_eq!(live, hns_edits);
        state.switch_mode(GameMode::Standard, &mut live);
        assert_eq!(live, standard_edits);
    }

    #[test]
    fn register_twice_fails() {
        let registry = ModeRegistry::new();
        registry.register(code()).unwrap();
        assert_eq!(
            registry.register(code()),
            Err(RegistryError::AlreadyRegistered(code()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unregister_missing_is_noop() {
        let registry = ModeRegistry::new();
        assert!(!registry.unregister(&code()));
        registry.register(code()).unwrap();
        assert!(registry.unregister(&code()));
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn lookups_after_unregister_report_not_registered() {
        let registry = ModeRegistry::new();
        registry.register(code()).unwrap();
        registry
            .switch_mode(&code(), GameMode::HideAndSeek, &mut GameOptions::default())
            .await
            .unwrap();
        registry.unregister(&code());

        assert_eq!(
            registry.current_mode(&code()).await,
            Err(RegistryError::NotRegistered(code()))
        );
        assert!(!registry.is_registered(&code()));

        // Re-registering starts from scratch rather than stale data.
        registry.register(code()).unwrap();
        assert_eq!(registry.current_mode(&code()).await, Ok(GameMode::Standard));
    }

    #[tokio::test]
    async fn switch_mode_through_registry() {
        let registry = ModeRegistry::new();
        registry.register(code()).unwrap();
        let mut live = GameOptions::default();

        assert_eq!(
            registry
                .switch_mode(&code(), GameMode::HideAndSeek, &mut live)
                .await,
            Ok(true)
        );
        assert_eq!(
            registry
                .switch_mode(&code(), GameMode::HideAndSeek, &mut live)
                .await,
            Ok(false)
        );
        assert_eq!(
            registry.current_mode(&code()).await,
            Ok(GameMode::HideAndSeek)
        );
    }

    #[tokio::test]
    async fn games_do_not_share_state() {
        let registry = ModeRegistry::new();
        let other = GameCode::new("ZZZZZZ");
        registry.register(code()).unwrap();
        registry.register(other.clone()).unwrap();

        let _held = registry.lock(&code()).await.unwrap();
        // A held lock on one game must not block another.
        registry
            .switch_mode(&other, GameMode::HideAndSeek, &mut GameOptions::default())
            .await
            .unwrap();
        assert_eq!(
            registry.current_mode(&other).await,
            Ok(GameMode::HideAndSeek)
        );
    }
}
