//! Session configuration.
//!
//! `GameSettings` is built once by the session layer and never changes
//! during play. It fixes:
//! - The registered players
//! - How many sub-games the session lasts
//! - Thinking-time budget and per-round increment
//! - The action template every player's pool is refilled from
//! - The just-guard bonus for an exact Attack/Defence tie

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::Action;
use super::error::SettingsError;
use super::player::{PlayerId, PlayerSet};
use super::pool::ActionPool;

/// Engine version stamped into new settings.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Engine version the settings were created with.
    pub version: String,

    /// Registered players, one action expected from each per round.
    pub players: PlayerSet,

    /// Number of sub-games in the session (at least 1).
    pub total_games: u32,

    /// Thinking time every player starts the session with.
    pub initial_thinking_time: Duration,

    /// Thinking time credited to every player after each round.
    pub thinking_time_increment: Duration,

    /// Pool template, copied fresh into a player's state at session start
    /// and whenever their pool runs out.
    pub actions: ActionPool,

    /// Points credited to a defender who exactly matches an attack level.
    pub just_guard_point: i32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            version: VERSION.to_string(),
            players: PlayerSet::new(),
            total_games: 1,
            initial_thinking_time: Duration::from_secs(600),
            thinking_time_increment: Duration::ZERO,
            actions: ActionPool::new(),
            just_guard_point: 0,
        }
    }
}

impl GameSettings {
    /// Create settings for `players` with default values.
    pub fn new(players: PlayerSet) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }

    /// A ready-to-play preset: Attack and Defence at levels 1-3, three
    /// sub-games, 10 minutes plus 5 seconds per round, just-guard worth 2.
    pub fn standard(players: PlayerSet) -> Self {
        let actions = (1..=3)
            .flat_map(|level| [Action::attack(level), Action::defence(level)])
            .collect();

        Self::new(players)
            .with_total_games(3)
            .with_initial_thinking_time(Duration::from_secs(600))
            .with_thinking_time_increment(Duration::from_secs(5))
            .with_actions(actions)
            .with_just_guard_point(2)
    }

    /// Add a player.
    #[must_use]
    pub fn with_player(mut self, id: PlayerId, name: impl Into<String>) -> Self {
        self.players = self.players.with_player(id, name);
        self
    }

    #[must_use]
    pub fn with_total_games(mut self, total_games: u32) -> Self {
        self.total_games = total_games;
        self
    }

    #[must_use]
    pub fn with_initial_thinking_time(mut self, time: Duration) -> Self {
        self.initial_thinking_time = time;
        self
    }

    #[must_use]
    pub fn with_thinking_time_increment(mut self, increment: Duration) -> Self {
        self.thinking_time_increment = increment;
        self
    }

    /// Set the action template.
    #[must_use]
    pub fn with_actions(mut self, actions: ActionPool) -> Self {
        self.actions = actions;
        self
    }

    #[must_use]
    pub fn with_just_guard_point(mut self, points: i32) -> Self {
        self.just_guard_point = points;
        self
    }

    /// Check that a game can be started from these settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.players.is_empty() {
            return Err(SettingsError::NoPlayers);
        }

        let mut seen = FxHashSet::default();
        if let Some(dup) = self.players.ids().find(|&id| !seen.insert(id)) {
            return Err(SettingsError::DuplicatePlayer(dup));
        }

        if self.total_games == 0 {
            return Err(SettingsError::NoGames);
        }

        if self.actions.is_empty() {
            return Err(SettingsError::EmptyActionTemplate);
        }

        Ok(())
    }
}
