//! Game state: sub-game counter and per-player state.
//!
//! ## GameNum
//!
//! Session-wide sub-game counter. Either `Active(n)` (n starts at 1) or
//! `Over`. Once `Over`, it never goes back.
//!
//! ## GameState
//!
//! Snapshot of a session between rounds:
//! - Current sub-game
//! - Per-player points, remaining thinking time, remaining actions
//!
//! Uses `im` persistent data structures so taking a snapshot before a round
//! is O(1); the live state is only replaced once a round fully succeeds.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameSettings;
use super::player::PlayerId;
use super::pool::ActionPool;

/// Sub-game counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameNum {
    /// Sub-game `n` of the session is in progress (1-based).
    Active(u32),
    /// Every sub-game has been played.
    Over,
}

impl GameNum {
    /// The first sub-game of a session.
    pub const FIRST: GameNum = GameNum::Active(1);

    /// Current sub-game number, or `None` once the session is over.
    #[must_use]
    pub const fn current(self) -> Option<u32> {
        match self {
            Self::Active(n) => Some(n),
            Self::Over => None,
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }

    /// Numeric form for layers that poll a plain counter: `0` means over.
    #[must_use]
    pub const fn raw(self) -> u32 {
        match self {
            Self::Active(n) => n,
            Self::Over => 0,
        }
    }

    /// The counter after one more sub-game has finished.
    ///
    /// Moves to `Over` once the next number would exceed `total_games`.
    /// `Over` stays `Over`.
    ///
    /// ```
    /// use duel_engine::core::GameNum;
    ///
    /// assert_eq!(GameNum::Active(1).advance(2), GameNum::Active(2));
    /// assert_eq!(GameNum::Active(2).advance(2), GameNum::Over);
    /// assert_eq!(GameNum::Over.advance(2), GameNum::Over);
    /// ```
    #[must_use]
    pub fn advance(self, total_games: u32) -> Self {
        match self {
            Self::Active(n) => n
                .checked_add(1)
                .filter(|&next| next <= total_games)
                .map_or(Self::Over, Self::Active),
            Self::Over => Self::Over,
        }
    }

    /// True if this counter can occur in a session of `total_games`
    /// sub-games: `Active(n)` with `1 <= n <= total_games`, or `Over`.
    #[must_use]
    pub const fn is_within(self, total_games: u32) -> bool {
        match self {
            Self::Active(n) => n >= 1 && n <= total_games,
            Self::Over => true,
        }
    }
}

impl std::fmt::Display for GameNum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active(n) => write!(f, "Game {}", n),
            Self::Over => write!(f, "Over"),
        }
    }
}

/// One player's slice of the game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub player: PlayerId,

    /// Points scored so far this session.
    pub points: i32,

    /// Remaining thinking time. Never negative.
    pub thinking_time: Duration,

    /// Actions still available in the current sub-game.
    pub actions: ActionPool,
}

impl PlayerState {
    /// Fresh state for `player` at session start.
    #[must_use]
    pub fn new(player: PlayerId, settings: &GameSettings) -> Self {
        Self {
            player,
            points: 0,
            thinking_time: settings.initial_thinking_time,
            actions: settings.actions.clone(),
        }
    }

    /// True if the player has no actions left in the current sub-game.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Per-player states in registration order, looked up by `PlayerId`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStates {
    states: Vector<PlayerState>,
}

impl PlayerStates {
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&PlayerState> {
        self.states.iter().find(|ps| ps.player == player)
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut PlayerState> {
        self.states.iter_mut().find(|ps| ps.player == player)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerState> {
        self.states.iter()
    }
}

impl FromIterator<PlayerState> for PlayerStates {
    fn from_iter<I: IntoIterator<Item = PlayerState>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

/// Full game state between rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current sub-game, or `Over`.
    pub game_num: GameNum,

    /// Per-player state.
    pub player_states: PlayerStates,
}

impl GameState {
    /// Initial state for a session: sub-game 1, zero points, full
    /// thinking time and a fresh copy of the action template per player.
    #[must_use]
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            game_num: GameNum::FIRST,
            player_states: settings
                .players
                .ids()
                .map(|id| PlayerState::new(id, settings))
                .collect(),
        }
    }

    /// Get a player's state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerState> {
        self.player_states.get(player)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_num.is_over()
    }

    /// `(player, points)` ordered by points, highest first.
    ///
    /// Players with equal points keep registration order.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, i32)> {
        let mut standings: Vec<_> = self
            .player_states
            .iter()
            .map(|ps| (ps.player, ps.points))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        standings
    }
}
