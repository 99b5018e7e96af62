//! The `Game` aggregate and round resolution.
//!
//! A `Game` owns its settings, the log of every accepted round and the
//! current state. `apply_round` is the only way to move it forward:
//!
//! 1. Check the round as a whole (one submission per registered player,
//!    session still running).
//! 2. Snapshot the state (O(1), persistent structures) and resolve every
//!    submission against the snapshot, in submission order.
//! 3. Swap the snapshot in and append the round to the log.
//!
//! Any error in step 1 or 2 returns before step 3, so a rejected round
//! leaves the game exactly as it was.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::core::{
    Action, GameNum, GameSettings, GameState, PlayerAction, PlayerActionSet, PlayerId,
    PlayerState, PlayerStates, RoundError, SettingsError,
};

use super::result::GameResult;
use super::scoring::{Clash, ScoreChange};

/// A session: settings, history and current state.
#[derive(Clone, Debug)]
pub struct Game {
    settings: GameSettings,
    action_logs: Vector<PlayerActionSet>,
    state: GameState,
}

impl Game {
    /// Start a session from `settings`.
    pub fn new(settings: GameSettings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let state = GameState::new(&settings);
        tracing::debug!(
            players = settings.players.len(),
            total_games = settings.total_games,
            "game created"
        );

        Ok(Self {
            settings,
            action_logs: Vector::new(),
            state,
        })
    }

    /// Resume a session from a stored state and history.
    ///
    /// The state must hold exactly one entry per registered player, and its
    /// counter must be `Over` or a sub-game within `1..=total_games`.
    pub fn restore(
        settings: GameSettings,
        state: GameState,
        action_logs: Vector<PlayerActionSet>,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;

        if !state.game_num.is_within(settings.total_games) {
            return Err(SettingsError::InvalidGameNum {
                game_num: state.game_num,
                total_games: settings.total_games,
            });
        }

        let mut seen = FxHashSet::default();
        for ps in state.player_states.iter() {
            if !settings.players.contains(ps.player) {
                return Err(SettingsError::UnknownPlayerState(ps.player));
            }
            if !seen.insert(ps.player) {
                return Err(SettingsError::DuplicatePlayerState(ps.player));
            }
        }

        if let Some(missing) = settings.players.ids().find(|&id| state.player(id).is_none()) {
            return Err(SettingsError::MissingPlayerState(missing));
        }

        tracing::debug!(
            rounds = action_logs.len(),
            game_num = %state.game_num,
            "game restored"
        );

        Ok(Self {
            settings,
            action_logs,
            state,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Every accepted round, oldest first.
    #[must_use]
    pub fn action_logs(&self) -> &Vector<PlayerActionSet> {
        &self.action_logs
    }

    /// Number of accepted rounds.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.action_logs.len()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Distinct actions `player` can play this round.
    ///
    /// Empty once the session is over or for an unknown player.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if self.is_over() {
            return Vec::new();
        }
        self.state
            .player(player)
            .map(|ps| ps.actions.distinct())
            .unwrap_or_default()
    }

    /// Final result, once the session is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        GameResult::from_state(&self.state)
    }

    /// Resolve one simultaneous round and commit it.
    ///
    /// On error nothing changes: neither the state nor the action log.
    pub fn apply_round(&mut self, round: PlayerActionSet) -> Result<(), RoundError> {
        let next = match self.resolve_round(&round) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(round = self.round_count() + 1, %err, "round rejected");
                return Err(err);
            }
        };

        let previous = self.state.game_num;
        self.state = next;
        self.action_logs.push_back(round);

        tracing::debug!(
            round = self.round_count(),
            game_num = %self.state.game_num,
            "round resolved"
        );

        if self.state.game_num != previous {
            match self.state.game_num {
                GameNum::Active(_) => tracing::info!(
                    from = %previous,
                    to = %self.state.game_num,
                    "sub-game advanced"
                ),
                GameNum::Over => tracing::info!(
                    rounds = self.round_count(),
                    standings = ?self.state.standings(),
                    "session over"
                ),
            }
        }

        Ok(())
    }

    /// Compute the state that `round` would produce, without committing it.
    pub fn resolve_round(&self, round: &PlayerActionSet) -> Result<GameState, RoundError> {
        let expected = self.settings.players.len();
        if round.len() != expected {
            return Err(RoundError::InvalidRoundSize {
                expected,
                actual: round.len(),
            });
        }

        // Right count, but some player submitted twice
        let distinct = round.distinct_players();
        if distinct != expected {
            return Err(RoundError::InvalidRoundSize {
                expected,
                actual: distinct,
            });
        }

        if self.state.is_over() {
            return Err(RoundError::SessionOver);
        }

        let mut state = self.state.clone();
        for pa in round {
            self.resolve_action(&mut state, round, pa)?;
        }
        Ok(state)
    }

    fn resolve_action(
        &self,
        state: &mut GameState,
        round: &PlayerActionSet,
        pa: &PlayerAction,
    ) -> Result<(), RoundError> {
        if state.player(pa.player).is_none() {
            return Err(RoundError::PlayerStateNotFound(pa.player));
        }

        // Points
        if pa.action.is_attack() {
            let response = round
                .get(pa.target)
                .ok_or(RoundError::TargetActionNotFound(pa.target))?;

            if let Some(clash) = Clash::resolve(&pa.action, &response.action) {
                match clash.score(self.settings.just_guard_point) {
                    ScoreChange::Attacker(points) => {
                        let ps = player_mut(&mut state.player_states, pa.player)?;
                        ps.points = ps.points.saturating_add(points);
                    }
                    ScoreChange::Defender(points) => {
                        let ps = player_mut(&mut state.player_states, pa.target)?;
                        ps.points = ps.points.saturating_add(points);
                    }
                    ScoreChange::Nobody => {}
                }
            }
        }

        let ps = player_mut(&mut state.player_states, pa.player)?;

        // Actions
        if !ps.actions.take(&pa.action) {
            return Err(RoundError::UnavailableAction {
                player: pa.player,
                action: pa.action,
            });
        }
        if ps.is_exhausted() {
            state.game_num = state.game_num.advance(self.settings.total_games);
            if !state.game_num.is_over() {
                ps.actions = self.settings.actions.clone();
            }
        }

        // Thinking time
        let remaining = ps.thinking_time;
        ps.thinking_time = remaining
            .checked_sub(pa.thinking_time)
            .ok_or(RoundError::OverThinkingTime {
                player: pa.player,
                requested: pa.thinking_time,
                remaining,
            })?
            .saturating_add(self.settings.thinking_time_increment);

        Ok(())
    }
}

fn player_mut(
    states: &mut PlayerStates,
    player: PlayerId,
) -> Result<&mut PlayerState, RoundError> {
    states
        .get_mut(player)
        .ok_or(RoundError::PlayerStateNotFound(player))
}
