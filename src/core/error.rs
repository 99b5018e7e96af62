//! Error types for settings validation and round resolution.

use std::time::Duration;

use super::action::Action;
use super::player::PlayerId;
use super::state::GameNum;

/// Reasons a round can be rejected.
///
/// Every variant is reported with the game left exactly as it was before
/// the call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    /// The round does not carry exactly one action per registered player.
    ///
    /// `actual` is the submission count, or the number of distinct
    /// submitting players when the count is right but a player repeats.
    #[error("invalid round size: expected {expected} actions, got {actual}")]
    InvalidRoundSize { expected: usize, actual: usize },

    /// The session already ended.
    #[error("session is over")]
    SessionOver,

    /// A submitting (or tie-credited) player has no state in this game.
    #[error("{0} state not found")]
    PlayerStateNotFound(PlayerId),

    /// An attack targets a player with no submission in this round.
    #[error("{0} action not found")]
    TargetActionNotFound(PlayerId),

    /// The player does not hold the action they tried to play.
    #[error("{action} is not available to {player}")]
    UnavailableAction { player: PlayerId, action: Action },

    /// The player reported more thinking time than they have left.
    #[error("{player} used {requested:?} of thinking time with only {remaining:?} remaining")]
    OverThinkingTime {
        player: PlayerId,
        requested: Duration,
        remaining: Duration,
    },
}

/// Reasons a `GameSettings` value cannot start a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("at least one player is required")]
    NoPlayers,

    #[error("{0} is registered more than once")]
    DuplicatePlayer(PlayerId),

    #[error("total games must be at least 1")]
    NoGames,

    #[error("action template is empty")]
    EmptyActionTemplate,

    /// A restored state has no entry for a registered player.
    #[error("no state for registered {0}")]
    MissingPlayerState(PlayerId),

    /// A restored state has an entry for a player that is not registered.
    #[error("state for unregistered {0}")]
    UnknownPlayerState(PlayerId),

    #[error("more than one state for {0}")]
    DuplicatePlayerState(PlayerId),

    /// A restored counter names a sub-game outside `1..=total_games`.
    #[error("{game_num} is out of range for {total_games} total games")]
    InvalidGameNum { game_num: GameNum, total_games: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_error_messages() {
        let err = RoundError::InvalidRoundSize { expected: 2, actual: 3 };
        assert_eq!(err.to_string(), "invalid round size: expected 2 actions, got 3");

        let err = RoundError::UnavailableAction {
            player: PlayerId::new(4),
            action: Action::attack(2),
        };
        assert_eq!(err.to_string(), "Attack L2 is not available to Player 4");

        assert_eq!(RoundError::SessionOver.to_string(), "session is over");
    }

    #[test]
    fn test_settings_error_messages() {
        assert_eq!(
            SettingsError::DuplicatePlayer(PlayerId::new(1)).to_string(),
            "Player 1 is registered more than once"
        );
        assert_eq!(SettingsError::NoGames.to_string(), "total games must be at least 1");
        assert_eq!(
            SettingsError::InvalidGameNum {
                game_num: GameNum::Active(0),
                total_games: 3,
            }
            .to_string(),
            "Game 0 is out of range for 3 total games"
        );
    }
}
