//! Session outcome.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId};

/// Result of a completed session, decided on points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single top scorer.
    Winner(PlayerId),
    /// Every player finished on the same points.
    Draw,
    /// Several (but not all) players share the top score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Result for `state`, or `None` while the session is still running.
    #[must_use]
    pub fn from_state(state: &GameState) -> Option<GameResult> {
        if !state.is_over() {
            return None;
        }

        let standings = state.standings();
        let top = standings.first().map(|&(_, points)| points)?;
        let leaders: Vec<PlayerId> = standings
            .iter()
            .take_while(|&&(_, points)| points == top)
            .map(|&(player, _)| player)
            .collect();

        let result = match leaders.as_slice() {
            [single] => GameResult::Winner(*single),
            _ if leaders.len() == standings.len() => GameResult::Draw,
            _ => GameResult::Winners(leaders),
        };
        Some(result)
    }

    /// Check if a player won (alone or shared).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}
