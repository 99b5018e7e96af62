//! Action representation: kind + level, and per-round submissions.
//!
//! An `Action` is what a player spends from their pool each round:
//! - "Attack 3" = `Action::attack(3)`
//! - "Defence 2" = `Action::defence(2)`
//!
//! A `PlayerAction` wraps an action with who played it, who it targets and
//! how much thinking time the player used. A `PlayerActionSet` is one full
//! round of simultaneous submissions.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// The two kinds of action a player can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Scores against the target unless the target defends at an equal or
    /// higher level.
    Attack,
    /// Never scores on its own; only matters as the target of an attack.
    Defence,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack => write!(f, "Attack"),
            Self::Defence => write!(f, "Defence"),
        }
    }
}

/// Relative intensity of an action, shared by both kinds.
///
/// The engine enforces no bounds; the range of levels a game uses is
/// whatever its action template contains.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ActionLevel(pub i8);

impl ActionLevel {
    /// Create a new level.
    #[must_use]
    pub const fn new(level: i8) -> Self {
        Self(level)
    }

    /// Get the raw level value.
    #[must_use]
    pub const fn raw(self) -> i8 {
        self.0
    }

    /// Signed difference `self - other`.
    ///
    /// Widened to `i16` so that extreme levels cannot wrap.
    ///
    /// ```
    /// use duel_engine::core::ActionLevel;
    ///
    /// assert_eq!(ActionLevel::new(5).diff(ActionLevel::new(3)), 2);
    /// assert_eq!(ActionLevel::new(-128).diff(ActionLevel::new(127)), -255);
    /// ```
    #[must_use]
    pub const fn diff(self, other: ActionLevel) -> i16 {
        self.0 as i16 - other.0 as i16
    }
}

impl std::fmt::Display for ActionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A single action: kind plus level.
///
/// Plain value type; two actions are equal when both fields are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub level: ActionLevel,
}

impl Action {
    /// Create an action of the given kind and level.
    #[must_use]
    pub const fn new(kind: ActionKind, level: ActionLevel) -> Self {
        Self { kind, level }
    }

    /// Attack at `level`.
    #[must_use]
    pub const fn attack(level: i8) -> Self {
        Self::new(ActionKind::Attack, ActionLevel(level))
    }

    /// Defence at `level`.
    #[must_use]
    pub const fn defence(level: i8) -> Self {
        Self::new(ActionKind::Defence, ActionLevel(level))
    }

    #[must_use]
    pub const fn is_attack(&self) -> bool {
        matches!(self.kind, ActionKind::Attack)
    }

    #[must_use]
    pub const fn is_defence(&self) -> bool {
        matches!(self.kind, ActionKind::Defence)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.level)
    }
}

/// One player's submission for a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAction {
    /// The player submitting the action.
    pub player: PlayerId,

    /// Whose simultaneous action an Attack is compared against.
    /// Ignored for Defence.
    pub target: PlayerId,

    /// The action played. Must be in the player's remaining pool.
    pub action: Action,

    /// Thinking time the player spent choosing this action.
    pub thinking_time: Duration,
}

impl PlayerAction {
    /// Create a submission with zero thinking time.
    #[must_use]
    pub fn new(player: PlayerId, target: PlayerId, action: Action) -> Self {
        Self {
            player,
            target,
            action,
            thinking_time: Duration::ZERO,
        }
    }

    /// `player` attacks `target` at `level`.
    #[must_use]
    pub fn attack(player: PlayerId, target: PlayerId, level: i8) -> Self {
        Self::new(player, target, Action::attack(level))
    }

    /// `player` defends at `level`. The target is set to the player itself.
    #[must_use]
    pub fn defend(player: PlayerId, level: i8) -> Self {
        Self::new(player, player, Action::defence(level))
    }

    /// Set the thinking time spent on this action.
    #[must_use]
    pub fn with_thinking_time(mut self, thinking_time: Duration) -> Self {
        self.thinking_time = thinking_time;
        self
    }
}

/// A full round of simultaneous submissions, in submission order.
///
/// Inline storage covers up to four players without heap allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerActionSet {
    actions: SmallVec<[PlayerAction; 4]>,
}

impl PlayerActionSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a submission.
    pub fn push(&mut self, action: PlayerAction) {
        self.actions.push(action);
    }

    /// Add a submission (builder form).
    #[must_use]
    pub fn with(mut self, action: PlayerAction) -> Self {
        self.push(action);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Get the first submission made by `player`.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&PlayerAction> {
        self.actions.iter().find(|pa| pa.player == player)
    }

    /// Iterate submissions in order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerAction> {
        self.actions.iter()
    }

    /// Number of distinct players with a submission in this set.
    #[must_use]
    pub fn distinct_players(&self) -> usize {
        self.actions
            .iter()
            .map(|pa| pa.player)
            .collect::<FxHashSet<_>>()
            .len()
    }
}

impl FromIterator<PlayerAction> for PlayerActionSet {
    fn from_iter<I: IntoIterator<Item = PlayerAction>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PlayerActionSet {
    type Item = &'a PlayerAction;
    type IntoIter = std::slice::Iter<'a, PlayerAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
