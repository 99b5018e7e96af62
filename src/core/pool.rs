//! Per-player pool of remaining actions.
//!
//! ## ActionPool
//!
//! Ordered sequence of actions a player may still play in the current
//! sub-game. Removal takes the *first* matching entry only, so a pool with
//! duplicate actions keeps the rest.
//!
//! Backed by `im::Vector`: cloning shares structure in O(1) but every clone
//! is an independent value. Taking an action from a player's pool can never
//! show up in the settings template or another player's pool.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Action;

/// Ordered pool of available actions.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{Action, ActionPool};
///
/// let template: ActionPool = [Action::attack(1), Action::defence(1), Action::attack(1)]
///     .into_iter()
///     .collect();
///
/// let (rest, found) = template.remove(&Action::attack(1));
/// assert!(found);
/// assert_eq!(rest.len(), 2);
/// assert_eq!(template.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionPool {
    actions: Vector<Action>,
}

impl ActionPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the first entry equal to `action`, leaving `self` untouched.
    ///
    /// Returns the resulting pool and whether a match was found. When there
    /// is no match the returned pool equals `self`.
    #[must_use]
    pub fn remove(&self, action: &Action) -> (ActionPool, bool) {
        let mut pool = self.clone();
        let found = pool.take(action);
        (pool, found)
    }

    /// Remove the first entry equal to `action` in place.
    ///
    /// Returns `false` (and leaves the pool unchanged) if the action is not
    /// held.
    pub fn take(&mut self, action: &Action) -> bool {
        match self.actions.index_of(action) {
            Some(index) => {
                self.actions.remove(index);
                true
            }
            None => false,
        }
    }

    /// Append an action at the end.
    pub fn push(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn contains(&self, action: &Action) -> bool {
        self.actions.contains(action)
    }

    /// Number of entries equal to `action`.
    #[must_use]
    pub fn count(&self, action: &Action) -> usize {
        self.actions.iter().filter(|a| *a == action).count()
    }

    /// Iterate actions in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    /// Distinct actions in order of first appearance.
    #[must_use]
    pub fn distinct(&self) -> Vec<Action> {
        let mut out: Vec<Action> = Vec::with_capacity(self.actions.len());
        for action in &self.actions {
            if !out.contains(action) {
                out.push(*action);
            }
        }
        out
    }
}

impl FromIterator<Action> for ActionPool {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Action>> for ActionPool {
    fn from(actions: Vec<Action>) -> Self {
        actions.into_iter().collect()
    }
}
