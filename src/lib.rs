//! # duel-engine
//!
//! Rules engine for a simultaneous-action duel between N players.
//!
//! Each round every player secretly picks one action from their pool
//! (Attack or Defence, each with a level). Once every submission is in, the
//! engine resolves the whole round at once:
//!
//! - Attacks are scored against whatever their target played
//! - The played action leaves the player's pool; an empty pool ends the
//!   current sub-game and the player is dealt a fresh pool
//! - Thinking time is charged and the per-round increment credited
//!
//! The session ends once the configured number of sub-games is used up.
//!
//! ## Design Principles
//!
//! 1. **All or nothing**: a round either commits completely or leaves the
//!    game untouched. State is snapshotted (O(1) via `im-rs`), resolved, and
//!    only then swapped in.
//!
//! 2. **N-Player First**: nothing assumes two players.
//!
//! 3. **No I/O**: transport, persistence and clocks belong to the caller.
//!    The engine only does bookkeeping on the values it is given.
//!
//! ## Modules
//!
//! - `core`: actions, pools, players, settings, state, errors
//! - `rules`: scoring, round resolution, session result
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use duel_engine::{
//!     Action, Game, GameNum, GameSettings, PlayerAction, PlayerActionSet, PlayerId, PlayerSet,
//! };
//!
//! let p1 = PlayerId::new(1);
//! let p2 = PlayerId::new(2);
//! let players = PlayerSet::new().with_player(p1, "alice").with_player(p2, "bob");
//! let settings = GameSettings::new(players)
//!     .with_actions([Action::attack(3), Action::defence(3)].into_iter().collect())
//!     .with_just_guard_point(5);
//!
//! let mut game = Game::new(settings).unwrap();
//! game.apply_round(
//!     PlayerActionSet::new()
//!         .with(PlayerAction::attack(p1, p2, 3).with_thinking_time(Duration::from_secs(2)))
//!         .with(PlayerAction::defend(p2, 3)),
//! )
//! .unwrap();
//!
//! assert_eq!(game.state().player(p2).unwrap().points, 5);
//! assert_eq!(game.state().game_num, GameNum::Active(1));
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionLevel, ActionPool,
    PlayerAction, PlayerActionSet,
    Player, PlayerId, PlayerSet,
    GameSettings, VERSION,
    GameNum, GameState, PlayerState, PlayerStates,
    RoundError, SettingsError,
};

pub use crate::rules::{Clash, Game, GameResult, ScoreChange};
