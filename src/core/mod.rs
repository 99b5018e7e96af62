//! Core value types: actions, pools, players, settings, state, errors.
//!
//! Everything here is plain data. The rules that move a `GameState`
//! forward live in `rules`.

pub mod action;
pub mod pool;
pub mod player;
pub mod config;
pub mod state;
pub mod error;

pub use action::{Action, ActionKind, ActionLevel, PlayerAction, PlayerActionSet};
pub use pool::ActionPool;
pub use player::{Player, PlayerId, PlayerSet};
pub use config::{GameSettings, VERSION};
pub use state::{GameNum, GameState, PlayerState, PlayerStates};
pub use error::{RoundError, SettingsError};
