//! Duel rules.
//!
//! - `scoring`: how a single attack is scored against its target's action
//! - `engine`: the `Game` aggregate and atomic round resolution
//! - `result`: who won once the session is over

pub mod engine;
pub mod result;
pub mod scoring;

pub use engine::Game;
pub use result::GameResult;
pub use scoring::{Clash, ScoreChange};
