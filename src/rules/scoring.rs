//! Attack resolution.
//!
//! Only attacks score. An attack is compared against whatever its target
//! played in the same round:
//!
//! | Target played        | Outcome      | Points                        |
//! |----------------------|--------------|-------------------------------|
//! | Defence, lower level | `Break`      | attacker + level difference   |
//! | Defence, same level  | `JustGuard`  | defender + just-guard bonus   |
//! | Defence, higher      | `Repelled`   | nobody                        |
//! | anything else        | `Unopposed`  | attacker + attack level       |

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionKind};

/// Outcome of one attack against its target's action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Clash {
    /// The target did not defend.
    Unopposed { level: i16 },
    /// The attack beat the defence by `margin`.
    Break { margin: i16 },
    /// Attack and defence levels matched exactly.
    JustGuard,
    /// The defence was stronger.
    Repelled,
}

/// Who gains points from a clash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreChange {
    Nobody,
    Attacker(i32),
    Defender(i32),
}

impl Clash {
    /// Compare `attack` with the target's `response`.
    ///
    /// Returns `None` if `attack` is not an Attack.
    #[must_use]
    pub fn resolve(attack: &Action, response: &Action) -> Option<Clash> {
        if attack.kind != ActionKind::Attack {
            return None;
        }

        let clash = match response.kind {
            ActionKind::Defence => match attack.level.diff(response.level) {
                margin if margin > 0 => Clash::Break { margin },
                0 => Clash::JustGuard,
                _ => Clash::Repelled,
            },
            ActionKind::Attack => Clash::Unopposed {
                level: i16::from(attack.level.raw()),
            },
        };
        Some(clash)
    }

    /// Points awarded for this outcome.
    #[must_use]
    pub fn score(self, just_guard_point: i32) -> ScoreChange {
        match self {
            Clash::Unopposed { level } => ScoreChange::Attacker(i32::from(level)),
            Clash::Break { margin } => ScoreChange::Attacker(i32::from(margin)),
            Clash::JustGuard => ScoreChange::Defender(just_guard_point),
            Clash::Repelled => ScoreChange::Nobody,
        }
    }
}
