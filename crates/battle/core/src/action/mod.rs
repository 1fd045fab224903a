//! Action domain - priority-tagged battle actions.
//!
//! Actions are transient value objects: built fresh each round, sorted by
//! priority, executed once through the transition pipeline, then discarded.
//! The closed [`ActionKind`] set replaces "a callable with a priority": each
//! kind maps to one transition struct implementing [`ActionTransition`].
//!
//! # Module Structure
//!
//! - `error`: action error types and the phase-tagged error wrapper
//! - `outcome`: what an executed action reports outward
//! - `kinds`: one transition struct per action kind

pub mod error;
pub mod kinds;
pub mod outcome;

pub use error::{ActionError, TransitionPhase, TransitionPhaseError};
pub use kinds::{AttackAction, BombingAction, ProtectAction, SnipeAction};
pub use outcome::{DamageReport, NarrativeKind, StepOutcome};

use crate::state::BattleState;
use crate::unit::Side;

/// The closed set of player inputs. Everything else the presentation layer
/// might send is unrepresentable.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerChoice {
    Attack,
    Protect,
}

/// Every action a round can contain, player- and enemy-side.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Player deals their attack power to the enemy. Unconditional.
    Attack,
    /// Player raises the single-round protection flag. No damage.
    Protect,
    /// Enemy ranged attack; suppressed by protection, limited charges.
    Snipe,
    /// Enemy area attack; ignores protection, unlimited uses.
    Bombing,
}

impl ActionKind {
    /// Execution priority within a round. Higher runs first.
    pub const fn priority(self) -> i32 {
        match self {
            ActionKind::Attack => 0,
            ActionKind::Protect => 2,
            ActionKind::Snipe => 1,
            ActionKind::Bombing => -4,
        }
    }

    /// Which combatant performs this action.
    pub const fn actor(self) -> Side {
        match self {
            ActionKind::Attack | ActionKind::Protect => Side::Player,
            ActionKind::Snipe | ActionKind::Bombing => Side::Enemy,
        }
    }
}

impl From<PlayerChoice> for ActionKind {
    fn from(choice: PlayerChoice) -> Self {
        match choice {
            PlayerChoice::Attack => ActionKind::Attack,
            PlayerChoice::Protect => ActionKind::Protect,
        }
    }
}

/// A priority-tagged action scheduled for the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleAction {
    pub kind: ActionKind,
    pub priority: i32,
}

impl BattleAction {
    /// Builds an action carrying its kind's priority.
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            priority: kind.priority(),
        }
    }
}

/// Defines how a concrete action variant mutates battle state.
///
/// Transitions run through three phases driven by the engine:
/// `pre_validate` → `apply` → `post_validate`. Validation phases default to
/// no-ops; `apply` returns the [`StepOutcome`] reported outward.
pub trait ActionTransition {
    type Error;

    /// The action kind this transition implements.
    fn kind(&self) -> ActionKind;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &BattleState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the battle state directly.
    fn apply(&self, state: &mut BattleState) -> Result<StepOutcome, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &BattleState) -> Result<(), Self::Error> {
        Ok(())
    }
}
