//! Deterministic battle rules shared across clients.
//!
//! `battle-core` defines the canonical turn-resolution rules for a
//! two-combatant battle: units, priority-tagged actions, enemy action
//! selection, and the round state machine. All state mutation flows through
//! [`engine::BattleEngine`], and supporting crates depend on the types
//! re-exported here.
//!
//! The crate is pure and synchronous. Randomness enters only through the
//! [`RngOracle`] trait, so every battle is replayable from its seed.
pub mod action;
pub mod config;
pub mod engine;
pub mod policy;
pub mod rng;
pub mod state;
pub mod unit;

pub use action::{
    ActionError, ActionKind, ActionTransition, AttackAction, BattleAction, BombingAction,
    DamageReport, NarrativeKind, PlayerChoice, ProtectAction, SnipeAction, StepOutcome,
    TransitionPhase, TransitionPhaseError,
};
pub use config::BattleConfig;
pub use engine::{BattleEngine, EngineError, RoundOutcome};
pub use policy::{EnemyPolicy, ForcedPolicy, StandardPolicy};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use state::{BattlePhase, BattleState};
pub use unit::{Side, Unit, UnitSnapshot, UnitSpec};
