//! Enemy action selection.
//!
//! Selection is a strategy object so hosts can swap the shipped behavior
//! and tests can force either branch deterministically.

use crate::action::ActionKind;
use crate::config::BattleConfig;
use crate::rng::RngOracle;
use crate::state::BattleState;

/// Decides the enemy's action for the round about to resolve.
///
/// Implementations must only read from `state`; any resource bookkeeping
/// (like spending a snipe charge) happens when the chosen action executes.
pub trait EnemyPolicy: Send + Sync {
    fn choose(&self, state: &BattleState, rng: &dyn RngOracle, seed: u64) -> ActionKind;
}

/// The shipped enemy behavior: snipe on a successful chance roll while
/// charges remain, otherwise carpet-bomb.
#[derive(Clone, Copy, Debug)]
pub struct StandardPolicy {
    snipe_chance_percent: u32,
}

impl StandardPolicy {
    pub fn new(config: &BattleConfig) -> Self {
        Self {
            snipe_chance_percent: config.snipe_chance_percent,
        }
    }
}

impl Default for StandardPolicy {
    fn default() -> Self {
        Self::new(&BattleConfig::default())
    }
}

impl EnemyPolicy for StandardPolicy {
    fn choose(&self, state: &BattleState, rng: &dyn RngOracle, seed: u64) -> ActionKind {
        // Strictly-greater keeps the roll a fair coin at the default 50.
        if state.snipe_charges > 0 && rng.roll_d100(seed) > self.snipe_chance_percent {
            ActionKind::Snipe
        } else {
            ActionKind::Bombing
        }
    }
}

/// Policy that always picks the same action. Useful for scripted demos and
/// deterministic tests.
#[derive(Clone, Copy, Debug)]
pub struct ForcedPolicy(pub ActionKind);

impl EnemyPolicy for ForcedPolicy {
    fn choose(&self, _state: &BattleState, _rng: &dyn RngOracle, _seed: u64) -> ActionKind {
        self.0
    }
}
