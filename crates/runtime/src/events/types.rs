//! Typed events carried on the bus.
//!
//! These mirror the outbound notification surface: narrative text, health
//! indicator updates, and battle phase changes. Consumers subscribe to the
//! topics they care about and ignore the rest.

use serde::{Deserialize, Serialize};

use battle_core::{BattlePhase, Side};

/// Display text for the current event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeEvent {
    pub text: String,
}

/// Health indicator updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UnitEvent {
    HealthChanged { side: Side, current_hp: u32 },
}

/// Battle lifecycle updates (drives UI enablement).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BattleEvent {
    PhaseChanged { phase: BattlePhase },
    Ended { result: BattleResult },
}

/// How the battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResult {
    Won,
    Lost,
}

impl BattleResult {
    /// Maps a terminal phase to its result. `None` for live phases.
    pub fn from_phase(phase: BattlePhase) -> Option<Self> {
        match phase {
            BattlePhase::Won => Some(BattleResult::Won),
            BattlePhase::Lost => Some(BattleResult::Lost),
            _ => None,
        }
    }
}
