//! Battle phases and the authoritative battle state.

use crate::config::BattleConfig;
use crate::unit::{Side, Unit, UnitSnapshot, UnitSpec};

/// Discrete states of a battle.
///
/// The transition graph is exactly
/// `Start → PlayerChoose → Resolving → {PlayerChoose | Won | Lost}`.
/// `Won` and `Lost` are terminal: nothing re-enters `Start` or `Resolving`
/// after either is reached.
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
pub enum BattlePhase {
    Start,
    PlayerChoose,
    Resolving,
    Won,
    Lost,
}

impl BattlePhase {
    /// Whether the battle is over. Terminal phases absorb all requests.
    pub fn is_terminal(self) -> bool {
        matches!(self, BattlePhase::Won | BattlePhase::Lost)
    }
}

/// The complete battle state.
///
/// Exclusively owned by whoever drives the engine; the presentation layer
/// only ever receives [`UnitSnapshot`]s and phase values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub player: Unit,
    pub enemy: Unit,
    pub phase: BattlePhase,
    /// Completed-or-in-progress round count. 0 until the first choice.
    pub round: u32,
    /// Remaining uses of the enemy's sniping ability.
    pub snipe_charges: u32,
    /// Base seed for this battle, set once at creation.
    pub seed: u64,
    /// Action sequence number, incremented once per executed action.
    /// Seed material for [`crate::rng::compute_seed`].
    pub nonce: u64,
}

impl BattleState {
    /// Creates a battle in the `Start` phase with both units at full health.
    pub fn new(player: UnitSpec, enemy: UnitSpec, seed: u64, config: &BattleConfig) -> Self {
        Self {
            player: Unit::new(player),
            enemy: Unit::new(enemy),
            phase: BattlePhase::Start,
            round: 0,
            snipe_charges: config.snipe_charges,
            seed,
            nonce: 0,
        }
    }

    pub fn unit(&self, side: Side) -> &Unit {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn unit_mut(&mut self, side: Side) -> &mut Unit {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Read-only view of one combatant for the presentation layer.
    pub fn snapshot(&self, side: Side) -> UnitSnapshot {
        self.unit(side).snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_battle_starts_in_start_phase() {
        let state = BattleState::new(
            UnitSpec::new("Hero", 20, 5),
            UnitSpec::new("Drone", 15, 4),
            1,
            &BattleConfig::default(),
        );
        assert_eq!(state.phase, BattlePhase::Start);
        assert_eq!(state.round, 0);
        assert_eq!(state.snipe_charges, BattleConfig::DEFAULT_SNIPE_CHARGES);
        assert_eq!(state.player.current_hp, 20);
        assert_eq!(state.enemy.current_hp, 15);
    }

    #[test]
    fn only_won_and_lost_are_terminal() {
        assert!(BattlePhase::Won.is_terminal());
        assert!(BattlePhase::Lost.is_terminal());
        assert!(!BattlePhase::Start.is_terminal());
        assert!(!BattlePhase::PlayerChoose.is_terminal());
        assert!(!BattlePhase::Resolving.is_terminal());
    }
}
