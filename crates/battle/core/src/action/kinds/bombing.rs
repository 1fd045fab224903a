//! Enemy bombing: unconditional damage that ignores protection.

use crate::action::error::ActionError;
use crate::action::outcome::{DamageReport, NarrativeKind, StepOutcome};
use crate::action::{ActionKind, ActionTransition};
use crate::state::BattleState;
use crate::unit::Side;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BombingAction;

impl ActionTransition for BombingAction {
    type Error = ActionError;

    fn kind(&self) -> ActionKind {
        ActionKind::Bombing
    }

    fn apply(&self, state: &mut BattleState) -> Result<StepOutcome, Self::Error> {
        let amount = state.enemy.attack_power;
        let hp_before = state.player.current_hp;
        state.player.take_damage(amount);

        Ok(StepOutcome::damaging(
            self.kind(),
            NarrativeKind::BombingHit,
            DamageReport {
                side: Side::Player,
                amount,
                hp_before,
                hp_after: state.player.current_hp,
            },
        ))
    }

    fn post_validate(&self, state: &BattleState) -> Result<(), Self::Error> {
        super::check_hp_bounds(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;
    use crate::unit::UnitSpec;

    #[test]
    fn bombing_ignores_protection() {
        let mut state = BattleState::new(
            UnitSpec::new("Hero", 20, 5),
            UnitSpec::new("Drone", 12, 4),
            0,
            &BattleConfig::default(),
        );
        state.player.protect();

        let outcome = BombingAction.apply(&mut state).unwrap();
        assert_eq!(state.player.current_hp, 16);
        assert_eq!(outcome.narrative, NarrativeKind::BombingHit);
        assert_eq!(outcome.damage.unwrap().side, Side::Player);
    }
}
