//! Player attack: unconditional damage to the enemy.

use crate::action::error::ActionError;
use crate::action::outcome::{DamageReport, NarrativeKind, StepOutcome};
use crate::action::{ActionKind, ActionTransition};
use crate::state::BattleState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttackAction;

impl ActionTransition for AttackAction {
    type Error = ActionError;

    fn kind(&self) -> ActionKind {
        ActionKind::Attack
    }

    fn apply(&self, state: &mut BattleState) -> Result<StepOutcome, Self::Error> {
        let target = self.kind().actor().opponent();
        let amount = state.player.attack_power;
        let hp_before = state.unit(target).current_hp;
        state.unit_mut(target).take_damage(amount);

        Ok(StepOutcome::damaging(
            self.kind(),
            NarrativeKind::AttackLanded,
            DamageReport {
                side: target,
                amount,
                hp_before,
                hp_after: state.unit(target).current_hp,
            },
        ))
    }

    fn post_validate(&self, state: &BattleState) -> Result<(), Self::Error> {
        super::check_hp_bounds(state)
    }
}
