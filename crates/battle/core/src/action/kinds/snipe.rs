//! Enemy snipe: limited-use ranged attack, suppressed by protection.

use crate::action::error::ActionError;
use crate::action::outcome::{DamageReport, NarrativeKind, StepOutcome};
use crate::action::{ActionKind, ActionTransition};
use crate::state::BattleState;
use crate::unit::Side;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnipeAction;

impl ActionTransition for SnipeAction {
    type Error = ActionError;

    fn kind(&self) -> ActionKind {
        ActionKind::Snipe
    }

    fn pre_validate(&self, state: &BattleState) -> Result<(), Self::Error> {
        if state.snipe_charges == 0 {
            return Err(ActionError::SnipeExhausted);
        }
        Ok(())
    }

    fn apply(&self, state: &mut BattleState) -> Result<StepOutcome, Self::Error> {
        // The charge is spent whether or not the shot lands. Protection is
        // not consumed here; it lapses at the next round boundary.
        state.snipe_charges -= 1;

        if state.player.is_protected {
            return Ok(StepOutcome::bloodless(
                self.kind(),
                NarrativeKind::SnipeBlocked,
            ));
        }

        let amount = state.enemy.attack_power;
        let hp_before = state.player.current_hp;
        state.player.take_damage(amount);

        Ok(StepOutcome::damaging(
            self.kind(),
            NarrativeKind::SnipeHit,
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

    fn state() -> BattleState {
        BattleState::new(
            UnitSpec::new("Hero", 20, 5),
            UnitSpec::new("Drone", 12, 4),
            0,
            &BattleConfig::default(),
        )
    }

    #[test]
    fn snipe_damages_an_unprotected_player() {
        let mut state = state();
        let outcome = SnipeAction.apply(&mut state).unwrap();

        assert_eq!(state.player.current_hp, 16);
        assert_eq!(outcome.narrative, NarrativeKind::SnipeHit);
        assert_eq!(state.snipe_charges, 6);
    }

    #[test]
    fn snipe_is_blocked_by_protection_but_still_spends_a_charge() {
        let mut state = state();
        state.player.protect();

        let outcome = SnipeAction.apply(&mut state).unwrap();
        assert_eq!(state.player.current_hp, 20);
        assert_eq!(outcome.narrative, NarrativeKind::SnipeBlocked);
        assert!(outcome.damage.is_none());
        assert_eq!(state.snipe_charges, 6);
        // Blocking does not consume protection within the round.
        assert!(state.player.is_protected);
    }

    #[test]
    fn snipe_refuses_to_fire_without_charges() {
        let mut state = state();
        state.snipe_charges = 0;
        assert_eq!(
            SnipeAction.pre_validate(&state),
            Err(ActionError::SnipeExhausted)
        );
    }
}
