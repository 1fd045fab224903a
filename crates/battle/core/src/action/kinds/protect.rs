//! Player protect: raise the single-round protection flag.

use crate::action::error::ActionError;
use crate::action::outcome::{NarrativeKind, StepOutcome};
use crate::action::{ActionKind, ActionTransition};
use crate::state::BattleState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProtectAction;

impl ActionTransition for ProtectAction {
    type Error = ActionError;

    fn kind(&self) -> ActionKind {
        ActionKind::Protect
    }

    fn apply(&self, state: &mut BattleState) -> Result<StepOutcome, Self::Error> {
        state.player.protect();
        Ok(StepOutcome::bloodless(self.kind(), NarrativeKind::Braced))
    }

    fn post_validate(&self, state: &BattleState) -> Result<(), Self::Error> {
        super::check_hp_bounds(state)
    }
}
