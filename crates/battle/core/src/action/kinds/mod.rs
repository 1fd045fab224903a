//! One transition struct per action kind.

mod attack;
mod bombing;
mod protect;
mod snipe;

pub use attack::AttackAction;
pub use bombing::BombingAction;
pub use protect::ProtectAction;
pub use snipe::SnipeAction;

use crate::action::error::ActionError;
use crate::state::BattleState;
use crate::unit::Side;

/// Shared post-condition: current HP never exceeds max on either side.
pub(crate) fn check_hp_bounds(state: &BattleState) -> Result<(), ActionError> {
    for side in [Side::Player, Side::Enemy] {
        let unit = state.unit(side);
        if unit.current_hp > unit.max_hp {
            return Err(ActionError::HpAboveMax {
                side,
                current_hp: unit.current_hp,
                max_hp: unit.max_hp,
            });
        }
    }
    Ok(())
}
