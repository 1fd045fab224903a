//! What an executed action reports outward.
//!
//! The core reports typed facts only; rendering them as dialogue text is
//! the presentation layer's job.

use crate::action::ActionKind;
use crate::unit::Side;

/// Typed narration of what an action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NarrativeKind {
    /// The player's attack connected.
    AttackLanded,
    /// The player braced for the next attack.
    Braced,
    /// A snipe was fired and hit.
    SnipeHit,
    /// A snipe was fired but protection suppressed the damage.
    SnipeBlocked,
    /// A bombing run hit. Protection never applies.
    BombingHit,
}

/// Health change produced by one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    /// The side that took the damage.
    pub side: Side,
    pub amount: u32,
    pub hp_before: u32,
    pub hp_after: u32,
}

/// Result of executing one action within a round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepOutcome {
    pub kind: ActionKind,
    pub narrative: NarrativeKind,
    /// `None` when the action dealt no damage (protect, blocked snipe).
    pub damage: Option<DamageReport>,
    /// Whether the damaged unit reached 0 HP.
    pub target_died: bool,
}

impl StepOutcome {
    /// Outcome of an action that dealt no damage.
    pub fn bloodless(kind: ActionKind, narrative: NarrativeKind) -> Self {
        Self {
            kind,
            narrative,
            damage: None,
            target_died: false,
        }
    }

    /// Outcome of an action that dealt damage.
    pub fn damaging(kind: ActionKind, narrative: NarrativeKind, damage: DamageReport) -> Self {
        Self {
            kind,
            narrative,
            target_died: damage.hp_after == 0,
            damage: Some(damage),
        }
    }
}
