//! Turns core step outcomes into presentation events.
//!
//! The core reports typed facts; this module renders them as the dialogue
//! lines and indicator updates a front-end consumes.

use battle_core::{ActionKind, NarrativeKind, StepOutcome};

use super::Event;
use super::types::{BattleResult, NarrativeEvent, UnitEvent};

pub(crate) struct EventExtractor {
    enemy_name: String,
}

impl EventExtractor {
    pub(crate) fn new(enemy_name: impl Into<String>) -> Self {
        Self {
            enemy_name: enemy_name.into(),
        }
    }

    /// Opening line shown once after setup.
    pub(crate) fn opening(&self) -> Event {
        narrative(format!("A wild {} approaches...", self.enemy_name))
    }

    /// Prompt shown whenever the battle waits on the player.
    pub(crate) fn choose_prompt(&self) -> Event {
        narrative("Choose an action:")
    }

    /// Windup line shown before an enemy ability resolves, if any.
    pub(crate) fn announce(&self, kind: ActionKind) -> Option<Event> {
        match kind {
            ActionKind::Snipe => Some(narrative(format!("{} uses sniping!", self.enemy_name))),
            ActionKind::Bombing => Some(narrative(format!("{} uses bombing!", self.enemy_name))),
            ActionKind::Attack | ActionKind::Protect => None,
        }
    }

    /// Events describing what a step did: result dialogue (when the step
    /// has one) followed by the health indicator update.
    pub(crate) fn step_results(&self, step: &StepOutcome) -> Vec<Event> {
        let mut events = Vec::with_capacity(2);

        match step.narrative {
            NarrativeKind::AttackLanded => events.push(narrative("The attack is successful!")),
            NarrativeKind::Braced => {
                events.push(narrative("You brace yourself for the next attack!"));
            }
            NarrativeKind::SnipeBlocked => {
                events.push(narrative("You protected yourself from the attack!"));
            }
            // Damage-only beats; the announce line already spoke.
            NarrativeKind::SnipeHit | NarrativeKind::BombingHit => {}
        }

        if let Some(damage) = step.damage {
            events.push(Event::Unit(UnitEvent::HealthChanged {
                side: damage.side,
                current_hp: damage.hp_after,
            }));
        }

        events
    }

    /// Closing line for a finished battle.
    pub(crate) fn ended(&self, result: BattleResult) -> Event {
        match result {
            BattleResult::Won => narrative("You won the battle!"),
            BattleResult::Lost => narrative("You were defeated."),
        }
    }
}

fn narrative(text: impl Into<String>) -> Event {
    Event::Narrative(NarrativeEvent { text: text.into() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{DamageReport, Side};

    fn text_of(event: &Event) -> &str {
        match event {
            Event::Narrative(NarrativeEvent { text }) => text,
            other => panic!("expected narrative, got {other:?}"),
        }
    }

    #[test]
    fn enemy_abilities_are_announced_by_name() {
        let extractor = EventExtractor::new("Drone");
        let event = extractor.announce(ActionKind::Snipe).unwrap();
        assert_eq!(text_of(&event), "Drone uses sniping!");
        assert!(extractor.announce(ActionKind::Attack).is_none());
    }

    #[test]
    fn damaging_step_yields_health_update() {
        let extractor = EventExtractor::new("Drone");
        let step = StepOutcome::damaging(
            ActionKind::Bombing,
            NarrativeKind::BombingHit,
            DamageReport {
                side: Side::Player,
                amount: 4,
                hp_before: 10,
                hp_after: 6,
            },
        );

        let events = extractor.step_results(&step);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            Event::Unit(UnitEvent::HealthChanged {
                side: Side::Player,
                current_hp: 6
            })
        ));
        assert_eq!(events[0].topic(), crate::events::Topic::Unit);
    }

    #[test]
    fn blocked_snipe_speaks_but_touches_no_indicator() {
        let extractor = EventExtractor::new("Drone");
        let step = StepOutcome::bloodless(ActionKind::Snipe, NarrativeKind::SnipeBlocked);

        let events = extractor.step_results(&step);
        assert_eq!(events.len(), 1);
        assert_eq!(text_of(&events[0]), "You protected yourself from the attack!");
    }
}
