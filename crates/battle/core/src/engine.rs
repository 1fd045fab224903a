//! Round resolution and phase transitions.
//!
//! The [`BattleEngine`] is the authoritative reducer for [`BattleState`].
//! Each round it merges the player's choice with the enemy policy's choice
//! into one deterministic sequence, executes it through the transition
//! pipeline, and moves the battle between phases. The engine is the only
//! place phase transitions happen.

use crate::action::error::{ActionError, TransitionPhase, TransitionPhaseError};
use crate::action::kinds::{AttackAction, BombingAction, ProtectAction, SnipeAction};
use crate::action::{ActionKind, ActionTransition, BattleAction, PlayerChoice, StepOutcome};
use crate::policy::EnemyPolicy;
use crate::rng::{RngOracle, compute_seed};
use crate::state::{BattlePhase, BattleState};

/// Errors surfaced while driving a battle through the engine.
///
/// Wrong-phase requests are typed errors here; whether to surface or drop
/// them (stale input during `Resolving`, for instance) is host policy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("battle can only begin from start (phase {phase})")]
    AlreadyBegun { phase: BattlePhase },

    #[error("no player action accepted during {phase}")]
    NotAwaitingChoice { phase: BattlePhase },

    #[error("attack action failed: {0}")]
    Attack(TransitionPhaseError<ActionError>),

    #[error("protect action failed: {0}")]
    Protect(TransitionPhaseError<ActionError>),

    #[error("snipe action failed: {0}")]
    Snipe(TransitionPhaseError<ActionError>),

    #[error("bombing action failed: {0}")]
    Bombing(TransitionPhaseError<ActionError>),
}

/// Complete outcome of one resolved round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundOutcome {
    pub round: u32,
    /// Executed steps in execution order. Shorter than the scheduled list
    /// when a lethal step preempted the rest of the round.
    pub steps: Vec<StepOutcome>,
    /// Phase after the round: `PlayerChoose`, `Won`, or `Lost`.
    pub phase: BattlePhase,
}

/// Battle engine that manages round resolution and phase transitions.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
}

impl<'a> BattleEngine<'a> {
    /// Creates a new engine borrowing the given state.
    pub fn new(state: &'a mut BattleState) -> Self {
        Self { state }
    }

    /// One-time `Start → PlayerChoose` transition after setup.
    pub fn begin(&mut self) -> Result<(), EngineError> {
        if self.state.phase != BattlePhase::Start {
            return Err(EngineError::AlreadyBegun {
                phase: self.state.phase,
            });
        }
        self.state.phase = BattlePhase::PlayerChoose;
        Ok(())
    }

    /// Resolves one full round for the given player choice.
    ///
    /// Builds `[player action, enemy action]`, stable-sorts by descending
    /// priority (insertion order breaks ties, so the player's action runs
    /// first on a collision), executes each step, and checks lethality
    /// after every step - player death first, then enemy death. A lethal
    /// step ends the round immediately; later-scheduled actions never run.
    pub fn resolve_round(
        &mut self,
        choice: PlayerChoice,
        policy: &dyn EnemyPolicy,
        rng: &dyn RngOracle,
    ) -> Result<RoundOutcome, EngineError> {
        if self.state.phase != BattlePhase::PlayerChoose {
            return Err(EngineError::NotAwaitingChoice {
                phase: self.state.phase,
            });
        }

        // A round either resolves fully or leaves the state untouched. A
        // mid-round failure (a host policy scheduling an exhausted snipe,
        // say) must not strand the battle in `Resolving` with half a round
        // applied, so errors restore this checkpoint before propagating.
        let checkpoint = self.state.clone();

        self.state.round += 1;

        // The previous round's exposure window is over; protect only
        // covers the round it was chosen in.
        self.state.player.clear_protection();

        let seed = compute_seed(self.state.seed, self.state.nonce, 0);
        let enemy_kind = policy.choose(self.state, rng, seed);

        let mut actions = vec![
            BattleAction::new(choice.into()),
            BattleAction::new(enemy_kind),
        ];
        order_for_round(&mut actions);

        self.state.phase = BattlePhase::Resolving;

        let mut steps = Vec::with_capacity(actions.len());
        for action in &actions {
            let outcome = match self.execute(action) {
                Ok(outcome) => outcome,
                Err(error) => {
                    *self.state = checkpoint;
                    return Err(error);
                }
            };
            steps.push(outcome);

            if !self.state.player.is_alive() {
                self.state.phase = BattlePhase::Lost;
                break;
            }
            if !self.state.enemy.is_alive() {
                self.state.phase = BattlePhase::Won;
                break;
            }
        }

        if self.state.phase == BattlePhase::Resolving {
            self.state.phase = BattlePhase::PlayerChoose;
        }

        Ok(RoundOutcome {
            round: self.state.round,
            steps,
            phase: self.state.phase,
        })
    }

    /// Executes a single scheduled action through its transition.
    fn execute(&mut self, action: &BattleAction) -> Result<StepOutcome, EngineError> {
        let outcome = match action.kind {
            ActionKind::Attack => {
                drive_transition(&AttackAction, self.state).map_err(EngineError::Attack)?
            }
            ActionKind::Protect => {
                drive_transition(&ProtectAction, self.state).map_err(EngineError::Protect)?
            }
            ActionKind::Snipe => {
                drive_transition(&SnipeAction, self.state).map_err(EngineError::Snipe)?
            }
            ActionKind::Bombing => {
                drive_transition(&BombingAction, self.state).map_err(EngineError::Bombing)?
            }
        };

        // Increment nonce after successful execution
        self.state.nonce += 1;

        Ok(outcome)
    }
}

/// Sorts a round's actions into execution order.
///
/// Descending priority; `slice::sort_by` is stable, so equal priorities
/// keep insertion order (player-scheduled before enemy-scheduled).
fn order_for_round(actions: &mut [BattleAction]) {
    actions.sort_by(|a, b| b.priority.cmp(&a.priority));
}

/// Executes a transition through the three-phase pipeline.
fn drive_transition<T>(
    transition: &T,
    state: &mut BattleState,
) -> Result<StepOutcome, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let outcome = transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(outcome)
}
