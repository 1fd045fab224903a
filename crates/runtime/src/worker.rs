//! Session worker that owns the authoritative [`battle_core::BattleState`].
//!
//! Receives commands from [`crate::BattleHandle`], executes rounds via
//! [`battle_core::BattleEngine`], and publishes events to the EventBus with
//! pacing pauses between steps. Single-threaded and cooperative: one round
//! resolves to completion before the next command is looked at, so player
//! input arriving mid-resolution queues behind the round and is then
//! dropped as stale.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use battle_core::{
    BattleEngine, BattlePhase, BattleState, EngineError, EnemyPolicy, PlayerChoice, RngOracle,
    RoundOutcome, Side, UnitSnapshot,
};

use crate::api::{ActionReceipt, Result};
use crate::events::extractor::EventExtractor;
use crate::events::{BattleEvent, BattleResult, Event, EventBus};
use crate::pacing::{Pacing, PacingMoment};

/// Commands that can be sent to the session worker
pub(crate) enum Command {
    /// Complete setup: `Start → PlayerChoose`, opening narration.
    Begin { reply: oneshot::Sender<Result<()>> },
    /// Resolve one round for the player's choice.
    PlayerAction {
        choice: PlayerChoice,
        reply: oneshot::Sender<Result<ActionReceipt>>,
    },
    /// Query a read-only unit view.
    QuerySnapshot {
        side: Side,
        reply: oneshot::Sender<UnitSnapshot>,
    },
    /// Query the current phase.
    QueryPhase {
        reply: oneshot::Sender<BattlePhase>,
    },
}

/// Background task that processes battle commands.
pub(crate) struct SessionWorker {
    state: BattleState,
    policy: Box<dyn EnemyPolicy>,
    rng: Box<dyn RngOracle>,
    pacing: Box<dyn Pacing>,
    extractor: EventExtractor,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SessionWorker {
    pub(crate) fn new(
        state: BattleState,
        policy: Box<dyn EnemyPolicy>,
        rng: Box<dyn RngOracle>,
        pacing: Box<dyn Pacing>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        let extractor = EventExtractor::new(state.enemy.name.clone());
        Self {
            state,
            policy,
            rng,
            pacing,
            extractor,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop.
    pub(crate) async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }
        debug!("session worker shutting down (all handles dropped)");
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Begin { reply } => {
                let result = self.handle_begin().await;
                if reply.send(result).is_err() {
                    debug!("Begin reply channel closed (caller dropped)");
                }
            }
            Command::PlayerAction { choice, reply } => {
                let result = self.handle_player_action(choice).await;
                if reply.send(result).is_err() {
                    debug!("PlayerAction reply channel closed (caller dropped)");
                }
            }
            Command::QuerySnapshot { side, reply } => {
                if reply.send(self.state.snapshot(side)).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
            }
            Command::QueryPhase { reply } => {
                if reply.send(self.state.phase).is_err() {
                    debug!("QueryPhase reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Setup completion: opening narration, initial indicators, first prompt.
    async fn handle_begin(&mut self) -> Result<()> {
        BattleEngine::new(&mut self.state).begin()?;

        info!(
            player = %self.state.player.name,
            enemy = %self.state.enemy.name,
            "battle begins"
        );

        self.event_bus.publish(self.extractor.opening());
        for side in [Side::Player, Side::Enemy] {
            self.publish_health(side, self.state.unit(side).current_hp);
        }
        self.pacing.pause(PacingMoment::Setup).await;

        self.publish_phase(BattlePhase::PlayerChoose);
        self.event_bus.publish(self.extractor.choose_prompt());
        Ok(())
    }

    async fn handle_player_action(&mut self, choice: PlayerChoice) -> Result<ActionReceipt> {
        let outcome = match BattleEngine::new(&mut self.state).resolve_round(
            choice,
            self.policy.as_ref(),
            self.rng.as_ref(),
        ) {
            Ok(outcome) => outcome,
            Err(EngineError::NotAwaitingChoice { phase }) => {
                // Stale input: dropped, not raised.
                debug!(%choice, %phase, "dropping player action outside choice window");
                return Ok(ActionReceipt::Dropped);
            }
            Err(error) => {
                warn!(%choice, %error, "round resolution failed");
                return Err(error.into());
            }
        };

        info!(
            round = outcome.round,
            steps = outcome.steps.len(),
            phase = %outcome.phase,
            "round resolved"
        );

        self.publish_round(&outcome).await;
        Ok(ActionReceipt::Resolved(outcome.phase))
    }

    /// Replays a resolved round as paced presentation events.
    async fn publish_round(&self, outcome: &RoundOutcome) {
        self.publish_phase(BattlePhase::Resolving);

        for step in &outcome.steps {
            if let Some(announce) = self.extractor.announce(step.kind) {
                self.event_bus.publish(announce);
                self.pacing.pause(PacingMoment::Windup).await;
            }

            for event in self.extractor.step_results(step) {
                self.event_bus.publish(event);
            }
            self.pacing.pause(PacingMoment::Aftermath).await;
        }

        self.publish_phase(outcome.phase);
        match BattleResult::from_phase(outcome.phase) {
            Some(result) => {
                self.event_bus.publish(self.extractor.ended(result));
                self.event_bus
                    .publish(Event::Battle(BattleEvent::Ended { result }));
            }
            None => self.event_bus.publish(self.extractor.choose_prompt()),
        }
    }

    fn publish_phase(&self, phase: BattlePhase) {
        self.event_bus
            .publish(Event::Battle(BattleEvent::PhaseChanged { phase }));
    }

    fn publish_health(&self, side: Side, current_hp: u32) {
        self.event_bus
            .publish(Event::Unit(crate::events::UnitEvent::HealthChanged {
                side,
                current_hp,
            }));
    }
}
