//! Orchestrator and builder.
//!
//! [`RuntimeBuilder`] assembles a battle from unit specs, rules config, a
//! seed, and the injectable strategies (enemy policy, RNG oracle, pacing),
//! validates the specs, and spawns the session worker. The returned
//! [`BattleRuntime`] exposes a [`BattleHandle`] for the host.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use battle_core::{
    BattleConfig, BattleState, EnemyPolicy, PcgRng, RngOracle, Side, StandardPolicy, UnitSpec,
};

use crate::api::{BattleHandle, Result, SetupError};
use crate::events::EventBus;
use crate::pacing::{NoPacing, Pacing};
use crate::worker::SessionWorker;

/// Tunable runtime parameters.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    pub seed: u64,
    /// Command channel depth; stale inputs queue here before being dropped.
    pub channel_capacity: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            seed: 0,
            channel_capacity: Self::DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Builder for [`BattleRuntime`].
pub struct RuntimeBuilder {
    player: Option<UnitSpec>,
    enemy: Option<UnitSpec>,
    config: RuntimeConfig,
    policy: Option<Box<dyn EnemyPolicy>>,
    rng: Box<dyn RngOracle>,
    pacing: Box<dyn Pacing>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            player: None,
            enemy: None,
            config: RuntimeConfig::default(),
            policy: None,
            rng: Box::new(PcgRng),
            pacing: Box::new(NoPacing),
        }
    }

    pub fn player(mut self, spec: UnitSpec) -> Self {
        self.player = Some(spec);
        self
    }

    pub fn enemy(mut self, spec: UnitSpec) -> Self {
        self.enemy = Some(spec);
        self
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Replaces the shipped enemy behavior.
    pub fn policy(mut self, policy: impl EnemyPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Replaces the production RNG oracle (tests use fixed oracles).
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Replaces the pacing strategy (defaults to no pauses).
    pub fn pacing(mut self, pacing: impl Pacing + 'static) -> Self {
        self.pacing = Box::new(pacing);
        self
    }

    /// Validates the specs and spawns the session worker.
    ///
    /// Malformed setup is a fatal precondition violation: reported once,
    /// never retried.
    pub fn build(self) -> Result<BattleRuntime> {
        let player = validate_spec(Side::Player, self.player)?;
        let enemy = validate_spec(Side::Enemy, self.enemy)?;

        let policy = self
            .policy
            .unwrap_or_else(|| Box::new(StandardPolicy::new(&self.config.battle)));

        let state = BattleState::new(player, enemy, self.config.seed, &self.config.battle);

        let event_bus = EventBus::new();
        let (command_tx, command_rx) = mpsc::channel(self.config.channel_capacity);

        let worker = SessionWorker::new(
            state,
            policy,
            self.rng,
            self.pacing,
            command_rx,
            event_bus.clone(),
        );
        let worker_task = tokio::spawn(worker.run());

        Ok(BattleRuntime {
            handle: BattleHandle::new(command_tx, event_bus),
            worker_task,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_spec(side: Side, spec: Option<UnitSpec>) -> Result<UnitSpec> {
    let spec = spec.ok_or(SetupError::MissingSpec { side })?;
    if spec.name.trim().is_empty() {
        return Err(SetupError::EmptyName { side }.into());
    }
    if spec.max_hp == 0 {
        return Err(SetupError::ZeroMaxHp { side }.into());
    }
    Ok(spec)
}

/// A running battle session.
///
/// Dropping the runtime (and every cloned handle) shuts the worker down.
pub struct BattleRuntime {
    handle: BattleHandle,
    worker_task: JoinHandle<()>,
}

impl BattleRuntime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Cloneable handle for issuing commands and subscribing to events.
    pub fn handle(&self) -> BattleHandle {
        self.handle.clone()
    }

    /// Waits for the worker to exit (all handles dropped).
    pub async fn shutdown(self) {
        drop(self.handle);
        let _ = self.worker_task.await;
    }
}
