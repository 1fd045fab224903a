//! Cloneable façade for issuing commands to the runtime.
//!
//! [`BattleHandle`] hides channel plumbing and offers async helpers for
//! driving the battle or streaming events from specific topics.

use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::{BattlePhase, PlayerChoice, Side, UnitSnapshot};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::worker::Command;

/// What became of a submitted player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionReceipt {
    /// The round resolved; the battle is now in this phase.
    Resolved(BattlePhase),
    /// Stale input: the battle was not awaiting a choice. Nothing changed.
    Dropped,
}

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct BattleHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl BattleHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// One-time setup completion: moves the battle to its first choice and
    /// emits the opening narration and initial health indicators.
    pub async fn begin(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Begin { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await?
    }

    /// Submit the player's choice for the next round.
    ///
    /// Resolves the whole round before returning. Input sent while the
    /// battle is not awaiting a choice is dropped, not an error.
    pub async fn player_action(&self, choice: PlayerChoice) -> Result<ActionReceipt> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::PlayerAction {
                choice,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await?
    }

    /// Read-only view of one combatant.
    pub async fn snapshot(&self, side: Side) -> Result<UnitSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QuerySnapshot {
                side,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        Ok(reply_rx.await?)
    }

    /// The battle's current phase.
    pub async fn phase(&self) -> Result<BattlePhase> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryPhase { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        Ok(reply_rx.await?)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Narrative` - dialogue lines
    /// - `Topic::Unit` - health indicator updates
    /// - `Topic::Battle` - phase changes and battle end
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }
}
