//! Runtime orchestration for the deterministic battle core.
//!
//! This crate wires the pure [`battle_core`] rules into a host-facing API.
//! Consumers embed [`BattleRuntime`] to drive a battle, subscribe to events,
//! and issue player actions through [`BattleHandle`] without ever touching
//! the mutable state directly.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus presentation layers
//!   subscribe to
//! - [`pacing`] provides the injectable delay hooks between resolution steps
//! - [`worker`] keeps the session task internal to the crate
pub mod api;
pub mod events;
pub mod pacing;
pub mod runtime;

mod worker;

pub use api::{ActionReceipt, BattleHandle, Result, RuntimeError, SetupError};
pub use events::{BattleEvent, BattleResult, Event, EventBus, NarrativeEvent, Topic, UnitEvent};
pub use pacing::{DelayPacing, NoPacing, Pacing, PacingMoment};
pub use runtime::{BattleRuntime, RuntimeBuilder, RuntimeConfig};
