//! Events emitted during battle resolution for front-ends to observe.

mod bus;
pub(crate) mod extractor;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{BattleEvent, BattleResult, NarrativeEvent, UnitEvent};
