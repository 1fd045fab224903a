//! Types downstream clients interact with.

mod errors;
mod handle;

pub use errors::{Result, RuntimeError, SetupError};
pub use handle::{ActionReceipt, BattleHandle};
