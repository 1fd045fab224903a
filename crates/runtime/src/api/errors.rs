//! Runtime error types.

use battle_core::{EngineError, Side};

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Fatal setup precondition violations, reported once and not retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{side} spec is missing")]
    MissingSpec { side: Side },

    #[error("{side} name must not be empty")]
    EmptyName { side: Side },

    #[error("{side} max hp must be positive")]
    ZeroMaxHp { side: Side },
}

/// Errors surfaced through the runtime API.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// A transition pipeline failure. Not produced by stale input, which
    /// the worker drops silently.
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("command channel closed")]
    CommandChannelClosed,

    #[error("reply channel closed: {0}")]
    ReplyChannelClosed(#[from] tokio::sync::oneshot::error::RecvError),
}
