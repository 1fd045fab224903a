//! Injectable delay hooks between resolution steps.
//!
//! The original presentation paced each action with short suspensions. Here
//! pacing is a cooperative yield point injected into the session worker: no
//! other battle logic runs during a pause, so there is nothing to race.
//! Tests use [`NoPacing`]; interactive hosts use [`DelayPacing`].

use std::time::Duration;

use async_trait::async_trait;

/// Where in the resolution flow a pause occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacingMoment {
    /// After the opening narration, before the first choice prompt.
    Setup,
    /// After an enemy ability is announced, before it resolves.
    Windup,
    /// After a step's results have been reported.
    Aftermath,
}

/// Pacing strategy applied between resolution steps.
#[async_trait]
pub trait Pacing: Send + Sync {
    async fn pause(&self, moment: PacingMoment);
}

/// No pauses at all. The default for tests and headless drivers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

#[async_trait]
impl Pacing for NoPacing {
    async fn pause(&self, _moment: PacingMoment) {}
}

/// Sleep-based pacing with per-moment durations.
#[derive(Debug, Clone, Copy)]
pub struct DelayPacing {
    pub setup: Duration,
    pub windup: Duration,
    pub aftermath: Duration,
}

impl DelayPacing {
    /// The original presentation's beats: 2s narration, 1s ability windup.
    pub fn classic() -> Self {
        Self {
            setup: Duration::from_secs(2),
            windup: Duration::from_secs(1),
            aftermath: Duration::from_secs(2),
        }
    }
}

#[async_trait]
impl Pacing for DelayPacing {
    async fn pause(&self, moment: PacingMoment) {
        let duration = match moment {
            PacingMoment::Setup => self.setup,
            PacingMoment::Windup => self.windup,
            PacingMoment::Aftermath => self.aftermath,
        };
        tokio::time::sleep(duration).await;
    }
}
