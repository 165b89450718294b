//! Site Errors

use thiserror::Error;

use crate::state::counter::CounterPhase;

#[derive(Debug, Error)]
pub enum SiteError {
    /// Counter may only start from idle
    #[error("counter cannot start while {phase:?}")]
    CounterRejected { phase: CounterPhase },

    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("failed to serialize structured data: {0}")]
    Serialize(#[from] serde_json::Error),
}
