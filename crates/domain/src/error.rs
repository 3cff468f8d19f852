//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts them into
//! [`SproutError`] at the port boundary. The variants carry the failed
//! subsystem, not the recovery policy: callers decide whether to log and
//! continue (the dispatch loop) or to abort (startup).

use std::time::Duration;

/// Top-level error for store and bus operations.
#[derive(Debug, thiserror::Error)]
pub enum SproutError {
    /// Persistence failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Publishing to the message bus failed.
    #[error("bus error")]
    Bus(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A bounded store or publish call overran its budget.
    #[error("operation timed out after {0:?}")]
    Timeout(Duration),
}

impl SproutError {
    /// Wrap a storage-layer error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }

    /// Wrap a bus-layer error.
    pub fn bus(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Bus(Box::new(err))
    }
}
