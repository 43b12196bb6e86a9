//! Persistence initialization contract.

use async_trait::async_trait;

/// Error surfaced by a failed persistence initialization.
///
/// Opaque by design: the storage layer owns its failure detail, the
/// gateway only decides that startup is fatal.
#[derive(Debug, thiserror::Error)]
#[error("persistence initialization failed: {reason}")]
pub struct PersistenceError {
    reason: String,
}

impl PersistenceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The storage layer as the gateway sees it: a single initialization step
/// that must complete before traffic is accepted.
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Run one-time initialization (connections, migrations). Called
    /// exactly once, before the listener binds. Failure aborts startup.
    async fn init(&self) -> Result<(), PersistenceError>;
}

/// Stand-in used when no storage subsystem is linked into the build.
pub struct Detached;

#[async_trait]
impl Persistence for Detached {
    async fn init(&self) -> Result<(), PersistenceError> {
        tracing::warn!("no persistence subsystem linked; skipping storage initialization");
        Ok(())
    }
}
