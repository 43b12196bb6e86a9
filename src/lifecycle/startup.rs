//! Startup orchestration.
//!
//! # Responsibilities
//! - Run persistence initialization before anything listens
//! - Assemble the HTTP server from config and injected subsystems
//! - Hand back a gateway that is ready to serve
//!
//! # Design Decisions
//! - Fail fast: any initialization error is fatal, never a per-request error
//! - Subsystems initialize in order, not concurrently
//! - Listeners start last (traffic only when ready)

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::GatewayConfig;
use crate::http::HttpServer;
use crate::upstream::{PersistenceError, Subsystems};

/// Error type for the initialization phase.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// A gateway that has completed initialization and may accept traffic.
pub struct ReadyGateway {
    server: HttpServer,
}

/// Phase one: initialize the persistence layer, then assemble the server.
///
/// The gateway must not accept traffic unless this returns `Ok`.
pub async fn initialize(
    config: Arc<GatewayConfig>,
    subsystems: Subsystems,
) -> Result<ReadyGateway, StartupError> {
    subsystems.persistence.init().await?;
    tracing::info!("persistence layer initialized");

    Ok(ReadyGateway {
        server: HttpServer::new(config, subsystems),
    })
}

impl ReadyGateway {
    /// Phase two: serve on the given listener until shutdown is signaled.
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        self.server.run(listener, shutdown).await
    }
}
