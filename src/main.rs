//! Multiplayer Chess Gateway
//!
//! The public HTTP front end for the browser chess site.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                   GATEWAY                     │
//!                        │                                               │
//!     Page Request       │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!     ───────────────────┼─▶│  http   │───▶│ routing  │───▶│ render  │  │
//!                        │  │ server  │    │  table   │    │ context │  │
//!                        │  └─────────┘    └──────────┘    │+template│  │
//!                        │       │                         └─────────┘  │
//!     /static, /transient│       ├──▶ ServeDir mounts                   │
//!     /gameon/static     │       │                                      │
//!                        │       │                                      │
//!     /gameon, /ws       │       └──▶ externally-owned routers          │
//!                        │                                               │
//!                        │  ┌─────────────────────────────────────────┐ │
//!                        │  │           Cross-Cutting Concerns         │ │
//!                        │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐ │ │
//!                        │  │  │ config │ │observability│ │lifecycle│ │ │
//!                        │  │  └────────┘ └─────────────┘ └─────────┘ │ │
//!                        │  └─────────────────────────────────────────┘ │
//!                        └──────────────────────────────────────────────┘
//! ```
//!
//! Startup is two-phase: persistence initialization gates the listener, so
//! a failed init means the process never accepts traffic.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use chess_gateway::config::load_config;
use chess_gateway::lifecycle::{self, Shutdown};
use chess_gateway::observability::{logging, metrics};
use chess_gateway::upstream::Subsystems;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional config file path as the only argument.
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Arc::new(load_config(config_path.as_deref())?);

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        dev = config.dev,
        static_url = %config.static_url(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Arc::new(Shutdown::new());
    tokio::spawn(lifecycle::signals::listen(shutdown.clone()));

    // Phase one: initialize. The deployment that links the real game,
    // live-channel, and storage crates constructs Subsystems from them.
    let gateway = lifecycle::initialize(config.clone(), Subsystems::detached()).await?;

    // Phase two: bind and serve.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    gateway.serve(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
