//! Shared utilities for gateway integration tests.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;

use chess_gateway::config::GatewayConfig;
use chess_gateway::lifecycle::{self, Shutdown};
use chess_gateway::upstream::Subsystems;

/// Config pointing at the repo templates and throwaway asset roots.
#[allow(dead_code)]
pub fn test_config(assets_root: &Path) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.templates.dir = format!("{}/templates", env!("CARGO_MANIFEST_DIR"));
    config.assets.site_dir = assets_root.join("static").display().to_string();
    config.assets.game_dir = assets_root.join("gameon").display().to_string();
    config.assets.transient_dir = assets_root.join("transient").display().to_string();
    config
}

/// Start the gateway on an ephemeral loopback port.
///
/// Returns the bound address and the shutdown handle; dropping the handle
/// without triggering leaves the task to die with the test runtime.
#[allow(dead_code)]
pub async fn spawn_gateway(
    config: GatewayConfig,
    subsystems: Subsystems,
) -> (SocketAddr, Shutdown) {
    let shutdown = Shutdown::new();
    let gateway = lifecycle::initialize(Arc::new(config), subsystems)
        .await
        .expect("gateway initialization failed");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = gateway.serve(listener, rx).await;
    });

    (addr, shutdown)
}

/// A reqwest client that does not follow redirects or pick up proxies.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
