//! Startup gating and subsystem mount ownership.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::routing::get;
use axum::Router;

use chess_gateway::lifecycle;
use chess_gateway::upstream::{Persistence, PersistenceError, Subsystems};

struct FailingStore;

#[async_trait]
impl Persistence for FailingStore {
    async fn init(&self) -> Result<(), PersistenceError> {
        Err(PersistenceError::new("schema migration failed"))
    }
}

#[tokio::test]
async fn failed_persistence_init_is_fatal() {
    let assets = tempfile::tempdir().unwrap();
    let config = Arc::new(common::test_config(assets.path()));

    let subsystems = Subsystems {
        persistence: Arc::new(FailingStore),
        ..Subsystems::detached()
    };

    let result = lifecycle::initialize(config, subsystems).await;
    assert!(result.is_err(), "gateway must not come up without storage");
}

#[tokio::test]
async fn detached_subsystem_mounts_fail_loudly() {
    let assets = tempfile::tempdir().unwrap();
    let (addr, _shutdown) =
        common::spawn_gateway(common::test_config(assets.path()), Subsystems::detached()).await;
    let client = common::client();

    for path in ["/gameon/session/new", "/ws"] {
        let res = client
            .get(format!("http://{addr}{path}"))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 503, "status for {path}");
    }
}

#[tokio::test]
async fn injected_routers_own_their_prefixes() {
    let assets = tempfile::tempdir().unwrap();

    let subsystems = Subsystems {
        game_api: Router::new().route("/session", get(|| async { "game-ok" })),
        live_channel: Router::new().route("/", get(|| async { "live-ok" })),
        ..Subsystems::detached()
    };

    let (addr, _shutdown) =
        common::spawn_gateway(common::test_config(assets.path()), subsystems).await;
    let client = common::client();

    let body = client
        .get(format!("http://{addr}/gameon/session"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "game-ok");

    let body = client
        .get(format!("http://{addr}/ws"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "live-ok");
}
