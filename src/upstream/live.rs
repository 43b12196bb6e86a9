//! Live-update channel attachment point.
//!
//! The realtime channel (socket transport, fan-out, presence) is owned
//! elsewhere; deployments pass its router into [`crate::upstream::Subsystems`]
//! and the gateway nests it under [`crate::upstream::LIVE_CHANNEL_PREFIX`].

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;

/// Placeholder router for builds without the live channel linked.
pub fn detached_router() -> Router {
    Router::new().fallback(detached)
}

async fn detached() -> impl IntoResponse {
    tracing::warn!("live-channel request received but subsystem is not linked");
    (StatusCode::SERVICE_UNAVAILABLE, "live channel offline")
}
