//! Game-session API attachment point.
//!
//! The game subsystem (session routing, matchmaking, move relay) is owned
//! elsewhere; deployments pass its router into [`crate::upstream::Subsystems`]
//! and the gateway nests it under [`crate::upstream::GAME_API_PREFIX`].

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;

/// Placeholder router for builds without the game subsystem linked.
pub fn detached_router() -> Router {
    Router::new().fallback(detached)
}

async fn detached() -> impl IntoResponse {
    tracing::warn!("game-session API request received but subsystem is not linked");
    (StatusCode::SERVICE_UNAVAILABLE, "game-session API offline")
}
