//! External subsystem mount points.
//!
//! # Data Flow
//! ```text
//! Deployment wiring (main or tests)
//!     → Subsystems { game_api, live_channel, persistence }
//!     → lifecycle::initialize (persistence.init() gates traffic)
//!     → http server assembly (routers nested under fixed prefixes)
//! ```
//!
//! # Design Decisions
//! - The gateway owns nothing under the mounted prefixes; it nests the
//!   injected routers wholesale and never inspects their requests
//! - Persistence is a trait so tests can exercise the failing-init branch
//! - Detached placeholders answer 503 so a build without the external
//!   crates fails loudly instead of absorbing subsystem traffic

pub mod game;
pub mod live;
pub mod persistence;

use std::sync::Arc;

use axum::Router;

pub use persistence::{Persistence, PersistenceError};

/// URL prefix owned by the game-session API subsystem.
pub const GAME_API_PREFIX: &str = "/gameon";

/// URL prefix owned by the live-update channel subsystem.
pub const LIVE_CHANNEL_PREFIX: &str = "/ws";

/// The externally-owned collaborators handed to the gateway at startup.
pub struct Subsystems {
    /// Router mounted under [`GAME_API_PREFIX`].
    pub game_api: Router,

    /// Router mounted under [`LIVE_CHANNEL_PREFIX`].
    pub live_channel: Router,

    /// Storage layer initialized once before the gateway accepts traffic.
    pub persistence: Arc<dyn Persistence>,
}

impl Subsystems {
    /// Subsystems for a build where the external crates are not linked:
    /// placeholder mounts and a persistence handle that is trivially ready.
    pub fn detached() -> Self {
        Self {
            game_api: game::detached_router(),
            live_channel: live::detached_router(),
            persistence: Arc::new(persistence::Detached),
        }
    }
}
