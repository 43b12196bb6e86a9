//! Page composition & routing gateway for the multiplayer chess site.

// Core subsystems
pub mod config;
pub mod http;
pub mod render;
pub mod routing;

// External collaborators
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

// Operational tooling
pub mod purge;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
