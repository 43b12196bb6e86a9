//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → table.rs (route lookup, registration order)
//!     → matcher.rs (evaluate path pattern)
//!     → Return: matched RouteEntry or no match (404)
//!
//! Route Compilation (at startup):
//!     site_routes()
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (exact and prefix matching only)
//! - Deterministic: same path always matches same route
//! - First registered match wins; exact literals are registered before
//!   their wildcard counterparts

pub mod matcher;
pub mod table;

pub use matcher::PathPattern;
pub use table::{site_routes, RouteEntry, RouteKind, RouteOverrides, RouteTable};
