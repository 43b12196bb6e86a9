//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, mounts)
//!     → request.rs (request ID attach/propagate)
//!     → dispatch: routing table → render or redirect
//!     → response.rs (content types, error mapping)
//!     → Send to client
//!
//! /static, /gameon/static, /transient → ServeDir (no dispatch)
//! /gameon, /ws → externally-owned routers (no dispatch)
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{propagate_request_id_layer, set_request_id_layer, X_REQUEST_ID};
pub use server::HttpServer;
