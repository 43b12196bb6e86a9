//! Page rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (scheme, host, path, query)
//!     → context.rs (RequestedPage + flags.rs registry → PageContext,
//!       overrides merged)
//!     → engine.rs (minijinja render with shared bindings installed)
//!     → HTML / XML body
//! ```
//!
//! # Design Decisions
//! - The context is a typed struct, not a key/value bag; override
//!   precedence (route pin > query > default) lives in one function
//! - Context construction is pure: no I/O, deterministic for identical
//!   request fields and configuration
//! - Utility bindings (JSON codec, URL-encoder, marker type) are owned by
//!   SharedBindings and installed on the engine, so rendering is testable
//!   without ambient process state

pub mod bindings;
pub mod context;
pub mod engine;
pub mod flags;

pub use bindings::SharedBindings;
pub use context::{ContextBuilder, PageContext, RequestedPage};
pub use engine::{RenderError, TemplateEngine};
pub use flags::FeatureFlags;
