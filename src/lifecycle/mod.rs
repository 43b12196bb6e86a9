//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → persistence.init() → Build server
//!     → Bind listener → Accept traffic
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Two explicit phases: initialize (can fail, fatal) then serve
//! - Persistence init gates traffic; the listener binds only after it
//! - No cancellation of initialization: it completes or the process dies

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{initialize, ReadyGateway, StartupError};
