//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Initialize subsystems → Start server
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Cancel root scope → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//!     Second signal → Forced termination
//! ```
//!
//! # Design Decisions
//! - Ordered shutdown: stop fan-out first, then drain, then close
//! - Drain has a fixed grace period; forced exit after that

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
