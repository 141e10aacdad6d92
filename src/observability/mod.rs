//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (batch counters and duration histogram)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, separate address)
//! ```
//!
//! # Design Decisions
//! - Batch id flows through all log events for one request
//! - Metrics are cheap (atomic increments) and off by default

pub mod logging;
pub mod metrics;
