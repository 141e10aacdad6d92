//! Outbound fan-out subsystem.
//!
//! # Data Flow
//! ```text
//! Validated batch (Vec<Url>)
//!     → manager.rs (one task per URL, shared client)
//!     → per-task GET, raced against the request scope
//!     → index-keyed aggregation behind a lock
//!     → first error | full completion | cancellation
//!     → Result handed back to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Concurrency is unbounded within a batch; the batch size limit and the
//!   admission gate bound total fan-out
//! - A non-success upstream status is still a fetched body, not an error;
//!   only transport-level failures abort the batch
//! - The caller observes a complete result set or an error, never a
//!   partial set

pub mod manager;

pub use manager::{FetchError, FetchManager};
