//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware)
//!     → handlers.rs (admission ticket, decode, dispatch)
//!     → validation.rs (size bound, URL syntax)
//!     → [fetch manager fans out]
//!     → handlers.rs (encode result or map error to status)
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;
pub mod validation;

pub use server::HttpServer;
pub use validation::{validate_batch, BatchError};
