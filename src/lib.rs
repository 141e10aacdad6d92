//! Fan-out gateway library.

pub mod admission;
pub mod config;
pub mod fetch;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use admission::AdmissionGate;
pub use config::GatewayConfig;
pub use fetch::FetchManager;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
