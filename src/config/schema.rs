//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! gateway. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

/// Root configuration for the fan-out gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Batch admission settings.
    pub admission: AdmissionConfig,

    /// Outbound fetch settings.
    pub fetch: FetchConfig,

    /// Inbound batch limits.
    pub batch: BatchConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Optional TLS configuration. Plaintext when absent.
    pub tls: Option<TlsConfig>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            tls: None,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Batch admission settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdmissionConfig {
    /// Maximum batches processed concurrently, process-wide.
    pub max_concurrent_batches: usize,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            max_concurrent_batches: 100,
        }
    }
}

/// Outbound fetch settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Total timeout per outbound call in milliseconds, body read included.
    pub request_timeout_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 1000,
        }
    }
}

/// Inbound batch limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum number of URLs accepted in one batch.
    pub max_urls: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { max_urls: 20 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_limits() {
        let config = GatewayConfig::default();
        assert_eq!(config.admission.max_concurrent_batches, 100);
        assert_eq!(config.fetch.request_timeout_ms, 1000);
        assert_eq!(config.batch.max_urls, 20);
        assert!(config.listener.tls.is_none());
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.batch.max_urls, 20);
    }

    #[test]
    fn partial_toml_overrides_one_section() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [admission]
            max_concurrent_batches = 2

            [listener]
            bind_address = "127.0.0.1:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.admission.max_concurrent_batches, 2);
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        // Untouched sections keep their defaults.
        assert_eq!(config.fetch.request_timeout_ms, 1000);
    }

    #[test]
    fn tls_section_parses() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "0.0.0.0:8443"

            [listener.tls]
            cert_path = "/etc/gateway/cert.pem"
            key_path = "/etc/gateway/key.pem"
            "#,
        )
        .unwrap();
        let tls = config.listener.tls.expect("tls section should parse");
        assert_eq!(tls.cert_path, "/etc/gateway/cert.pem");
    }
}
