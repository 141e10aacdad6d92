//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (capacity and limits > 0, addresses parse)
//! - Check that a TLS section names both files
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic configuration problem.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address {0:?} is not a valid socket address")]
    InvalidMetricsAddress(String),

    #[error("admission.max_concurrent_batches must be greater than zero")]
    ZeroAdmissionCapacity,

    #[error("batch.max_urls must be greater than zero")]
    ZeroBatchLimit,

    #[error("fetch.request_timeout_ms must be greater than zero")]
    ZeroFetchTimeout,

    #[error("listener.tls.{0} must not be empty")]
    EmptyTlsPath(&'static str),
}

/// Check every semantic rule and collect all violations.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.admission.max_concurrent_batches == 0 {
        errors.push(ValidationError::ZeroAdmissionCapacity);
    }

    if config.batch.max_urls == 0 {
        errors.push(ValidationError::ZeroBatchLimit);
    }

    if config.fetch.request_timeout_ms == 0 {
        errors.push(ValidationError::ZeroFetchTimeout);
    }

    if let Some(tls) = &config.listener.tls {
        if tls.cert_path.is_empty() {
            errors.push(ValidationError::EmptyTlsPath("cert_path"));
        }
        if tls.key_path.is_empty() {
            errors.push(ValidationError::EmptyTlsPath("key_path"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::TlsConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_violation() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.admission.max_concurrent_batches = 0;
        config.batch.max_urls = 0;
        config.fetch.request_timeout_ms = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn tls_paths_must_be_named() {
        let mut config = GatewayConfig::default();
        config.listener.tls = Some(TlsConfig {
            cert_path: String::new(),
            key_path: "/etc/gateway/key.pem".into(),
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("cert_path"));
    }

    #[test]
    fn metrics_address_checked_only_when_enabled() {
        let mut config = GatewayConfig::default();
        config.observability.metrics_address = "nonsense".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
