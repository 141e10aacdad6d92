//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the batch endpoint
//! - Wire up middleware (admission gate, tracing)
//! - Bind plaintext or TLS according to config
//! - Drain connections on shutdown within the grace period

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::post, Router};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::admission::AdmissionGate;
use crate::config::GatewayConfig;
use crate::fetch::FetchManager;
use crate::http::handlers;
use crate::net::tls::load_tls_config;

/// How long in-flight requests get to finish once shutdown starts.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<AdmissionGate>,
    pub fetcher: Arc<FetchManager>,
    pub max_urls: usize,
    /// Root scope; per-request scopes are children of it.
    pub scope: CancellationToken,
}

/// HTTP server for the fan-out gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// `scope` is the process-wide root token; cancelling it aborts every
    /// in-flight batch.
    pub fn new(config: GatewayConfig, scope: CancellationToken) -> Result<Self, reqwest::Error> {
        let gate = Arc::new(AdmissionGate::new(config.admission.max_concurrent_batches));
        let fetcher = Arc::new(FetchManager::new(Duration::from_millis(
            config.fetch.request_timeout_ms,
        ))?);

        let state = AppState {
            gate,
            fetcher,
            max_urls: config.batch.max_urls,
            scope,
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/urls", post(handlers::fetch_batch))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                handlers::admission_middleware,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the server until the shutdown channel fires, then drain.
    pub async fn run(
        self,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .listener
            .bind_address
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let handle = axum_server::Handle::new();
        {
            let handle = handle.clone();
            tokio::spawn(async move {
                let _ = shutdown.recv().await;
                tracing::info!(
                    grace_secs = SHUTDOWN_GRACE.as_secs(),
                    "Draining connections"
                );
                handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
            });
        }

        let app = self.router.into_make_service();

        match &self.config.listener.tls {
            Some(tls) => {
                let rustls_config =
                    load_tls_config(Path::new(&tls.cert_path), Path::new(&tls.key_path)).await?;
                tracing::info!(address = %addr, "HTTPS server starting");
                axum_server::bind_rustls(addr, rustls_config)
                    .handle(handle)
                    .serve(app)
                    .await?;
            }
            None => {
                tracing::info!(address = %addr, "HTTP server starting");
                axum_server::bind(addr).handle(handle).serve(app).await?;
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
