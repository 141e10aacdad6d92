//! Concurrent URL fan-out gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                FAN-OUT GATEWAY                │
//!                    │                                               │
//!   POST /urls       │  ┌───────────┐   ┌───────────┐   ┌─────────┐ │
//!   ─────────────────┼─▶│ admission │──▶│   http    │──▶│  fetch  │─┼──▶ Origin A
//!                    │  │   gate    │   │ validate  │   │ manager │─┼──▶ Origin B
//!                    │  └───────────┘   └───────────┘   └─────────┘ │    ...
//!                    │                                               │
//!   200 {"0":..}     │  ┌─────────────────────────────────────────┐ │
//!   ◀────────────────┼──│  index-keyed aggregation, first error,  │ │
//!                    │  │  or cancellation — whichever wins       │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    │                                               │
//!                    │  config · lifecycle · observability · tls     │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use fanout_gateway::config::{self, GatewayConfig};
use fanout_gateway::lifecycle::{signals, Shutdown};
use fanout_gateway::observability::{logging, metrics};
use fanout_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "fanout-gateway")]
#[command(about = "Concurrent URL fan-out gateway", long_about = None)]
struct Cli {
    /// Path to the TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();

    tracing::info!("fanout-gateway v0.1.0 starting");

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => GatewayConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls.is_some(),
        max_concurrent_batches = config.admission.max_concurrent_batches,
        max_urls = config.batch.max_urls,
        request_timeout_ms = config.fetch.request_timeout_ms,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Arc::new(Shutdown::new());
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, shutdown.scope())?;

    // First signal drains gracefully; a second one terminates on the spot.
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            signals::wait_for_interrupt().await;
            tracing::info!("Interrupt received, shutting down");
            shutdown.trigger();

            signals::wait_for_interrupt().await;
            tracing::error!("Second interrupt, terminating");
            std::process::exit(1);
        });
    }

    server.run(server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
