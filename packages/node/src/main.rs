//! `microstream-node` — microstream node discovery server.
//!
//! # Quick start
//!
//! ```sh
//! MICROSTREAM_NODE_ID=11111111-1111-1111-1111-111111111111 \
//! MICROSTREAM_TITLE="Jim's Stream" \
//! MICROSTREAM_BASE_URL=https://example.com \
//! microstream-node
//!
//! curl 'http://localhost:3000/api.php?route=node'
//! ```
//!
//! # Environment variables
//!
//! See [`NodeConfig`] for the full list.

use std::process::ExitCode;
use std::sync::Arc;

use microstream_node::{build_router, NodeConfig};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "microstream_node=info,tower_http=debug".into()
            }),
        )
        .init();

    let config = match NodeConfig::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if config.has_trailing_slash() {
        tracing::warn!(
            "MICROSTREAM_BASE_URL {:?} ends with '/'; api_base will contain a double slash",
            config.base_url
        );
    }
    tracing::info!(
        node_id = %config.node_id,
        protocol = %config.protocol,
        "api_base: {}",
        config.api_base()
    );

    let app = match build_router(Arc::clone(&config)) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("route registration failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {e}", config.bind_addr);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("listening on {}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
