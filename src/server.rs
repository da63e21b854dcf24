//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, metrics recorder, and the lifecycle of the
//! public and operations listeners.

use crate::config::{Config, mask_connection_string};
use crate::domain::{DomainLookup, MetricsSink};
use crate::infrastructure::metrics::{PrometheusMetrics, install_recorder};
use crate::infrastructure::store::RedisStore;
use crate::routes::{app_router, ops_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the redirect server with the given configuration.
///
/// Initializes:
/// - Redis connection, verified with PING
/// - Prometheus recorder and operations listener (when `METRICS_LISTEN` is set)
/// - Axum public listener
///
/// Both listeners stop on Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if:
/// - Redis is unreachable at startup (the service never serves with a dead store)
/// - A listener fails to bind
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = RedisStore::connect(&config.redis_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to Redis at {}",
                mask_connection_string(&config.redis_url)
            )
        })?;
    let lookup: Arc<dyn DomainLookup> = Arc::new(store);

    let metrics_handle = if config.is_metrics_enabled() {
        Some(install_recorder()?)
    } else {
        None
    };
    let metrics: Arc<dyn MetricsSink> = Arc::new(PrometheusMetrics::new());

    let state = AppState::new(lookup, metrics, metrics_handle);

    if let Some(metrics_addr) = &config.metrics_listen_addr {
        let addr: SocketAddr = metrics_addr
            .parse()
            .with_context(|| format!("Invalid METRICS_LISTEN address '{metrics_addr}'"))?;
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind metrics listener on {addr}"))?;
        tracing::info!("Metrics listening on http://{addr}");

        let ops = ops_router(state.clone());
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, ops)
                .with_graceful_shutdown(shutdown_signal())
                .await
            {
                tracing::error!("Metrics listener error: {}", e);
            }
        });
    }

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind listener on {addr}"))?;
    tracing::info!("Redirector listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Redirector stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
