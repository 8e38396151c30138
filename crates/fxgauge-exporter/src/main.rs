//! fxgauge exporter
//!
//! Publishes the Central Bank of Russia daily rates as a Prometheus gauge.
//! - `/metrics`: `exchange_rate{code,name}` plus refresh-loop metrics
//! - background refresh every `REFRESH_INTERVAL` seconds
//! - graceful shutdown on SIGINT/SIGTERM (stops the refresh loop too)

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxgauge_exporter::{
    app_state::AppState,
    config,
    refresh::{scheduler, CbrSource, Pipeline},
    router,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::Settings::from_env().expect("invalid environment settings");
    let mapping = Arc::new(config::load_mapping_or_empty(settings.config_file.as_deref()));

    let state = AppState::new();
    let source = CbrSource::new(settings.upstream_url.clone(), settings.fetch_timeout)
        .expect("http client init failed");
    let pipeline = Arc::new(Pipeline::new(Arc::new(source), mapping, state.metrics()));

    let cancel = CancellationToken::new();
    let refresher = scheduler::spawn(pipeline, settings.refresh_interval, cancel.clone());

    let app = router::build_router(state.clone());

    tracing::info!(listen = %settings.listen_addr, upstream = %settings.upstream_url, "fxgauge-exporter starting");
    let listener = tokio::net::TcpListener::bind(settings.listen_addr)
        .await
        .expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state, cancel))
        .await
        .expect("server failed");

    if let Err(e) = refresher.await {
        tracing::warn!(error = %e, "refresh task ended abnormally");
    }
}

async fn shutdown_signal(state: AppState, cancel: CancellationToken) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
    state.set_draining();
    cancel.cancel();
}
