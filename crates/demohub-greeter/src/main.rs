//! demohub greeter binary.
//!
//! - `GET /`        : `{"message": "Hello Rupesh!"}`, counted
//! - `GET /metrics` : request counter in Prometheus text format

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use demohub_core::error::{DemoError, Result};
use demohub_greeter::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    let path = config::config_path();
    let (cfg, from_file) = config::load_or_default(&path)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cfg.log.filter.as_str().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if from_file {
        tracing::info!(%path, "config loaded");
    } else {
        tracing::info!(%path, "config file not found, using defaults");
    }

    let listen = cfg.server.listen_addr()?;
    let state = app_state::AppState::new(cfg);
    tracing::info!(%listen, log_filter = %state.cfg().log.filter, "demohub-greeter starting");
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| DemoError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DemoError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
