use admin_error_display::api::handlers::{load_translations, AppStateInner};
use admin_error_display::api::routes::create_router;
use admin_error_display::{config::Config, metrics};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }

    info!("Starting graceful shutdown...");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,admin_error_display=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting admin error display v{}", env!("CARGO_PKG_VERSION"));

    metrics::registry::init_metrics();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded successfully");

    let table = load_translations(&config.translation).context("Failed to load translation table")?;
    let state = Arc::new(AppStateInner::new(
        table,
        config.translation.clone(),
        config.server.instance_id.clone(),
    ));

    let app = create_router(state);

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind server")?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");

    Ok(())
}
