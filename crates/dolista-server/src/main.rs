use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use dolista_bot::config::ConfigSource;
use dolista_bot::notifier::TelegramNotifier;
use dolista_bot::state::{AppState, AppStateInner};
use dolista_bot::webhook;
use dolista_db::Database;
use dolista_db::clock::SystemClock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "dolista=debug,dolista_bot=debug,dolista_db=debug,tower_http=debug".into()
            }),
        )
        .init();

    // Config
    let host = std::env::var("DOLISTA_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("DOLISTA_PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;
    let data_dir: PathBuf = std::env::var("DOLISTA_DATA_DIR")
        .unwrap_or_else(|_| "./data".into())
        .into();
    let telegram_api =
        std::env::var("DOLISTA_TELEGRAM_API").unwrap_or_else(|_| "https://api.telegram.org".into());
    let config_var =
        std::env::var("DOLISTA_APP_CONFIG_VAR").unwrap_or_else(|_| "APP_CONFIG".into());

    // Decoded per request; without it every update is dropped
    if std::env::var(&config_var).is_err() {
        warn!("{} is not set; updates will be ignored until it is", config_var);
    }

    let db = Database::new(data_dir, Arc::new(SystemClock));
    info!("Store directory: {}", db.dir().display());

    let state: AppState = Arc::new(AppStateInner {
        db,
        notifier: Arc::new(TelegramNotifier::new(reqwest::Client::new(), telegram_api)),
        config: ConfigSource::Env(config_var),
    });

    let app = Router::new()
        .route("/webhook", post(webhook::handle_update))
        .route("/health", get(webhook::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("dolista listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
