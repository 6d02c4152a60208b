//! # Driftboard Binary
//!
//! The entry point that assembles the application: configuration, message
//! store, moderation client, pipeline service, background purge sweep, and
//! the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use api_adapters::{create_router, AppState};
use chrono::Utc;
use configs::AppConfig;
use moderation_adapters::HttpContentClassifier;
use secrecy::ExposeSecret;
use services::{expiry, BoardService, ModerationGate};
use storage_adapters::SqliteMessageRepo;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().context("loading configuration")?;

    let repo = Arc::new(
        SqliteMessageRepo::connect(&config.database_url)
            .await
            .context("opening message store")?,
    );

    let classifier = Arc::new(HttpContentClassifier::new(
        config.moderation.endpoint.clone(),
        config.moderation.api_key.expose_secret(),
    )?);
    let moderation = ModerationGate::new(classifier, config.moderation.fail_open);

    let board = BoardService::new(
        repo.clone(),
        moderation,
        config.admin_secret.expose_secret().to_string(),
    );

    spawn_purge_sweep(repo.clone(), config.purge_interval_secs);

    let app = create_router(Arc::new(AppState { board }));
    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("binding port {}", config.port))?;
    tracing::info!(port = config.port, "driftboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Deletes stale rows on a fixed cadence so they don't pile up between
/// reads. Reads purge on their own; the sweep only bounds the backlog.
fn spawn_purge_sweep(repo: Arc<SqliteMessageRepo>, interval_secs: u64) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        loop {
            ticker.tick().await;
            if let Err(err) = expiry::purge_expired(repo.as_ref(), Utc::now()).await {
                tracing::warn!(error = %err, "background purge failed");
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}
