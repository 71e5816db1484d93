use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use professor_finder::adapters::http::build_router;
use professor_finder::adapters::FileDirectorySource;
use professor_finder::config::AppConfig;
use professor_finder::logging::init_logging;
use professor_finder::ports::DirectorySource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_logging(&config.server);

    let source = FileDirectorySource::new(&config.directory.path);
    let directory = match source.load().await {
        Ok(directory) => directory,
        Err(e) => {
            tracing::error!("Failed to load directory from {}: {}", source.describe(), e);
            return Err(e).context("failed to load professor directory");
        }
    };

    tracing::info!(
        universities = directory.university_count(),
        classes = directory.class_count(),
        professors = directory.professor_count(),
        "Loaded directory from {}",
        source.describe()
    );

    let addr = config.server.socket_addr()?;
    let app = build_router(Arc::new(directory), &config.server);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Professor Finder listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
