//! API Server Application

use anyhow::Result;
use crud_api::{create_router, AppState};
use crud_utils::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let state = AppState::new(config.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    log::info!(
        "🚀 {} starting at http://{} (item description {:?})",
        config.app_name,
        listener.local_addr()?,
        config.item_description
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
