use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use api::{AppState, config::ServerConfig, repositories::UserRepository, routes};
use common::database::{self, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting user directory service");

    // Initialize database connection pool (lazy: no connection yet)
    let db_config = DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config)?;

    // Check database connectivity once; keep listening either way
    match database::health_check(&pool).await {
        Ok(_) => info!("Connected to database"),
        Err(e) => warn!("Database unreachable at startup, continuing: {}", e),
    }

    let user_repository = UserRepository::new(pool.clone());

    let app_state = AppState {
        db_pool: pool.clone(),
        user_repository,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let server_config = ServerConfig::from_env()?;
    let addr = server_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    info!("User directory service listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("User directory service shut down");

    Ok(())
}

/// Resolve when the process receives SIGINT
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
