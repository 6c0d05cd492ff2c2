use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nongtritue::config::{Cli, Config};
use nongtritue::state::AppState;
use nongtritue::{db, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI args and load config
    let cli = Cli::parse();
    let data_dir = Config::data_dir(&cli);
    std::fs::create_dir_all(&data_dir)?;
    tracing::info!("Data directory: {}", data_dir.display());

    let config = Config::load(&cli)?;

    // Initialize database
    let db_path = config.db_path();
    tracing::info!("Database: {}", db_path.display());
    let pool = db::create_pool(&db_path)?;
    db::init_schema(&pool)?;

    let state = AppState::new(pool, config.clone());
    let app = routes::build_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
