use dotenvy::dotenv;
use snickers::app;
use snickers::config::settings::AppConfig;
use snickers::infrastructure::storage;
use snickers::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("snickers=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::new()?;
    info!("Starting server with {:?} storage...", config.storage_backend);

    let storage = storage::connect(&config).await?;
    let addr = format!("0.0.0.0:{}", config.server_port);
    let app = app::create_app(AppState::new(storage));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
