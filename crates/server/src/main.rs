use db::DBService;
use server::{AppState, Config};
use services::services::seed;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let db = DBService::new(&config.database_url).await?;
    if seed::seed_if_empty(&db.pool).await? {
        info!("seeded default site content");
    }

    let state = AppState::new(&config, db);
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(port = config.port, "suncore server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
