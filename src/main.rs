use anyhow::Context;

use ucsb_api_rust::{config, database, handlers, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting UCSB API in {:?} mode", config.environment);

    let pool = database::connect().await.context("database connection")?;
    database::migrate(&pool).await.context("database migration")?;

    let app = handlers::app(AppState::postgres(pool));

    // Allow tests or deployments to override port via env
    let port = std::env::var("UCSB_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    println!("🚀 UCSB API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
