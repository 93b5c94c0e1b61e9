use newsdesk::{AppSettings, AppState};
use newsdesk_core::{init_tracing, NewsdeskConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = NewsdeskConfig::load("dev")?;
    let settings = AppSettings::from_config(&config)?;
    init_tracing(&settings.log_filter);

    let pool = newsdesk_data_sqlx::connect(&settings.database_url, settings.max_connections).await?;
    newsdesk::migrate(&pool).await?;

    let app = newsdesk::app(AppState::new(pool));
    let listener = tokio::net::TcpListener::bind(&settings.addr).await?;
    tracing::info!(addr = %settings.addr, profile = config.profile(), "newsdesk listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("newsdesk stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "could not listen for shutdown signal");
    }
}
