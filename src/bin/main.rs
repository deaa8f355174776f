use expense_tracker_server::{app::app, config::Config, state::AppState};
use log::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let config = Config::from_env()?;
    let app = app(AppState::in_memory(), config.cors_layer()?);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {} (CORS origins: {:?})", listener.local_addr()?, config.cors_origins);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Could not listen for shutdown signal: {}", e);
    }
}
