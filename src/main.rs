mod model;
mod server;

use std::net::SocketAddr;

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::setup_logging();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::check_for_admin(&db, &config).await?;

    let http_client = startup::setup_reqwest_client()?;
    let recognizer = startup::setup_plate_recognizer(&config, http_client);

    let state = AppState::new(db, config.auth.clone(), recognizer);
    let app = startup::build_app(&config, state)?;

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
