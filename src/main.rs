mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    scheduler::session_sweeper,
    service::{activity::ActivityLog, password::PasswordService, token::TokenSigner},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    if config.jwt_secret.is_none() {
        tracing::warn!("JWT_SECRET not set, sessions will not survive a restart");
    }
    let secret = config.signing_secret()?;

    let state = AppState::new(
        db,
        TokenSigner::new(&secret, config.session_ttl),
        PasswordService::new(config.bcrypt_cost),
        ActivityLog::new(),
    );

    let mut sweeper =
        session_sweeper::start_scheduler(state.clone(), config.sweep_interval).await?;

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, server::router::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.shutdown().await?;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
