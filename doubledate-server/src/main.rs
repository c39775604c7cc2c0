use std::sync::Arc;

use doubledate_server::{config::ServerConfig, router, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "doubledate_server=debug,tower_http=debug".to_string()),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = Arc::new(AppState::new(&config));

    if state.auth.is_disabled() {
        tracing::warn!("ADMIN_CODE is not set: admin endpoints are UNPROTECTED (dev mode)");
    }

    let app = router(state);

    tracing::info!("Starting double date server on {}", config.bind_address);

    let listener = match tokio::net::TcpListener::bind(&config.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%e, addr = %config.bind_address, "Failed to bind");
            return;
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(%e, addr = %config.bind_address);
    }
}
