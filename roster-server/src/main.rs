use clap::Parser;
use roster_server::{config::ServerConfig, router, AppState, ServerResult};
use std::sync::Arc;

#[tokio::main]
async fn main() -> ServerResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=debug,roster_core=debug,tower_http=debug".into()
            }),
        )
        .init();

    let config = ServerConfig::parse();

    let app_state = Arc::new(AppState::new());
    let app = router(app_state);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%e, %addr, "Failed to bind");
            return Err(e.into());
        }
    };

    tracing::info!("Server listening on http://localhost:{}", config.port);
    tracing::info!("Available endpoints:");
    tracing::info!("  - GET  /users  - List all users");
    tracing::info!("  - POST /users  - Create a new user");

    axum::serve(listener, app).await?;

    Ok(())
}
