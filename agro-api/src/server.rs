//! API Server setup

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use agro_db::Database;

use crate::auth::TokenIssuer;
use crate::routes::create_router;
use crate::state::{ApiConfig, AppState};

/// Create the API server router and bind address
pub fn create_server(
    config: &ApiConfig,
    db: Arc<Database>,
) -> Result<(Router, SocketAddr), Box<dyn std::error::Error + Send + Sync>> {
    let tokens = TokenIssuer::new(config.jwt_secret.clone(), config.token_expiry_seconds);
    let state = AppState::new(db, tokens);

    let mut router = create_router(state);
    router = router.layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    Ok((router, addr))
}

/// Run the API server until the process exits
pub async fn run_server(
    config: &ApiConfig,
    db: Arc<Database>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (router, addr) = create_server(config, db)?;

    tracing::info!("AgroOptima API server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Start the server in the background and return its actual address
/// (useful when the configured port is 0)
pub async fn start_background_server(
    config: &ApiConfig,
    db: Arc<Database>,
) -> Result<SocketAddr, Box<dyn std::error::Error + Send + Sync>> {
    let (router, addr) = create_server(config, db)?;

    let listener = TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("server error: {}", e);
        }
    });

    Ok(actual_addr)
}
