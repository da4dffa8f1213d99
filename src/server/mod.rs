pub mod handlers;
pub mod types;

use crate::{
    Result, backend::HttpGenerationClient, config::Config, preview::PreviewHandler,
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // The generation client is constructed once at startup so a bad
    // endpoint or missing credential fails the deploy, not the first user.
    let backend = HttpGenerationClient::new(config.backend.clone())?;
    let handler = PreviewHandler::new(Box::new(backend));

    let app = router(AppState {
        handler: Arc::new(handler),
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the application router. The preview endpoint is called from the
/// marketing site in the browser, hence the CORS layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/preview", post(handlers::generate_preview))
        .route("/healthz", get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
