pub mod handlers;
pub mod types;

use crate::{
    Result, backend::HttpInferenceBackend, config::Config, forwarder::RequestForwarder,
};
use axum::{
    Router,
    routing::{any, get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Routes: `/invoke` takes an event document, `/api/*` proxies raw HTTP
/// requests, `/health` reports liveness.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/invoke", post(handlers::invoke))
        .route("/api/*path", any(handlers::proxy))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let backend = Arc::new(HttpInferenceBackend::new(config.backend.clone()));
    let forwarder = RequestForwarder::new(backend, config.backend.endpoint_name.clone());

    info!(
        "Forwarding to endpoint {} via {}",
        config.backend.endpoint_name, config.backend.base_url
    );

    let app = router(AppState::new(forwarder));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
