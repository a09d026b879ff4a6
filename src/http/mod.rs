//! HTTP transport - maps the JSON API onto an [`AutoStore`].
//!
//! Requires the `http` feature. Uses axum for routing and tower-http for
//! CORS and request tracing.
//!
//! ## Routes
//!
//! - `GET /health` - `{"status":"ok"}`.
//! - `GET /schema` - field types of a record.
//! - `GET /api/autos` - list with optional filters.
//! - `GET|PUT|DELETE /api/autos/:id` - fetch, partial update, delete.
//! - `POST /api/autos` - create.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use autos_service::{http, InMemoryAutoStore};
//!
//! let store = Arc::new(InMemoryAutoStore::load("./autos.json")?);
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(store.clone());
//!
//! // Or serve directly until Ctrl-C
//! http::serve(store, "0.0.0.0:3000", http::shutdown_signal()).await?;
//! ```

mod error;
mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::store::AutoStore;

pub use error::ApiError;

/// Build an axum `Router` serving the API over the given store.
pub fn router<S: AutoStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/schema", get(handlers::schema))
        .route(
            "/api/autos",
            get(handlers::list_autos::<S>).post(handlers::create_auto::<S>),
        )
        .route(
            "/api/autos/:id",
            get(handlers::get_auto::<S>)
                .put(handlers::update_auto::<S>)
                .delete(handlers::delete_auto::<S>),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serve the API at `addr` (e.g. `"0.0.0.0:3000"`) until `shutdown` resolves.
///
/// In-flight requests are allowed to finish after the shutdown signal.
pub async fn serve<S, F>(store: Arc<S>, addr: &str, shutdown: F) -> Result<(), std::io::Error>
where
    S: AutoStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "autos service listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C (SIGINT).
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        // Without a signal handler the server runs until killed.
        Err(e) => {
            warn!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await
        }
    }
}
