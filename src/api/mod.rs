//! HTTP binding for the idea store.
//!
//! One [`IdeaStore`] lives behind an async mutex in [`AppState`] and is
//! injected into every handler; the router is a thin verb-to-operation
//! mapping with a permissive CORS layer on top.

mod error;
mod handlers;

pub use error::ApiError;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::get;
use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

use crate::error::Result;
use crate::storage::IdeaStore;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<IdeaStore>>,
    pub started_at: Instant,
    /// When set, 500 responses carry the underlying failure detail.
    pub debug: bool,
}

impl AppState {
    pub fn new(store: IdeaStore, debug: bool) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            started_at: Instant::now(),
            debug,
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/api/health",
            get(handlers::health).fallback(handlers::health_method_not_allowed),
        )
        .route(
            "/api/ideas",
            get(handlers::list_ideas)
                .post(handlers::create_idea)
                .put(handlers::update_missing_id)
                .delete(handlers::delete_missing_id)
                .fallback(handlers::ideas_method_not_allowed),
        )
        .route(
            "/api/ideas/{id}",
            get(handlers::get_idea)
                .put(handlers::update_idea)
                .delete(handlers::delete_idea)
                .fallback(handlers::idea_method_not_allowed),
        )
        .fallback(handlers::endpoint_not_found)
        .layer(cors)
        .with_state(state)
}

/// Serve the API on `addr` until ctrl-c.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Servidor Idea Manager escuchando en http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("no se pudo instalar el manejador de ctrl-c");
    }
}
