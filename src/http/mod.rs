//! HTTP server: router construction and the serve loop.
//!
//! Endpoints:
//!   GET    /api/tasks
//!   POST   /api/tasks
//!   PUT    /api/tasks/{id}
//!   DELETE /api/tasks/{id}
//!   POST   /api/tasks/{id}/toggle
//!   GET    /                (task board page)
//!   GET    /static/*        (assets from the configured directory)

pub mod routes;

use crate::error::Result;
use crate::tasks::TaskStore;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router.
///
/// The `/toggle` sub-resource gets its own route entry, so it is matched by
/// the router table and never confused with a numeric-ID path.
pub fn build_router(store: Arc<TaskStore>, static_dir: PathBuf) -> Router {
    Router::new()
        .route(
            "/api/tasks",
            get(routes::tasks::list).post(routes::tasks::create),
        )
        .route(
            "/api/tasks/{id}",
            put(routes::tasks::replace).delete(routes::tasks::delete),
        )
        .route("/api/tasks/{id}/toggle", post(routes::tasks::toggle))
        .route("/", get(routes::assets::home))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Bind `host:port` and serve requests until the process exits.
///
/// # Errors
///
/// Returns an error if the address cannot be resolved or bound.
pub async fn serve(
    host: &str,
    port: u16,
    store: Arc<TaskStore>,
    static_dir: PathBuf,
) -> Result<()> {
    let router = build_router(store, static_dir);
    let listener = bind(host, port).await?;

    info!("task board listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}

/// Bind a listener, accepting hostnames as well as IP literals.
async fn bind(host: &str, port: u16) -> Result<tokio::net::TcpListener> {
    Ok(tokio::net::TcpListener::bind((host, port)).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_accepts_hostnames() {
        let listener = bind("localhost", 0).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_accepts_ip_literals() {
        let listener = bind("127.0.0.1", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
