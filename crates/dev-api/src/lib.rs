//! Firewall Console Development Backend
//!
//! Layered architecture:
//! - domain: errors and naming rules
//! - repository: catalog abstraction and the in-memory implementation
//! - handlers: axum handlers for the `/api/` endpoints

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use log::info;
use tower_http::services::ServeDir;

pub mod config;
pub mod domain;
pub mod handlers;
pub mod repository;

#[cfg(test)]
mod tests;

use repository::Catalog;

/// API routes, plus the built console as static files when `dist` is set
pub fn app(catalog: Arc<dyn Catalog>, dist: Option<PathBuf>) -> Router {
    let router = handlers::router(catalog);
    match dist {
        Some(dist) => {
            info!("serving console from {}", dist.display());
            router.fallback_service(ServeDir::new(dist))
        }
        None => router,
    }
}

/// Bind `addr` and serve until the process stops
pub async fn serve(addr: SocketAddr, app: Router) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}
