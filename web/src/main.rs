//! Storyfront web server
//!
//! Server-rendered front-end for a blog backend: fetches posts as JSON from
//! the configured API origin and serves them back as HTML pages. Domain
//! types, the backend adapter, page services and HTTP handlers live in
//! separate layers.

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod view;

#[cfg(test)]
mod test_utils;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::adapters::BackendClient;
use crate::app::PageService;
use crate::config::Config;
use crate::domain::ports::BlogStore;
use crate::view::PageContext;

/// Shared application state
pub struct AppState<S: BlogStore> {
    pub pages: Arc<PageService<S>>,
    pub page_ctx: PageContext,
}

// Manual impl: a derived Clone would require S: Clone.
impl<S: BlogStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            pages: self.pages.clone(),
            page_ctx: self.page_ctx.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router over any blog store implementation; tests plug in an
/// in-memory store here
pub fn build_router<S: BlogStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(handlers::list_blogs::<S>))
        .route("/blog/:id", get(handlers::get_blog::<S>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storyfront_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Storyfront web server...");

    let config = Config::from_env();
    tracing::info!("Blog backend at {}", config.api_base_url);

    let backend = Arc::new(BackendClient::new(config.api_base_url.clone()));
    let pages = Arc::new(PageService::new(backend));
    let page_ctx = PageContext::new(config.api_base_url, config.site_author);

    let app = build_router(AppState { pages, page_ctx });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
