#![deny(warnings)]
//! Receipt Points HTTP API
//!
//! This crate exposes the score store over HTTP with axum: receipts are
//! posted to `/receipts/process`, and their points are read back from
//! `/receipts/{id}/points`. It also carries the ambient pieces a deployable
//! service needs: configuration, logging, CORS, health and OpenAPI docs.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use receipt_core::ScoreStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod tracing_setup;
pub mod types;

use config::{CorsConfig, ServiceConfig};

/// Shared application state; one per running server
#[derive(Debug)]
pub struct AppState {
    pub start_time: DateTime<Utc>,
    pub store: ScoreStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(ScoreStore::new())
    }

    pub fn with_store(store: ScoreStore) -> Self {
        info!(rules = store.engine().len(), "Initializing application state");
        Self { start_time: Utc::now(), store }
    }

    pub fn elapsed(&self) -> Duration {
        (Utc::now() - self.start_time).to_std().unwrap_or_default()
    }
}

/// Build the application router with a fresh, empty store
pub fn create_app(config: &ServiceConfig) -> anyhow::Result<Router> {
    create_app_with_state(Arc::new(AppState::new()), config)
}

/// Build the application router around existing state
pub fn create_app_with_state(
    state: Arc<AppState>,
    config: &ServiceConfig,
) -> anyhow::Result<Router> {
    let mut app = Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
        .route("/health", get(handlers::health))
        .fallback(handlers::fallback)
        .with_state(state);

    if config.docs.enabled {
        app = app.merge(
            RapiDoc::with_openapi(docs::OPENAPI_JSON_PATH, docs::ApiDoc::openapi())
                .path(docs::DOCS_UI_PATH),
        );
    }

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors)?)
        .layer(DefaultBodyLimit::max(config.limits.max_body_size_kb * 1024));

    Ok(app.layer(middleware))
}

fn cors_layer(cors: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origins = if cors.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins = cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {origin}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
