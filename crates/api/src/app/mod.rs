//! HTTP application wiring (Axum router + injected state).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::get;
use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use lowstock_catalog::Catalog;
use lowstock_notify::{NotifyError, WebhookClient};

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared per-process state, read-only after startup.
pub struct AppState {
    pub catalog: Catalog,
    pub webhook: WebhookClient,
    pub config: ApiConfig,
}

/// Permissive cross-origin policy: the front end and this API may be served
/// from different origins in the deployment topology.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(config: ApiConfig, catalog: Catalog) -> Result<Router, NotifyError> {
    let webhook = WebhookClient::new(config.webhook_url.clone(), config.webhook_timeout)?;
    let state = Arc::new(AppState {
        catalog,
        webhook,
        config,
    });

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(Extension(state))
                .layer(cors_layer()),
        ))
}
