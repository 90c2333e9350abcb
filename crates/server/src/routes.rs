use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use common::types::Health;
use service::store::CustomerStore;

pub mod customers;

/// Shared handler state; the store is injected here rather than held globally.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerStore>,
}

impl AppState {
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        Self { customers }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the application router with request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/customers", get(customers::list_customers).post(customers::create_customer))
        .route("/customers/:id", get(customers::get_customer))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
