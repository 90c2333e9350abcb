use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use service::customer::Customer;
use tracing::{info, warn};

use crate::errors::ApiError;
use crate::routes::AppState;

/// List every stored customer.
pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    state.customers.list_all().await.map(Json).map_err(ApiError::from)
}

/// Fetch one customer by id; a miss is logged and answered with 404.
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    state.customers.get_by_id(&id).await.map(Json).map_err(|e| {
        info!(%id, "could not find customer");
        ApiError::from(e)
    })
}

/// Store a new customer and answer with its id.
///
/// The body is decoded regardless of `Content-Type`. Any failure, whether
/// malformed JSON or a duplicate id, is reported as 400 `Bad Request`.
pub async fn create_customer(State(state): State<AppState>, body: Bytes) -> Result<Json<String>, ApiError> {
    let customer: Customer = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "cannot decode customer");
        ApiError::BadRequest
    })?;
    info!(id = %customer.id, firstname = %customer.firstname, lastname = %customer.lastname, "new customer");
    state.customers.add(customer).await.map(Json).map_err(|e| {
        warn!(error = %e, "cannot store customer");
        ApiError::BadRequest
    })
}
