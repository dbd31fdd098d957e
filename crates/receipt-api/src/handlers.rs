//! Axum handlers for the receipt endpoints, health and the JSON fallback

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::Uri,
};
use tracing::instrument;

use crate::AppState;
use crate::error::{ApiError, ApiErrorResponse, ApiResult};
use crate::types::{HealthResponse, PointsResponse, ProcessReceiptRequest, ProcessReceiptResponse};

/// Score a receipt and store the result
#[utoipa::path(
    post,
    path = "/receipts/process",
    tag = "receipts",
    request_body = ProcessReceiptRequest,
    responses(
        (status = 200, description = "Receipt scored and stored", body = ProcessReceiptResponse),
        (status = 400, description = "Malformed or incomplete receipt", body = ApiErrorResponse),
        (status = 413, description = "Request body too large", body = ApiErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProcessReceiptRequest>, JsonRejection>,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let Json(request) = payload?;
    let receipt = request.into_receipt()?;
    let id = state.store.submit(&receipt);
    Ok(Json(ProcessReceiptResponse { id }))
}

/// Look up the points awarded to a processed receipt
#[utoipa::path(
    get,
    path = "/receipts/{id}/points",
    tag = "receipts",
    params(("id" = String, Path, description = "Id returned by /receipts/process")),
    responses(
        (status = 200, description = "Points for the receipt", body = PointsResponse),
        (status = 404, description = "No receipt with that id", body = ApiErrorResponse)
    )
)]
#[instrument(skip_all, fields(receipt_id = %id))]
pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    state
        .store
        .lookup(&id)
        .map(|points| Json(PointsResponse { points }))
        .ok_or_else(|| ApiError::not_found(format!("receipt {id}")))
}

/// Service liveness and uptime
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let uptime = Duration::from_secs(state.elapsed().as_secs());
    Json(HealthResponse {
        status: "up".to_string(),
        uptime: humantime::format_duration(uptime).to_string(),
    })
}

pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found(format!("route {}", uri.path()))
}
