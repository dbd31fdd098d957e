//! OpenAPI document and the interactive docs UI

use utoipa::OpenApi;

use crate::error::ApiErrorResponse;
use crate::handlers;
use crate::types::{
    ApiItem, HealthResponse, PointsResponse, ProcessReceiptRequest, ProcessReceiptResponse,
};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const DOCS_UI_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Receipt Points API",
        description = "Scores purchase receipts and serves the points by receipt id"
    ),
    paths(handlers::process_receipt, handlers::get_points, handlers::health),
    components(schemas(
        ProcessReceiptRequest,
        ApiItem,
        ProcessReceiptResponse,
        PointsResponse,
        HealthResponse,
        ApiErrorResponse
    )),
    tags(
        (name = "receipts", description = "Receipt processing and points lookup"),
        (name = "health", description = "Service liveness")
    )
)]
pub struct ApiDoc;
