//! Error handling for the receipt API
//!
//! The core never fails, so every error here originates at the HTTP boundary:
//! a request body that is not a valid receipt, or an id nobody issued.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use utoipa::ToSchema;

/// API error type with automatic HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    /// Validation errors (400 Bad Request)
    #[error("Validation error: {message}")]
    Validation { message: String, field: Option<String>, details: Option<serde_json::Value> },

    /// Request body exceeds the configured limit (413 Payload Too Large)
    #[error("Payload too large: {message}")]
    PayloadTooLarge { message: String },

    /// Resource not found (404 Not Found)
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            ApiError::NotFound { .. } => "NOT_FOUND",
        }
    }

    pub fn to_response(&self) -> ApiErrorResponse {
        let mut details = serde_json::Map::new();

        if let ApiError::Validation { field, details: extra_details, .. } = self {
            if let Some(field) = field {
                details.insert("field".to_string(), serde_json::Value::String(field.clone()));
            }
            if let Some(extra) = extra_details {
                details.insert("validation_details".to_string(), extra.clone());
            }
        }

        ApiErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: if details.is_empty() {
                None
            } else {
                Some(serde_json::Value::Object(details))
            },
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into(), field: None, details: None }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }
}

/// JSON-serializable error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error code
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Validation error: Missing required receipt fields: retailer")]
    pub message: String,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        debug!(status = status.as_u16(), error = %self, "Request rejected");
        (status, Json(self.to_response())).into_response()
    }
}

/// Every body the JSON extractor refuses is a client error. Oversized bodies
/// keep their 413; everything else (bad syntax, wrong field types, missing
/// content type) is reported as a 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge { message: rejection.body_text() };
        }
        ApiError::validation(format!("Invalid receipt payload: {}", rejection.body_text()))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
