use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Absence of an item is a normal branch of the contract, not an
/// exceptional condition: it maps to 404 with an empty body. Invalid
/// input maps to 400 with a JSON error body, and storage failures
/// surface as 500 without local recovery.
#[derive(Debug)]
pub enum ApiError {
    /// Non-integer id in path parameter
    InvalidId(String),
    /// No todo item exists at this id
    ItemNotFound(i64),
    /// Missing or blank required field
    InvalidInput(String),
    /// Underlying store failure
    StorageError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidId(raw) => json_error(
                StatusCode::BAD_REQUEST,
                format!("Invalid id: expected an integer, got '{}'", raw),
            ),
            ApiError::ItemNotFound(id) => {
                tracing::debug!("Todo item not found with id: {}", id);
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::InvalidInput(msg) => {
                json_error(StatusCode::BAD_REQUEST, format!("Invalid input: {}", msg))
            }
            ApiError::StorageError(err) => {
                tracing::error!("Store error: {:#}", err);
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Store error: {}", err),
                )
            }
        }
    }
}

fn json_error(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StorageError(err)
    }
}
