use crate::error::{ApiError, ErrorResponse};
use crate::models::TodoItemRequest;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// PUT /api/todoitems/:id handler - Replace a todo item
///
/// Whole-record replace of the mutable fields (`name`, `isComplete`).
/// The id in the path is authoritative and never changes; an id in the
/// request body is ignored.
#[utoipa::path(
    put,
    path = routes::TODO_ITEM,
    params(
        ("id" = i64, Path, description = "Id of the todo item")
    ),
    request_body = TodoItemRequest,
    responses(
        (status = 204, description = "Todo item replaced"),
        (status = 400, description = "Non-integer id or invalid name", body = ErrorResponse),
        (status = 404, description = "No todo item with this id"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(request): Json<TodoItemRequest>,
) -> Result<StatusCode, ApiError> {
    let id: i64 = id_str
        .parse()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    let (name, is_complete) = request.validate().map_err(ApiError::InvalidInput)?;

    match state.store.replace(id, name, is_complete)? {
        Some(_) => {
            tracing::info!("Replaced todo item with id: {}", id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(ApiError::ItemNotFound(id)),
    }
}
