use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /api/todoitems/:id handler - Remove a todo item
///
/// Deleting an id with no record is 404, matching get; the id is never
/// reissued by the store afterwards.
#[utoipa::path(
    delete,
    path = routes::TODO_ITEM,
    params(
        ("id" = i64, Path, description = "Id of the todo item")
    ),
    responses(
        (status = 204, description = "Todo item removed"),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 404, description = "No todo item with this id"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: i64 = id_str
        .parse()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    if state.store.remove(id)? {
        tracing::info!("Removed todo item with id: {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::ItemNotFound(id))
    }
}
