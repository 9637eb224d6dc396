use crate::error::{ApiError, ErrorResponse};
use crate::models::TodoItem;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/todoitems handler - List all todo items
///
/// Returns every item in insertion order. An empty store yields an
/// empty array; there is no error path beyond store failure.
#[utoipa::path(
    get,
    path = routes::TODO_LIST,
    responses(
        (status = 200, description = "All todo items", body = [TodoItem]),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<TodoItem>>), ApiError> {
    let items = state.store.list_all()?;

    tracing::info!("Listed {} todo items", items.len());
    Ok((StatusCode::OK, Json(items)))
}
