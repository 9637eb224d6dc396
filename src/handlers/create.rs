use crate::error::{ApiError, ErrorResponse};
use crate::models::{TodoItem, TodoItemRequest};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    Json,
};

/// POST /api/todoitems handler - Create a todo item
///
/// The store assigns the id; any id in the request body is ignored.
/// Responds 201 with the persisted record and a Location header
/// pointing at the new resource.
#[utoipa::path(
    post,
    path = routes::TODO_LIST,
    request_body = TodoItemRequest,
    responses(
        (status = 201, description = "Todo item created", body = TodoItem,
            headers(("Location" = String, description = "URL of the created todo item"))),
        (status = 400, description = "Missing or blank name", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(request): Json<TodoItemRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<TodoItem>), ApiError> {
    let (name, is_complete) = request.validate().map_err(ApiError::InvalidInput)?;

    let item = state.store.insert(name, is_complete)?;

    tracing::info!("Created todo item with id: {}", item.id);
    let location = format!("{}/{}", routes::TODO_LIST, item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    ))
}
