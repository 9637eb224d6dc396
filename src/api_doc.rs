use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{TodoItem, TodoItemRequest};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "todo-api",
        version = "1.0.0",
        description = "A minimal todo item CRUD service"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            TodoItem,
            TodoItemRequest,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "todos", description = "Todo item operations")
    )
)]
pub struct ApiDoc;
