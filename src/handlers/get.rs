use crate::error::{ApiError, ErrorResponse};
use crate::models::TodoItem;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /api/todoitems/:id handler - Retrieve a single todo item
///
/// Absence is a normal outcome of this operation: a never-issued id
/// returns 404 with an empty body, not an error payload.
#[utoipa::path(
    get,
    path = routes::TODO_ITEM,
    params(
        ("id" = i64, Path, description = "Id of the todo item")
    ),
    responses(
        (status = 200, description = "Todo item found", body = TodoItem),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 404, description = "No todo item with this id"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<TodoItem>), ApiError> {
    let id: i64 = id_str
        .parse()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    match state.store.find_by_id(id)? {
        Some(item) => {
            tracing::info!("Retrieved todo item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => Err(ApiError::ItemNotFound(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::handlers::create_handler;
    use crate::store::TodoStore;
    use axum::{
        body::Body,
        http::Request,
        routing::{get, post},
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        let config = Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };

        let state = AppState {
            store: TodoStore::new(),
            config: Arc::new(config),
        };

        Router::new()
            .route(crate::routes::TODO_LIST, post(create_handler))
            .route(crate::routes::TODO_ITEM, get(get_handler))
            .with_state(state)
    }

    async fn create_item(app: &Router, body: &str) -> TodoItem {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/todoitems")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_get_endpoint_success() {
        let app = setup_test_app();

        let created = create_item(&app, r#"{"name": "existing item", "isComplete": true}"#).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/todoitems/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: TodoItem = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.id, created.id);
        assert_eq!(response_json.name, "existing item");
        assert!(response_json.is_complete);
    }

    #[tokio::test]
    async fn test_get_endpoint_not_found_empty_body() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/todoitems/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_get_endpoint_invalid_id() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/todoitems/not-a-number")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("Invalid id"));
    }

    #[tokio::test]
    async fn test_get_endpoint_unicode_round_trip() {
        let app = setup_test_app();

        let created = create_item(&app, r#"{"name": "測試項目", "isComplete": false}"#).await;
        assert!(created.id > 0);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/todoitems/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: TodoItem = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.name, "測試項目");
        assert!(!response_json.is_complete);
    }
}
