mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler, update_handler,
};
use state::AppState;
use store::TodoStore;

fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::TODO_LIST, get(list_handler).post(create_handler))
        .route(
            routes::TODO_ITEM,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("todo-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = AppState {
        store: TodoStore::new(),
        config: Arc::new(config.clone()),
    };

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
