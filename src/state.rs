use crate::config::Config;
use crate::store::TodoStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: TodoStore,
    pub config: Arc<Config>,
}
