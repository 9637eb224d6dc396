// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const TODO_LIST: &str = "/api/todoitems";
pub const TODO_ITEM: &str = "/api/todoitems/{id}";
