use serde::{Deserialize, Serialize};

/// A persisted todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

/// Request body for create and update operations
///
/// `id` is accepted but ignored; the store owns the identity sequence.
/// `name` is required (and must not be blank); `isComplete` defaults to
/// false when omitted.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub is_complete: Option<bool>,
}

impl TodoItemRequest {
    /// Validate the request body into the fields the store needs
    ///
    /// Rejects a missing, empty, or whitespace-only name. Surrounding
    /// whitespace in an otherwise non-blank name is preserved as given.
    pub fn validate(self) -> Result<(String, bool), String> {
        if self.id.is_some() {
            tracing::debug!("Ignoring client-supplied id on todo item request");
        }

        match self.name {
            Some(name) if !name.trim().is_empty() => {
                Ok((name, self.is_complete.unwrap_or(false)))
            }
            Some(_) => Err("name must not be empty or whitespace-only".to_string()),
            None => Err("name is required".to_string()),
        }
    }
}
