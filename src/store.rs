use anyhow::{anyhow, Result};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::TodoItem;

/// Shareable in-memory todo store for use across async handlers
///
/// All records live behind a single mutex together with the id counter,
/// so every mutation is visible to subsequent reads entirely or not at
/// all. Ids are assigned by the store only, start at 1, and are never
/// reused within the lifetime of a store instance, even after removal.
#[derive(Clone)]
pub struct TodoStore {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    items: BTreeMap<i64, TodoItem>,
    next_id: i64,
}

impl TodoStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                items: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("todo store lock poisoned"))
    }

    /// Insert a new todo item, assigning it a fresh id
    ///
    /// # Returns
    /// The persisted record with its assigned id.
    ///
    /// # Errors
    /// Returns an error if the store is unusable (poisoned lock)
    pub fn insert(&self, name: String, is_complete: bool) -> Result<TodoItem> {
        let mut inner = self.lock()?;

        let id = inner.next_id;
        inner.next_id += 1;

        let item = TodoItem {
            id,
            name,
            is_complete,
        };
        inner.items.insert(id, item.clone());

        tracing::debug!("Inserted todo item with id: {}", id);
        Ok(item)
    }

    /// Look up a todo item by id
    ///
    /// # Returns
    /// * `Ok(Some(item))` - Item found and returned
    /// * `Ok(None)` - No item with this id
    /// * `Err(_)` - Store is unusable
    pub fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>> {
        let inner = self.lock()?;
        Ok(inner.items.get(&id).cloned())
    }

    /// List all todo items in insertion order
    ///
    /// An empty store yields an empty vec, not an error.
    pub fn list_all(&self) -> Result<Vec<TodoItem>> {
        let inner = self.lock()?;
        // Ids are monotonic, so key order is insertion order.
        Ok(inner.items.values().cloned().collect())
    }

    /// Replace the mutable fields of an existing item
    ///
    /// The id itself is never changed.
    ///
    /// # Returns
    /// * `Ok(Some(item))` - Item existed and was replaced
    /// * `Ok(None)` - No item with this id
    pub fn replace(&self, id: i64, name: String, is_complete: bool) -> Result<Option<TodoItem>> {
        let mut inner = self.lock()?;

        match inner.items.get_mut(&id) {
            Some(item) => {
                item.name = name;
                item.is_complete = is_complete;
                tracing::debug!("Replaced todo item with id: {}", id);
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    /// Remove an item by id
    ///
    /// The id is never reissued afterwards.
    ///
    /// # Returns
    /// * `Ok(true)` - Item existed and was removed
    /// * `Ok(false)` - No item with this id
    pub fn remove(&self, id: i64) -> Result<bool> {
        let mut inner = self.lock()?;
        let removed = inner.items.remove(&id).is_some();
        if removed {
            tracing::debug!("Removed todo item with id: {}", id);
        }
        Ok(removed)
    }

    /// Verify the store is usable
    ///
    /// # Errors
    /// Returns an error if the record set cannot be reached
    pub fn health_check(&self) -> Result<()> {
        let _inner = self.lock()?;
        Ok(())
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
