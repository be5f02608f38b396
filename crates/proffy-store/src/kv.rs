//! Key-value persistence in the shape of the mobile app's async storage:
//! string keys mapping to string (JSON) documents.

use std::{
    collections::HashMap,
    future::Future,
    sync::{Mutex, MutexGuard, PoisonError},
};

use sqlx::SqlitePool;
use thiserror::Error;

use crate::repositories::storage;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// String key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when the key is absent.
    fn get_item(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Remove `key`. Returns whether a value was present.
    fn remove_item(&self, key: &str) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

/// Storage backed by the `storage` table of a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Wrap a pool whose database has been migrated with [`crate::migrate`].
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for SqliteStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(storage::get_item(&self.pool, key).await?)
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        storage::set_item(&self.pool, key, value).await?;
        tracing::debug!(key, "Stored item");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<bool, StoreError> {
        Ok(storage::remove_item(&self.pool, key).await?)
    }
}

/// Process-local storage, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `items`.
    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: Mutex::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn items(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items().get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.items().remove(key).is_some())
    }
}
