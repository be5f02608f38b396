use std::future::Future;

use proffy_core::{Teacher, decode_favorites};

use crate::kv::KeyValueStore;

/// Storage key holding the JSON array of favorite teachers.
pub const FAVORITES_KEY: &str = "favorites";

/// Read access to persisted teacher records.
///
/// Reads never fail: a missing key, a storage error or an undecodable
/// document all come back as `None`.
pub trait FavoritesReader: Send + Sync {
    fn read(&self, key: &str) -> impl Future<Output = Option<Vec<Teacher>>> + Send;
}

/// [`FavoritesReader`] over any [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct FavoritesStorage<S> {
    store: S,
}

impl<S: KeyValueStore> FavoritesStorage<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying key-value store
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> FavoritesReader for FavoritesStorage<S> {
    async fn read(&self, key: &str) -> Option<Vec<Teacher>> {
        let raw = match self.store.get_item(key).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read persisted teachers, treating as empty");
                return None;
            }
        };

        let Some(raw) = raw else {
            tracing::debug!(key, "No persisted teachers");
            return None;
        };

        let teachers = decode_favorites(Some(raw.as_str()));
        if teachers.is_none() {
            tracing::warn!(key, "Persisted teachers could not be decoded, treating as empty");
        }
        teachers
    }
}
