pub mod favorites;
pub mod kv;
pub mod repositories;

pub use favorites::{FAVORITES_KEY, FavoritesReader, FavoritesStorage};
pub use kv::{KeyValueStore, MemoryStore, SqliteStore, StoreError};

use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

/// Create a SQLite connection pool, creating the database file if needed.
///
/// In-memory databases (`sqlite::memory:`) are private to a connection, so
/// callers using one should pass `max_connections = 1`.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("invalid database url: {database_url}"))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("failed to connect to database")?;

    Ok(pool)
}

/// Run migrations in this crate's `migrations/` folder.
pub async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    // Run migrations bundled at compile time from `migrations/`
    sqlx::migrate!()
        .run(pool)
        .await
        .context("failed to run storage migrations")?;

    Ok(())
}
