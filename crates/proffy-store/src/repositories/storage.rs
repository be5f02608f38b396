use sqlx::{Executor, Sqlite};

pub async fn get_item<'e, E>(executor: E, key: &str) -> Result<Option<String>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar(
        // language=SQLite
        r#"
            SELECT value
            FROM storage
            WHERE key = ?1
        "#,
    )
    .bind(key)
    .fetch_optional(executor)
    .await
}

pub async fn set_item<'e, E>(executor: E, key: &str, value: &str) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO storage (key, value)
            VALUES (?1, ?2)
            ON CONFLICT (key) DO UPDATE SET value = excluded.value
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn remove_item<'e, E>(executor: E, key: &str) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            DELETE FROM storage
            WHERE key = ?1
        "#,
    )
    .bind(key)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}
