//! Repository for the `settings` key/value table.

use sqlx::PgPool;

use crate::models::setting::{Setting, UpsertSetting};

const COLUMNS: &str = "id, key, value, description, created_at, updated_at";

/// Provides read and upsert operations for site settings.
pub struct SettingRepo;

impl SettingRepo {
    /// List every setting ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings ORDER BY key");
        sqlx::query_as::<_, Setting>(&query).fetch_all(pool).await
    }

    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE key = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the value for `key`.
    ///
    /// An absent description keeps the stored one.
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        input: &UpsertSetting,
    ) -> Result<Setting, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings (key, value, description)
             VALUES ($1, $2, $3)
             ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                description = COALESCE(EXCLUDED.description, settings.description)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(key)
            .bind(input.value.trim())
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }
}
