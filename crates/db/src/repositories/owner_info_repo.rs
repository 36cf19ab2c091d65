//! Repository for the `owner_info` table.

use apnaghar_core::types::DbId;
use sqlx::PgPool;

use crate::models::owner_info::{CreateOwnerInfo, OwnerInfo, UpdateOwnerInfo};

const COLUMNS: &str = "id, name, name_hi, designation, designation_hi, bio, bio_hi, photo, \
                       display_order, is_active, created_at, updated_at";

/// Provides CRUD operations for owner / team profiles.
pub struct OwnerInfoRepo;

impl OwnerInfoRepo {
    pub async fn create(pool: &PgPool, input: &CreateOwnerInfo) -> Result<OwnerInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO owner_info
                (name, name_hi, designation, designation_hi, bio, bio_hi, photo,
                 display_order, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 0), COALESCE($9, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OwnerInfo>(&query)
            .bind(input.name.trim())
            .bind(&input.name_hi)
            .bind(&input.designation)
            .bind(&input.designation_hi)
            .bind(&input.bio)
            .bind(&input.bio_hi)
            .bind(&input.photo)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OwnerInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owner_info WHERE id = $1");
        sqlx::query_as::<_, OwnerInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List profiles by `display_order`, newest first within the same order.
    ///
    /// Inactive profiles are skipped unless `include_inactive` is set.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<OwnerInfo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM owner_info
             WHERE $1 OR is_active
             ORDER BY display_order ASC, created_at DESC, id DESC"
        );
        sqlx::query_as::<_, OwnerInfo>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a profile. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOwnerInfo,
    ) -> Result<Option<OwnerInfo>, sqlx::Error> {
        let query = format!(
            "UPDATE owner_info SET
                name = COALESCE($2, name),
                name_hi = COALESCE($3, name_hi),
                designation = COALESCE($4, designation),
                designation_hi = COALESCE($5, designation_hi),
                bio = COALESCE($6, bio),
                bio_hi = COALESCE($7, bio_hi),
                photo = COALESCE($8, photo),
                display_order = COALESCE($9, display_order),
                is_active = COALESCE($10, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OwnerInfo>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.name_hi)
            .bind(&input.designation)
            .bind(&input.designation_hi)
            .bind(&input.bio)
            .bind(&input.bio_hi)
            .bind(&input.photo)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a profile. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM owner_info WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
