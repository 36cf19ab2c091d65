//! Repository for the `house_designs` table.

use apnaghar_core::types::DbId;
use sqlx::PgPool;

use crate::models::house_design::{
    CreateHouseDesign, HouseDesign, HouseDesignFilter, HouseDesignWithPlot, UpdateHouseDesign,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, plot_id, image, images, estimated_construction_cost, created_at, updated_at";

/// Same columns, qualified for joins against `plots`, plus the plot summary.
const JOINED_COLUMNS: &str = "h.id, h.plot_id, h.image, h.images, h.estimated_construction_cost, \
     h.created_at, h.updated_at, \
     json_build_object('id', p.id, 'plot_number', p.plot_number, 'location', p.location) AS plot";

/// Provides CRUD operations for house designs.
pub struct HouseDesignRepo;

impl HouseDesignRepo {
    /// Insert a new house design, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateHouseDesign,
    ) -> Result<HouseDesign, sqlx::Error> {
        let query = format!(
            "INSERT INTO house_designs (plot_id, image, images, estimated_construction_cost)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HouseDesign>(&query)
            .bind(input.plot_id)
            .bind(&input.image)
            .bind(&input.images)
            .bind(input.estimated_construction_cost)
            .fetch_one(pool)
            .await
    }

    /// Find a house design with its plot summary.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<HouseDesignWithPlot>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM house_designs h JOIN plots p ON p.id = h.plot_id
             WHERE h.id = $1"
        );
        sqlx::query_as::<_, HouseDesignWithPlot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List house designs newest first, optionally restricted to one plot.
    pub async fn list(
        pool: &PgPool,
        filter: &HouseDesignFilter,
    ) -> Result<Vec<HouseDesignWithPlot>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM house_designs h JOIN plots p ON p.id = h.plot_id
             WHERE ($1::bigint IS NULL OR h.plot_id = $1)
             ORDER BY h.created_at DESC, h.id DESC"
        );
        sqlx::query_as::<_, HouseDesignWithPlot>(&query)
            .bind(filter.plot_id)
            .fetch_all(pool)
            .await
    }

    /// Update a house design. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHouseDesign,
    ) -> Result<Option<HouseDesign>, sqlx::Error> {
        let query = format!(
            "UPDATE house_designs SET
                plot_id = COALESCE($2, plot_id),
                image = COALESCE($3, image),
                images = COALESCE($4, images),
                estimated_construction_cost = COALESCE($5, estimated_construction_cost)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HouseDesign>(&query)
            .bind(id)
            .bind(input.plot_id)
            .bind(&input.image)
            .bind(&input.images)
            .bind(input.estimated_construction_cost)
            .fetch_optional(pool)
            .await
    }

    /// Delete a house design. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM house_designs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
