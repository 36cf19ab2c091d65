//! Repository for the `plots` table.

use apnaghar_core::status::PlotStatus;
use apnaghar_core::types::DbId;
use apnaghar_core::validation::blank_to_none;
use sqlx::{PgExecutor, PgPool};

use crate::models::plot::{CreatePlot, Plot, PlotFilter, UpdatePlot};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, plot_number, location, size, price, status, image, images, videos, \
                       description, features, map_url, map_lat, map_lng, show_price, \
                       price_display, contact_phone, contact_email, contact_whatsapp, \
                       created_at, updated_at";

/// Provides CRUD operations for plots.
pub struct PlotRepo;

impl PlotRepo {
    /// Insert a new plot, returning the created row.
    ///
    /// Blank contact overrides are stored as NULL.
    pub async fn create(pool: &PgPool, input: &CreatePlot) -> Result<Plot, sqlx::Error> {
        let query = format!(
            "INSERT INTO plots (plot_number, location, size, price, status, image, images, videos,
                                description, features, map_url, map_lat, map_lng, show_price,
                                price_display, contact_phone, contact_email, contact_whatsapp)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'available'::plot_status), $6, $7, $8,
                     $9, $10, $11, $12, $13, COALESCE($14, TRUE),
                     COALESCE($15, 'exact'::price_display), $16, $17, $18)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plot>(&query)
            .bind(input.plot_number.trim())
            .bind(input.location.trim())
            .bind(input.size.trim())
            .bind(input.price)
            .bind(input.status)
            .bind(&input.image)
            .bind(&input.images)
            .bind(&input.videos)
            .bind(&input.description)
            .bind(&input.features)
            .bind(&input.map_url)
            .bind(input.map_lat)
            .bind(input.map_lng)
            .bind(input.show_price)
            .bind(input.price_display)
            .bind(blank_to_none(input.contact_phone.as_deref()))
            .bind(blank_to_none(input.contact_email.as_deref()))
            .bind(blank_to_none(input.contact_whatsapp.as_deref()))
            .fetch_one(pool)
            .await
    }

    /// Find a plot by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Plot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plots WHERE id = $1");
        sqlx::query_as::<_, Plot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a plot with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM plots WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// List plots matching `filter`, ordered by plot number.
    ///
    /// Every filter field is optional; `None` disables that condition.
    pub async fn list(pool: &PgPool, filter: &PlotFilter) -> Result<Vec<Plot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM plots
             WHERE ($1::plot_status IS NULL OR status = $1)
               AND ($2::text IS NULL OR size = $2)
               AND ($3::text IS NULL OR location ILIKE '%' || $3 || '%')
               AND ($4::numeric IS NULL OR price >= $4)
               AND ($5::numeric IS NULL OR price <= $5)
             ORDER BY plot_number ASC"
        );
        sqlx::query_as::<_, Plot>(&query)
            .bind(filter.status)
            .bind(blank_to_none(filter.size.as_deref()))
            .bind(blank_to_none(filter.location.as_deref()))
            .bind(filter.min_price)
            .bind(filter.max_price)
            .fetch_all(pool)
            .await
    }

    /// Update a plot. Only non-`None` fields in `input` are applied.
    ///
    /// Contact fields present in `input` overwrite the column, with blank
    /// strings clearing it. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlot,
    ) -> Result<Option<Plot>, sqlx::Error> {
        let query = format!(
            "UPDATE plots SET
                plot_number = COALESCE($2, plot_number),
                location = COALESCE($3, location),
                size = COALESCE($4, size),
                price = COALESCE($5, price),
                status = COALESCE($6, status),
                image = COALESCE($7, image),
                images = COALESCE($8, images),
                videos = COALESCE($9, videos),
                description = COALESCE($10, description),
                features = COALESCE($11, features),
                map_url = COALESCE($12, map_url),
                map_lat = COALESCE($13, map_lat),
                map_lng = COALESCE($14, map_lng),
                show_price = COALESCE($15, show_price),
                price_display = COALESCE($16, price_display),
                contact_phone = CASE WHEN $17 THEN $18 ELSE contact_phone END,
                contact_email = CASE WHEN $19 THEN $20 ELSE contact_email END,
                contact_whatsapp = CASE WHEN $21 THEN $22 ELSE contact_whatsapp END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plot>(&query)
            .bind(id)
            .bind(input.plot_number.as_deref().map(str::trim))
            .bind(input.location.as_deref().map(str::trim))
            .bind(input.size.as_deref().map(str::trim))
            .bind(input.price)
            .bind(input.status)
            .bind(&input.image)
            .bind(&input.images)
            .bind(&input.videos)
            .bind(&input.description)
            .bind(&input.features)
            .bind(&input.map_url)
            .bind(input.map_lat)
            .bind(input.map_lng)
            .bind(input.show_price)
            .bind(input.price_display)
            .bind(input.contact_phone.is_some())
            .bind(blank_to_none(input.contact_phone.as_deref()))
            .bind(input.contact_email.is_some())
            .bind(blank_to_none(input.contact_email.as_deref()))
            .bind(input.contact_whatsapp.is_some())
            .bind(blank_to_none(input.contact_whatsapp.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Set a plot's status directly. Returns `true` if a row was updated.
    ///
    /// Takes any executor so the inquiry sync can run it inside its
    /// transaction.
    pub async fn set_status<'e, E>(
        executor: E,
        id: DbId,
        status: PlotStatus,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("UPDATE plots SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a plot. House designs and inquiries cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM plots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
