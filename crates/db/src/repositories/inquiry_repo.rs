//! Repository for the `inquiries` table, including the inquiry → plot
//! status synchronization.

use apnaghar_core::status::{InquiryStatus, PlotStatus};
use apnaghar_core::status_sync::{plot_effect, resolve_release, PlotEffect};
use apnaghar_core::types::DbId;
use apnaghar_core::validation::blank_to_none;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::inquiry::{
    CreateInquiry, Inquiry, InquiryDetail, InquiryUpdateOutcome, UpdateInquiry,
};
use crate::repositories::PlotRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, plot_id, name, phone, email, message, status, admin_notes, \
                       created_at, updated_at";

/// Inquiry columns qualified for joins, plus plot and user summaries.
const DETAIL_COLUMNS: &str = "i.id, i.user_id, i.plot_id, i.name, i.phone, i.email, i.message, \
     i.status, i.admin_notes, i.created_at, i.updated_at, \
     json_build_object('id', p.id, 'plot_number', p.plot_number, 'location', p.location, \
                       'size', p.size, 'price', p.price, 'status', p.status) AS plot, \
     CASE WHEN u.id IS NULL THEN NULL \
          ELSE json_build_object('id', u.id, 'name', u.name, 'email', u.email, 'phone', u.phone) \
     END AS \"user\"";

const DETAIL_FROM: &str =
    "FROM inquiries i JOIN plots p ON p.id = i.plot_id LEFT JOIN users u ON u.id = i.user_id";

/// Provides CRUD operations for inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert a new inquiry with status `inquired`.
    ///
    /// Name and phone are trimmed; blank email/message are stored as NULL.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInquiry,
        user_id: Option<DbId>,
    ) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries (user_id, plot_id, name, phone, email, message, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(user_id)
            .bind(input.plot_id)
            .bind(input.name.trim())
            .bind(input.phone.trim())
            .bind(blank_to_none(input.email.as_deref()))
            .bind(blank_to_none(input.message.as_deref()))
            .bind(InquiryStatus::Inquired)
            .fetch_one(pool)
            .await
    }

    /// Find a bare inquiry row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries WHERE id = $1");
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an inquiry with its plot and user summaries.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InquiryDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} WHERE i.id = $1");
        sqlx::query_as::<_, InquiryDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every inquiry, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<InquiryDetail>, sqlx::Error> {
        let query =
            format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} ORDER BY i.created_at DESC, i.id DESC");
        sqlx::query_as::<_, InquiryDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the inquiries submitted by one user, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<InquiryDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_FROM}
             WHERE i.user_id = $1
             ORDER BY i.created_at DESC, i.id DESC"
        );
        sqlx::query_as::<_, InquiryDetail>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply an admin update and synchronize the plot's status.
    ///
    /// Runs in one transaction with the inquiry row and its plot row locked
    /// (`FOR UPDATE`, inquiry first, then plot), so two concurrent updates on
    /// inquiries of the same plot cannot both read a stale booked count.
    ///
    /// A blank `email` or `message` clears the stored value; an absent one
    /// leaves it unchanged.
    ///
    /// Returns `None` if no inquiry with the given `id` exists.
    pub async fn update_with_plot_sync(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInquiry,
    ) -> Result<Option<InquiryUpdateOutcome>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let lock_query = format!("SELECT {COLUMNS} FROM inquiries WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, Inquiry>(&lock_query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        sqlx::query("SELECT id FROM plots WHERE id = $1 FOR UPDATE")
            .bind(current.plot_id)
            .execute(&mut *tx)
            .await?;

        let update_query = format!(
            "UPDATE inquiries SET
                status = COALESCE($2, status),
                admin_notes = COALESCE($3, admin_notes),
                name = COALESCE($4, name),
                phone = COALESCE($5, phone),
                email = CASE WHEN $6 THEN $7 ELSE email END,
                message = CASE WHEN $8 THEN $9 ELSE message END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Inquiry>(&update_query)
            .bind(id)
            .bind(input.status)
            .bind(&input.admin_notes)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.phone.as_deref().map(str::trim))
            .bind(input.email.is_some())
            .bind(blank_to_none(input.email.as_deref()))
            .bind(input.message.is_some())
            .bind(blank_to_none(input.message.as_deref()))
            .fetch_one(&mut *tx)
            .await?;

        let plot_status = match plot_effect(current.status, updated.status) {
            PlotEffect::None => None,
            PlotEffect::MarkBooked => Some(PlotStatus::Booked),
            PlotEffect::ReleaseIfUnbooked => {
                let others = count_other_booked(&mut tx, updated.plot_id, updated.id).await?;
                resolve_release(others)
            }
        };

        if let Some(status) = plot_status {
            PlotRepo::set_status(&mut *tx, updated.plot_id, status).await?;
            tracing::debug!(
                inquiry_id = updated.id,
                plot_id = updated.plot_id,
                plot_status = %status,
                "Plot status synchronized from inquiry",
            );
        }

        tx.commit().await?;

        Ok(Some(InquiryUpdateOutcome {
            inquiry: updated,
            previous_status: current.status,
            plot_status,
        }))
    }

    /// Delete an inquiry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Booked inquiries on `plot_id` other than `inquiry_id`, inside `tx`.
async fn count_other_booked(
    tx: &mut Transaction<'_, Postgres>,
    plot_id: DbId,
    inquiry_id: DbId,
) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM inquiries WHERE plot_id = $1 AND status = $2 AND id <> $3",
    )
    .bind(plot_id)
    .bind(InquiryStatus::Booked)
    .bind(inquiry_id)
    .fetch_one(&mut **tx)
    .await?;
    Ok(count)
}
