//! Dashboard aggregates over inquiries and plots.

use sqlx::PgPool;

use crate::models::stats::{DashboardStats, InquiryCounts, PlotCounts};

pub struct StatsRepo;

impl StatsRepo {
    pub async fn inquiry_counts(pool: &PgPool) -> Result<InquiryCounts, sqlx::Error> {
        sqlx::query_as::<_, InquiryCounts>(
            "SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'inquired') AS inquired,
                COUNT(*) FILTER (WHERE status = 'in_progress') AS in_progress,
                COUNT(*) FILTER (WHERE status = 'booked') AS booked,
                COUNT(*) FILTER (WHERE status = 'closed') AS closed,
                COUNT(*) FILTER (WHERE status = 'cancelled') AS cancelled
             FROM inquiries",
        )
        .fetch_one(pool)
        .await
    }

    pub async fn plot_counts(pool: &PgPool) -> Result<PlotCounts, sqlx::Error> {
        sqlx::query_as::<_, PlotCounts>(
            "SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'available') AS available,
                COUNT(*) FILTER (WHERE status = 'booked') AS booked,
                COUNT(*) FILTER (WHERE status = 'sold') AS sold
             FROM plots",
        )
        .fetch_one(pool)
        .await
    }

    /// Both count groups for the admin dashboard.
    pub async fn dashboard(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        Ok(DashboardStats {
            inquiries: Self::inquiry_counts(pool).await?,
            plots: Self::plot_counts(pool).await?,
        })
    }
}
