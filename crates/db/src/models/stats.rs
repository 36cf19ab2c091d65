//! Aggregates for the admin dashboard.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct InquiryCounts {
    pub total: i64,
    pub inquired: i64,
    pub in_progress: i64,
    pub booked: i64,
    pub closed: i64,
    pub cancelled: i64,
}

#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct PlotCounts {
    pub total: i64,
    pub available: i64,
    pub booked: i64,
    pub sold: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    pub inquiries: InquiryCounts,
    pub plots: PlotCounts,
}
