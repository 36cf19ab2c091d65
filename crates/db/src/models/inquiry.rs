//! Inquiry (customer lead) model and DTOs.

use apnaghar_core::status::{InquiryStatus, PlotStatus};
use apnaghar_core::types::{DbId, Timestamp};
use apnaghar_core::validation::{not_blank, null_as_empty};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::plot::PlotSummary;
use crate::models::user::UserSummary;

/// An inquiry row from the `inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inquiry {
    pub id: DbId,
    /// Set only when the visitor was logged in while submitting.
    pub user_id: Option<DbId>,
    pub plot_id: DbId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub message: Option<String>,
    pub status: InquiryStatus,
    pub admin_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An inquiry joined with its plot and (optional) submitting user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InquiryDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub inquiry: Inquiry,
    pub plot: Json<PlotSummary>,
    pub user: Option<Json<UserSummary>>,
}

/// Public inquiry form submission.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInquiry {
    pub plot_id: DbId,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Phone is required"))]
    pub phone: String,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Admin update of an inquiry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInquiry {
    pub status: Option<InquiryStatus>,
    pub admin_notes: Option<String>,
    #[validate(custom(function = "not_blank", message = "Name must not be blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "not_blank", message = "Phone must not be blank"))]
    pub phone: Option<String>,
    /// `""` clears the stored email.
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Result of an inquiry update, including any plot status change it caused.
#[derive(Debug, Clone)]
pub struct InquiryUpdateOutcome {
    pub inquiry: Inquiry,
    pub previous_status: InquiryStatus,
    /// The status the plot was moved to, if the update touched the plot.
    pub plot_status: Option<PlotStatus>,
}
