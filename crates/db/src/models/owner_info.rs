//! Owner / team profile model and DTOs. Text fields come in English and
//! Hindi (`*_hi`) variants.

use apnaghar_core::types::{DbId, Timestamp};
use apnaghar_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OwnerInfo {
    pub id: DbId,
    pub name: String,
    pub name_hi: Option<String>,
    pub designation: Option<String>,
    pub designation_hi: Option<String>,
    pub bio: Option<String>,
    pub bio_hi: Option<String>,
    pub photo: Option<String>,
    /// Lower values are shown first.
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOwnerInfo {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    pub name_hi: Option<String>,
    pub designation: Option<String>,
    pub designation_hi: Option<String>,
    pub bio: Option<String>,
    pub bio_hi: Option<String>,
    pub photo: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateOwnerInfo {
    #[validate(custom(function = "not_blank", message = "Name must not be blank"))]
    pub name: Option<String>,
    pub name_hi: Option<String>,
    pub designation: Option<String>,
    pub designation_hi: Option<String>,
    pub bio: Option<String>,
    pub bio_hi: Option<String>,
    pub photo: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
