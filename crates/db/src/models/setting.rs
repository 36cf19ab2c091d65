//! Site settings: a small key/value table read by the frontend at load time.

use apnaghar_core::types::{DbId, Timestamp};
use apnaghar_core::validation::{not_blank, null_as_empty};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Seeded setting keys.
pub const KEY_DEFAULT_LANGUAGE: &str = "default_language";
pub const KEY_DEFAULT_CONTACT_PHONE: &str = "default_contact_phone";
pub const KEY_DEFAULT_CONTACT_EMAIL: &str = "default_contact_email";
pub const KEY_DEFAULT_CONTACT_WHATSAPP: &str = "default_contact_whatsapp";

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub id: DbId,
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `PUT /settings/{key}`. Creates the key if it does not exist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertSetting {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Value is required"))]
    pub value: String,
    pub description: Option<String>,
}
