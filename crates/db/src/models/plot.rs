//! Plot entity model and DTOs.

use apnaghar_core::status::{PlotStatus, PriceDisplay};
use apnaghar_core::types::{DbId, Timestamp};
use apnaghar_core::validation::{latitude, longitude, money_amount, not_blank};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A plot row from the `plots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Plot {
    pub id: DbId,
    pub plot_number: String,
    pub location: String,
    pub size: String,
    pub price: Decimal,
    pub status: PlotStatus,
    /// Primary image shown on listing cards.
    pub image: Option<String>,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub map_url: Option<String>,
    pub map_lat: Option<Decimal>,
    pub map_lng: Option<Decimal>,
    pub show_price: bool,
    pub price_display: PriceDisplay,
    /// Per-plot contact overrides; `None` falls back to the site defaults.
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub contact_whatsapp: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Compact plot reference embedded in house-design and inquiry payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotSummary {
    pub id: DbId,
    pub plot_number: String,
    pub location: String,
    pub size: Option<String>,
    pub price: Option<Decimal>,
    pub status: Option<PlotStatus>,
}

/// DTO for creating a new plot.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlot {
    #[validate(custom(function = "not_blank", message = "Plot number is required"))]
    pub plot_number: String,
    #[validate(custom(function = "not_blank", message = "Location is required"))]
    pub location: String,
    #[validate(custom(function = "not_blank", message = "Size is required"))]
    pub size: String,
    #[validate(custom(
        function = "money_amount",
        message = "Price must be between 0 and 9999999999.99"
    ))]
    pub price: Decimal,
    pub status: Option<PlotStatus>,
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub map_url: Option<String>,
    #[validate(custom(function = "latitude", message = "Latitude must be between -90 and 90"))]
    pub map_lat: Option<Decimal>,
    #[validate(custom(function = "longitude", message = "Longitude must be between -180 and 180"))]
    pub map_lng: Option<Decimal>,
    pub show_price: Option<bool>,
    pub price_display: Option<PriceDisplay>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub contact_whatsapp: Option<String>,
}

/// DTO for updating an existing plot. All fields are optional.
///
/// Contact fields are special: sending a blank string clears the override,
/// omitting the field leaves it unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePlot {
    #[validate(custom(function = "not_blank", message = "Plot number must not be blank"))]
    pub plot_number: Option<String>,
    #[validate(custom(function = "not_blank", message = "Location must not be blank"))]
    pub location: Option<String>,
    #[validate(custom(function = "not_blank", message = "Size must not be blank"))]
    pub size: Option<String>,
    #[validate(custom(
        function = "money_amount",
        message = "Price must be between 0 and 9999999999.99"
    ))]
    pub price: Option<Decimal>,
    pub status: Option<PlotStatus>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub videos: Option<Vec<String>>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub map_url: Option<String>,
    #[validate(custom(function = "latitude", message = "Latitude must be between -90 and 90"))]
    pub map_lat: Option<Decimal>,
    #[validate(custom(function = "longitude", message = "Longitude must be between -180 and 180"))]
    pub map_lng: Option<Decimal>,
    pub show_price: Option<bool>,
    pub price_display: Option<PriceDisplay>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub contact_whatsapp: Option<String>,
}

/// Listing filters (`GET /plots?status=&size=&location=&min_price=&max_price=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlotFilter {
    pub status: Option<PlotStatus>,
    /// Exact match on the free-text size (e.g. `"1200 sq ft"`).
    pub size: Option<String>,
    /// Case-insensitive substring match.
    pub location: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}
