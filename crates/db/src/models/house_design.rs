//! House design entity model and DTOs.

use apnaghar_core::types::{DbId, Timestamp};
use apnaghar_core::validation::money_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::plot::PlotSummary;

/// A house design row from the `house_designs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HouseDesign {
    pub id: DbId,
    pub plot_id: DbId,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub estimated_construction_cost: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A house design joined with a summary of the plot it belongs to.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HouseDesignWithPlot {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub design: HouseDesign,
    pub plot: Json<PlotSummary>,
}

/// DTO for creating a new house design.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHouseDesign {
    pub plot_id: DbId,
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[validate(custom(
        function = "money_amount",
        message = "Cost must be between 0 and 9999999999.99"
    ))]
    pub estimated_construction_cost: Decimal,
}

/// DTO for updating an existing house design. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHouseDesign {
    pub plot_id: Option<DbId>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    #[validate(custom(
        function = "money_amount",
        message = "Cost must be between 0 and 9999999999.99"
    ))]
    pub estimated_construction_cost: Option<Decimal>,
}

/// Query parameters for `GET /house-designs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HouseDesignFilter {
    pub plot_id: Option<DbId>,
}
