//! Handlers for the `/plots` resource.
//!
//! Reads are public; writes require the admin role. Every plot in a response
//! carries a `price_label` rendered according to its display preferences.

use apnaghar_core::error::CoreError;
use apnaghar_core::language::Language;
use apnaghar_core::price::display_price;
use apnaghar_core::types::DbId;
use apnaghar_core::validation::validate_input;
use apnaghar_db::models::plot::{CreatePlot, Plot, PlotFilter, UpdatePlot};
use apnaghar_db::repositories::PlotRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::query::LangParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// A plot as returned by the API.
#[derive(Debug, Serialize)]
pub struct PlotView {
    #[serde(flatten)]
    pub plot: Plot,
    /// Visitor-facing price text (`₹25,00,000`, `₹xx00000`, or the
    /// "contact for price" string).
    pub price_label: String,
}

impl PlotView {
    pub fn new(plot: Plot, lang: Language) -> Self {
        let price_label = display_price(plot.price, plot.price_display, plot.show_price, lang);
        Self { plot, price_label }
    }
}

/// GET /api/plots
///
/// Optional filters: `status`, `size`, `location`, `min_price`, `max_price`.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<PlotFilter>,
    AppQuery(lang): AppQuery<LangParams>,
) -> AppResult<Json<ApiResponse<Vec<PlotView>>>> {
    let lang = lang.language();
    let plots = PlotRepo::list(&state.pool, &filter).await?;
    let views = plots.into_iter().map(|p| PlotView::new(p, lang)).collect();
    Ok(Json(ApiResponse::list(views)))
}

/// GET /api/plots/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppQuery(lang): AppQuery<LangParams>,
) -> AppResult<Json<ApiResponse<PlotView>>> {
    let plot = PlotRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Plot", id }))?;
    Ok(Json(ApiResponse::data(PlotView::new(plot, lang.language()))))
}

/// POST /api/plots
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePlot>,
) -> AppResult<(StatusCode, Json<ApiResponse<PlotView>>)> {
    validate_input(&input)?;

    let plot = PlotRepo::create(&state.pool, &input).await?;
    tracing::info!(plot_id = plot.id, user_id = admin.user_id, "Plot created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(PlotView::new(plot, Language::default()))
            .with_message("Plot created successfully")),
    ))
}

/// PUT /api/plots/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdatePlot>,
) -> AppResult<Json<ApiResponse<PlotView>>> {
    validate_input(&input)?;

    let plot = PlotRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Plot", id }))?;
    tracing::info!(plot_id = id, user_id = admin.user_id, "Plot updated");

    Ok(Json(
        ApiResponse::data(PlotView::new(plot, Language::default()))
            .with_message("Plot updated successfully"),
    ))
}

/// DELETE /api/plots/{id}
///
/// House designs and inquiries for the plot are removed with it.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    if !PlotRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Plot", id }));
    }
    tracing::info!(plot_id = id, user_id = admin.user_id, "Plot deleted");
    Ok(Json(ApiResponse::message("Plot deleted successfully")))
}
