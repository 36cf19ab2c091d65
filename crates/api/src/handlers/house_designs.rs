//! Handlers for the `/house-designs` resource.

use apnaghar_core::error::CoreError;
use apnaghar_core::types::DbId;
use apnaghar_core::validation::validate_input;
use apnaghar_db::models::house_design::{
    CreateHouseDesign, HouseDesignFilter, HouseDesignWithPlot, UpdateHouseDesign,
};
use apnaghar_db::repositories::{HouseDesignRepo, PlotRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/house-designs
///
/// Optional `?plot_id=` filter. Newest first.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<HouseDesignFilter>,
) -> AppResult<Json<ApiResponse<Vec<HouseDesignWithPlot>>>> {
    let designs = HouseDesignRepo::list(&state.pool, &filter).await?;
    Ok(Json(ApiResponse::list(designs)))
}

/// GET /api/house-designs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<HouseDesignWithPlot>>> {
    let design = find_with_plot(&state, id).await?;
    Ok(Json(ApiResponse::data(design)))
}

/// POST /api/house-designs
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateHouseDesign>,
) -> AppResult<(StatusCode, Json<ApiResponse<HouseDesignWithPlot>>)> {
    validate_input(&input)?;
    ensure_plot_exists(&state, input.plot_id).await?;

    let design = HouseDesignRepo::create(&state.pool, &input).await?;
    tracing::info!(
        house_design_id = design.id,
        plot_id = design.plot_id,
        user_id = admin.user_id,
        "House design created",
    );

    let design = find_with_plot(&state, design.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(design).with_message("House design created successfully")),
    ))
}

/// PUT /api/house-designs/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateHouseDesign>,
) -> AppResult<Json<ApiResponse<HouseDesignWithPlot>>> {
    validate_input(&input)?;
    if let Some(plot_id) = input.plot_id {
        ensure_plot_exists(&state, plot_id).await?;
    }

    HouseDesignRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HouseDesign",
            id,
        }))?;
    tracing::info!(house_design_id = id, user_id = admin.user_id, "House design updated");

    let design = find_with_plot(&state, id).await?;
    Ok(Json(
        ApiResponse::data(design).with_message("House design updated successfully"),
    ))
}

/// DELETE /api/house-designs/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    if !HouseDesignRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "HouseDesign",
            id,
        }));
    }
    tracing::info!(house_design_id = id, user_id = admin.user_id, "House design deleted");
    Ok(Json(ApiResponse::message("House design deleted successfully")))
}

async fn find_with_plot(state: &AppState, id: DbId) -> AppResult<HouseDesignWithPlot> {
    HouseDesignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HouseDesign",
            id,
        }))
}

async fn ensure_plot_exists(state: &AppState, plot_id: DbId) -> AppResult<()> {
    if !PlotRepo::exists(&state.pool, plot_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Plot",
            id: plot_id,
        }));
    }
    Ok(())
}
