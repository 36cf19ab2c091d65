//! Handlers for the `/owner-info` resource.

use apnaghar_core::error::CoreError;
use apnaghar_core::types::DbId;
use apnaghar_core::validation::validate_input;
use apnaghar_db::models::owner_info::{CreateOwnerInfo, OwnerInfo, UpdateOwnerInfo};
use apnaghar_db::repositories::OwnerInfoRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ShowAllParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/owner-info
///
/// Active profiles only unless `?show_all=true`.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ShowAllParams>,
) -> AppResult<Json<ApiResponse<Vec<OwnerInfo>>>> {
    let owners = OwnerInfoRepo::list(&state.pool, params.show_all).await?;
    Ok(Json(ApiResponse::list(owners)))
}

/// GET /api/owner-info/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<OwnerInfo>>> {
    let owner = OwnerInfoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(ApiResponse::data(owner)))
}

/// POST /api/owner-info
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateOwnerInfo>,
) -> AppResult<(StatusCode, Json<ApiResponse<OwnerInfo>>)> {
    validate_input(&input)?;

    let owner = OwnerInfoRepo::create(&state.pool, &input).await?;
    tracing::info!(owner_info_id = owner.id, user_id = admin.user_id, "Owner info created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(owner).with_message("Owner info created successfully")),
    ))
}

/// PUT /api/owner-info/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateOwnerInfo>,
) -> AppResult<Json<ApiResponse<OwnerInfo>>> {
    validate_input(&input)?;

    let owner = OwnerInfoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;
    tracing::info!(owner_info_id = id, user_id = admin.user_id, "Owner info updated");

    Ok(Json(
        ApiResponse::data(owner).with_message("Owner info updated successfully"),
    ))
}

/// DELETE /api/owner-info/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    if !OwnerInfoRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(owner_info_id = id, user_id = admin.user_id, "Owner info deleted");
    Ok(Json(ApiResponse::message("Owner info deleted successfully")))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "OwnerInfo",
        id,
    })
}
