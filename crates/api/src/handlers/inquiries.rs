//! Handlers for the `/inquiries` resource.
//!
//! Anyone may submit an inquiry; logged-in visitors get it linked to their
//! account. Admins manage the pipeline, and moving an inquiry to `booked` or
//! from `booked` to `closed` updates the plot's status in the same transaction.

use apnaghar_core::error::CoreError;
use apnaghar_core::types::DbId;
use apnaghar_core::validation::validate_input;
use apnaghar_db::models::inquiry::{CreateInquiry, Inquiry, InquiryDetail, UpdateInquiry};
use apnaghar_db::models::stats::DashboardStats;
use apnaghar_db::repositories::{InquiryRepo, PlotRepo, StatsRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/inquiries
///
/// Admins see every inquiry; other users see only their own.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<InquiryDetail>>>> {
    let inquiries = if user.is_admin() {
        InquiryRepo::list_all(&state.pool).await?
    } else {
        InquiryRepo::list_by_user(&state.pool, user.user_id).await?
    };
    Ok(Json(ApiResponse::list(inquiries)))
}

/// GET /api/inquiries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<InquiryDetail>>> {
    let inquiry = InquiryRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;

    if !user.can_access(inquiry.inquiry.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to view this inquiry".into(),
        )));
    }
    Ok(Json(ApiResponse::data(inquiry)))
}

/// POST /api/inquiries
///
/// Public. Name and phone are required and the plot must exist; nothing is
/// stored otherwise.
pub async fn create(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    AppJson(input): AppJson<CreateInquiry>,
) -> AppResult<(StatusCode, Json<ApiResponse<Inquiry>>)> {
    validate_input(&input)?;

    if !PlotRepo::exists(&state.pool, input.plot_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Plot",
            id: input.plot_id,
        }));
    }

    let user_id = user.map(|u| u.user_id);
    let inquiry = InquiryRepo::create(&state.pool, &input, user_id).await?;
    tracing::info!(
        inquiry_id = inquiry.id,
        plot_id = inquiry.plot_id,
        user_id = ?user_id,
        "Inquiry submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(inquiry).with_message("Inquiry submitted successfully")),
    ))
}

/// PUT /api/inquiries/{id}
///
/// Admin only. Applies the update and synchronizes the plot status.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateInquiry>,
) -> AppResult<Json<ApiResponse<InquiryDetail>>> {
    validate_input(&input)?;

    let outcome = InquiryRepo::update_with_plot_sync(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;

    tracing::info!(
        inquiry_id = id,
        plot_id = outcome.inquiry.plot_id,
        user_id = admin.user_id,
        from = %outcome.previous_status,
        to = %outcome.inquiry.status,
        plot_status = ?outcome.plot_status,
        "Inquiry updated",
    );

    let detail = InquiryRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(
        ApiResponse::data(detail).with_message("Inquiry updated successfully"),
    ))
}

/// DELETE /api/inquiries/{id}
///
/// The submitting user or an admin.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let inquiry = InquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;

    if !user.can_access(inquiry.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to delete this inquiry".into(),
        )));
    }

    InquiryRepo::delete(&state.pool, id).await?;
    tracing::info!(inquiry_id = id, user_id = user.user_id, "Inquiry deleted");
    Ok(Json(ApiResponse::message("Inquiry deleted successfully")))
}

/// GET /api/inquiries/stats/dashboard
pub async fn dashboard_stats(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DashboardStats>>> {
    let stats = StatsRepo::dashboard(&state.pool).await?;
    Ok(Json(ApiResponse::data(stats)))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Inquiry",
        id,
    })
}
