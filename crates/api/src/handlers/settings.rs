//! Handlers for the `/settings` key/value resource.

use std::collections::BTreeMap;

use apnaghar_core::error::CoreError;
use apnaghar_core::validation::validate_input;
use apnaghar_db::models::setting::{Setting, UpsertSetting};
use apnaghar_db::repositories::SettingRepo;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// A single setting as exposed to clients.
#[derive(Debug, Serialize)]
pub struct SettingValue {
    pub key: String,
    pub value: String,
}

/// GET /api/settings
///
/// All settings as a `{ key: value }` map.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<BTreeMap<String, String>>>> {
    let settings = SettingRepo::list(&state.pool).await?;
    let map = settings.into_iter().map(|s| (s.key, s.value)).collect();
    Ok(Json(ApiResponse::data(map)))
}

/// GET /api/settings/{key}
pub async fn get_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<ApiResponse<SettingValue>>> {
    let setting = SettingRepo::find_by_key(&state.pool, &key)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundByKey {
            entity: "Setting",
            key,
        }))?;
    Ok(Json(ApiResponse::data(SettingValue {
        key: setting.key,
        value: setting.value,
    })))
}

/// PUT /api/settings/{key}
///
/// Creates the key if it does not exist.
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(key): Path<String>,
    AppJson(input): AppJson<UpsertSetting>,
) -> AppResult<Json<ApiResponse<Setting>>> {
    validate_input(&input)?;

    let setting = SettingRepo::upsert(&state.pool, &key, &input).await?;
    tracing::info!(key = %setting.key, user_id = admin.user_id, "Setting updated");

    Ok(Json(
        ApiResponse::data(setting).with_message("Setting updated successfully"),
    ))
}
