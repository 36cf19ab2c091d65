use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
    /// Active upload provider (`local` or `cloudinary`).
    pub media_backend: &'static str,
}

/// Banner returned from `GET /`.
#[derive(Serialize)]
pub struct BannerResponse {
    pub success: bool,
    pub message: &'static str,
    pub version: &'static str,
}

/// GET /health -- returns service and database health.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = apnaghar_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        success: true,
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        media_backend: state.media.name(),
    })
}

/// GET /
pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        success: true,
        message: "ApnaGhar Plots API",
        version: env!("CARGO_PKG_VERSION"),
    })
}
