//! Route definitions for the `/inquiries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::inquiries;
use crate::state::AppState;

/// Routes mounted at `/inquiries`.
///
/// ```text
/// GET    /                  -> list (auth)
/// POST   /                  -> create (public)
/// GET    /stats/dashboard   -> dashboard_stats (admin)
/// GET    /{id}              -> get_by_id (owner or admin)
/// PUT    /{id}              -> update (admin)
/// DELETE /{id}              -> delete (owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inquiries::list).post(inquiries::create))
        .route("/stats/dashboard", get(inquiries::dashboard_stats))
        .route(
            "/{id}",
            get(inquiries::get_by_id)
                .put(inquiries::update)
                .delete(inquiries::delete),
        )
}
