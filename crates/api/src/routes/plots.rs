//! Route definitions for the `/plots` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::plots;
use crate::state::AppState;

/// Routes mounted at `/plots`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (admin)
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plots::list).post(plots::create))
        .route(
            "/{id}",
            get(plots::get_by_id)
                .put(plots::update)
                .delete(plots::delete),
        )
}
