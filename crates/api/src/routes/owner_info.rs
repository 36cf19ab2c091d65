//! Route definitions for the `/owner-info` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::owner_info;
use crate::state::AppState;

/// Routes mounted at `/owner-info`.
///
/// ```text
/// GET    /       -> list (?show_all=true)
/// POST   /       -> create (admin)
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(owner_info::list).post(owner_info::create))
        .route(
            "/{id}",
            get(owner_info::get_by_id)
                .put(owner_info::update)
                .delete(owner_info::delete),
        )
}
