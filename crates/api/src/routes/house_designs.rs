//! Route definitions for the `/house-designs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::house_designs;
use crate::state::AppState;

/// Routes mounted at `/house-designs`.
///
/// ```text
/// GET    /       -> list (?plot_id=)
/// POST   /       -> create (admin)
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(house_designs::list).post(house_designs::create))
        .route(
            "/{id}",
            get(house_designs::get_by_id)
                .put(house_designs::update)
                .delete(house_designs::delete),
        )
}
