//! Route definitions for the `/upload` endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/upload`, all admin only.
///
/// ```text
/// POST /single     -> single   (field `image`)
/// POST /multiple   -> multiple (field `images`)
/// POST /media      -> media    (field `media`)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/single", post(upload::single))
        .route("/multiple", post(upload::multiple))
        .route("/media", post(upload::media))
}
