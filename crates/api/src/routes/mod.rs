pub mod auth;
pub mod health;
pub mod house_designs;
pub mod inquiries;
pub mod owner_info;
pub mod plots;
pub mod settings;
pub mod upload;

use axum::extract::DefaultBodyLimit;
use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/me                             current user (requires auth)
///
/// /plots                               list (public), create (admin)
/// /plots/{id}                          get (public), update, delete (admin)
///
/// /house-designs                       list (public), create (admin)
/// /house-designs/{id}                  get (public), update, delete (admin)
///
/// /inquiries                           list (auth), create (public)
/// /inquiries/{id}                      get, delete (owner or admin), update (admin)
/// /inquiries/stats/dashboard           dashboard counts (admin)
///
/// /owner-info                          list (public), create (admin)
/// /owner-info/{id}                     get (public), update, delete (admin)
///
/// /settings                            key/value map (public)
/// /settings/{key}                      get (public), upsert (admin)
///
/// /upload/single                       one image (admin)
/// /upload/multiple                     up to 10 images (admin)
/// /upload/media                        up to 20 images/videos (admin)
/// ```
///
/// The upload routes carry their own, larger body limit.
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/plots", plots::router())
        .nest("/house-designs", house_designs::router())
        .nest("/inquiries", inquiries::router())
        .nest("/owner-info", owner_info::router())
        .nest("/settings", settings::router())
        .nest(
            "/upload",
            upload::router().layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}
