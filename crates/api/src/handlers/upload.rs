//! Handlers for the admin-only `/upload` endpoints.
//!
//! Every part is checked against the file filters before anything is stored,
//! so a single rejected file fails the whole request. A storage failure part
//! way through removes the files already stored by that request.

use apnaghar_media::filter::{classify, MAX_MEDIA_FILES, MAX_MULTIPLE_IMAGES};
use apnaghar_media::{store_batch, Accept, MediaError, PendingUpload, StoredMedia};
use axum::extract::{Multipart, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/upload/single
///
/// Multipart field `image`, exactly one image.
pub async fn single(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<StoredMedia>>> {
    let files = read_files(multipart, "image", 1, Accept::ImagesOnly).await?;
    let mut stored = store_batch(state.media.as_ref(), files).await?;
    let item = stored.pop().ok_or(AppError::Media(MediaError::NoFile))?;

    tracing::info!(user_id = admin.user_id, url = %item.url, "Image uploaded");
    Ok(Json(
        ApiResponse::data(item).with_message("Image uploaded successfully"),
    ))
}

/// POST /api/upload/multiple
///
/// Multipart field `images`, up to ten images.
pub async fn multiple(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<Vec<StoredMedia>>>> {
    let files = read_files(multipart, "images", MAX_MULTIPLE_IMAGES, Accept::ImagesOnly).await?;
    let stored = store_batch(state.media.as_ref(), files).await?;

    tracing::info!(user_id = admin.user_id, count = stored.len(), "Images uploaded");
    let message = format!("{} images uploaded successfully", stored.len());
    Ok(Json(ApiResponse::list(stored).with_message(message)))
}

/// POST /api/upload/media
///
/// Multipart field `media`, up to twenty images or videos.
pub async fn media(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<Vec<StoredMedia>>>> {
    let files = read_files(multipart, "media", MAX_MEDIA_FILES, Accept::ImagesAndVideos).await?;
    let stored = store_batch(state.media.as_ref(), files).await?;

    tracing::info!(user_id = admin.user_id, count = stored.len(), "Media uploaded");
    let message = format!("{} files uploaded successfully", stored.len());
    Ok(Json(ApiResponse::list(stored).with_message(message)))
}

/// Collect and classify every part named `field_name`. Other parts are ignored.
async fn read_files(
    mut multipart: Multipart,
    field_name: &str,
    max_files: usize,
    accept: Accept,
) -> AppResult<Vec<PendingUpload>> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(field_name) {
            continue;
        }
        if files.len() == max_files {
            return Err(MediaError::TooMany(max_files).into());
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let kind = classify(&filename, content_type.as_deref(), bytes.len() as u64, accept)?;
        files.push(PendingUpload {
            filename,
            kind,
            bytes: bytes.to_vec(),
        });
    }

    if files.is_empty() {
        return Err(MediaError::NoFile.into());
    }
    Ok(files)
}
