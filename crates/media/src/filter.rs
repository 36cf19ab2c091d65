//! Upload acceptance rules: allowed extensions, MIME families, and size
//! limits per media kind.

use serde::Serialize;

use crate::error::MediaError;

/// Maximum image size (10 MiB).
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Maximum video size (100 MiB).
pub const MAX_VIDEO_BYTES: u64 = 100 * 1024 * 1024;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "webp"];
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "wmv", "webm", "mkv"];

/// Files per request on `/upload/multiple`.
pub const MAX_MULTIPLE_IMAGES: usize = 10;

/// Files per request on `/upload/media`.
pub const MAX_MEDIA_FILES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    pub fn max_bytes(self) -> u64 {
        match self {
            MediaKind::Image => MAX_IMAGE_BYTES,
            MediaKind::Video => MAX_VIDEO_BYTES,
        }
    }

    fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => IMAGE_EXTENSIONS,
            MediaKind::Video => VIDEO_EXTENSIONS,
        }
    }
}

/// Which kinds an endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    ImagesOnly,
    ImagesAndVideos,
}

/// Lowercased extension of `filename` without the dot, if any.
pub fn extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Classify an uploaded part and enforce the acceptance rules.
///
/// Both the extension and the MIME family must agree on the kind, and the
/// size must be within that kind's limit.
pub fn classify(
    filename: &str,
    content_type: Option<&str>,
    size: u64,
    accept: Accept,
) -> Result<MediaKind, MediaError> {
    let ext = extension(filename).unwrap_or_default();
    let mime = content_type.unwrap_or_default().to_ascii_lowercase();

    let candidates: &[MediaKind] = match accept {
        Accept::ImagesOnly => &[MediaKind::Image],
        Accept::ImagesAndVideos => &[MediaKind::Image, MediaKind::Video],
    };

    let kind = candidates
        .iter()
        .copied()
        .find(|kind| {
            kind.extensions().contains(&ext.as_str())
                && mime.starts_with(&format!("{}/", kind.as_str()))
        })
        .ok_or_else(|| MediaError::UnsupportedType(unsupported_message(accept)))?;

    if size > kind.max_bytes() {
        return Err(MediaError::TooLarge {
            filename: filename.to_string(),
            limit_mib: kind.max_bytes() / (1024 * 1024),
        });
    }
    Ok(kind)
}

fn unsupported_message(accept: Accept) -> String {
    match accept {
        Accept::ImagesOnly => format!(
            "Only image files are allowed ({})",
            IMAGE_EXTENSIONS.join(", ")
        ),
        Accept::ImagesAndVideos => format!(
            "Only image ({}) and video ({}) files are allowed",
            IMAGE_EXTENSIONS.join(", "),
            VIDEO_EXTENSIONS.join(", ")
        ),
    }
}
