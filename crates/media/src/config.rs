use std::path::PathBuf;
use std::sync::Arc;

use crate::cloudinary::{CloudinaryCredentials, CloudinaryStore, DEFAULT_FOLDER};
use crate::error::MediaError;
use crate::local::LocalDiskStore;
use crate::store::MediaStore;

/// Which provider stores uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaBackend {
    Local,
    Cloudinary,
}

impl MediaBackend {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "cloudinary" => MediaBackend::Cloudinary,
            _ => MediaBackend::Local,
        }
    }
}

/// Upload storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub backend: MediaBackend,
    /// Directory the local provider writes to (default: `uploads`).
    pub upload_dir: PathBuf,
    /// URL prefix the local provider's files are served under (default: `/uploads`).
    pub public_prefix: String,
    pub cloudinary_cloud_name: Option<String>,
    pub cloudinary_api_key: Option<String>,
    pub cloudinary_api_secret: Option<String>,
    pub cloudinary_folder: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            backend: MediaBackend::Local,
            upload_dir: PathBuf::from("uploads"),
            public_prefix: "/uploads".into(),
            cloudinary_cloud_name: None,
            cloudinary_api_key: None,
            cloudinary_api_secret: None,
            cloudinary_folder: DEFAULT_FOLDER.into(),
        }
    }
}

impl MediaConfig {
    /// Load media configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default          |
    /// |--------------------------|------------------|
    /// | `MEDIA_BACKEND`          | `local`          |
    /// | `UPLOAD_DIR`             | `uploads`        |
    /// | `PUBLIC_UPLOAD_PREFIX`   | `/uploads`       |
    /// | `CLOUDINARY_CLOUD_NAME`  | --               |
    /// | `CLOUDINARY_API_KEY`     | --               |
    /// | `CLOUDINARY_API_SECRET`  | --               |
    /// | `CLOUDINARY_FOLDER`      | `apnaghar-plots` |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            backend: non_empty("MEDIA_BACKEND")
                .map(|v| MediaBackend::parse(&v))
                .unwrap_or(defaults.backend),
            upload_dir: non_empty("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            public_prefix: non_empty("PUBLIC_UPLOAD_PREFIX").unwrap_or(defaults.public_prefix),
            cloudinary_cloud_name: non_empty("CLOUDINARY_CLOUD_NAME"),
            cloudinary_api_key: non_empty("CLOUDINARY_API_KEY"),
            cloudinary_api_secret: non_empty("CLOUDINARY_API_SECRET"),
            cloudinary_folder: non_empty("CLOUDINARY_FOLDER").unwrap_or(defaults.cloudinary_folder),
        }
    }

    /// Construct the configured provider.
    ///
    /// Selecting `cloudinary` without all three credentials is an error.
    pub fn build_store(&self) -> Result<Arc<dyn MediaStore>, MediaError> {
        match self.backend {
            MediaBackend::Local => Ok(Arc::new(LocalDiskStore::new(
                self.upload_dir.clone(),
                &self.public_prefix,
            ))),
            MediaBackend::Cloudinary => {
                let (Some(cloud_name), Some(api_key), Some(api_secret)) = (
                    self.cloudinary_cloud_name.clone(),
                    self.cloudinary_api_key.clone(),
                    self.cloudinary_api_secret.clone(),
                ) else {
                    return Err(MediaError::NotConfigured(
                        "CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY and CLOUDINARY_API_SECRET \
                         are required when MEDIA_BACKEND=cloudinary"
                            .into(),
                    ));
                };
                let store = CloudinaryStore::new(CloudinaryCredentials {
                    cloud_name,
                    api_key,
                    api_secret,
                    folder: self.cloudinary_folder.clone(),
                })?;
                Ok(Arc::new(store))
            }
        }
    }
}
