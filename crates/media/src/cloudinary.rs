//! Cloudinary provider using the signed upload REST API.
//!
//! Each upload is a multipart POST to
//! `https://api.cloudinary.com/v1_1/<cloud>/<image|video>/upload`, signed with
//! SHA-256 over the sorted signed parameters followed by the API secret.
//! Removal uses the sibling `destroy` endpoint, signed the same way.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::MediaError;
use crate::filter::MediaKind;
use crate::store::{MediaStore, StoredMedia};

/// Default folder uploads are grouped under.
pub const DEFAULT_FOLDER: &str = "apnaghar-plots";

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Uploads of large videos can be slow.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct CloudinaryCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
}

pub struct CloudinaryStore {
    client: reqwest::Client,
    credentials: CloudinaryCredentials,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
    bytes: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl CloudinaryStore {
    pub fn new(credentials: CloudinaryCredentials) -> Result<Self, MediaError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            credentials,
        })
    }

    fn upload_url(&self, kind: MediaKind) -> String {
        self.endpoint(kind, "upload")
    }

    fn endpoint(&self, kind: MediaKind, action: &str) -> String {
        format!(
            "{API_BASE}/{}/{}/{action}",
            self.credentials.cloud_name,
            kind.as_str()
        )
    }
}

/// Turn a non-success response into [`MediaError::Provider`].
async fn provider_error(response: reqwest::Response) -> MediaError {
    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error.message,
        Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
    };
    MediaError::Provider {
        status: status.as_u16(),
        message,
    }
}

/// Hex SHA-256 of `folder=<folder>&timestamp=<ts><secret>`.
///
/// Signed parameters are joined in alphabetical order; `file`, `api_key`,
/// `resource_type` and `signature_algorithm` are never signed.
pub fn sign(folder: &str, timestamp: i64, api_secret: &str) -> String {
    digest(&format!("folder={folder}&timestamp={timestamp}{api_secret}"))
}

/// Hex SHA-256 of `public_id=<id>&timestamp=<ts><secret>`.
pub fn sign_destroy(public_id: &str, timestamp: i64, api_secret: &str) -> String {
    digest(&format!("public_id={public_id}&timestamp={timestamp}{api_secret}"))
}

fn digest(payload: &str) -> String {
    let hash = Sha256::digest(payload.as_bytes());
    format!("{hash:x}")
}

#[async_trait]
impl MediaStore for CloudinaryStore {
    async fn store(
        &self,
        bytes: Vec<u8>,
        original_name: &str,
        kind: MediaKind,
    ) -> Result<StoredMedia, MediaError> {
        let timestamp = chrono::Utc::now().timestamp();
        let creds = &self.credentials;
        let signature = sign(&creds.folder, timestamp, &creds.api_secret);
        let size = bytes.len() as u64;

        let file = reqwest::multipart::Part::bytes(bytes).file_name(original_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", file)
            .text("api_key", creds.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("folder", creds.folder.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let response = self
            .client
            .post(self.upload_url(kind))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = provider_error(response).await;
            tracing::error!(error = %err, "Cloudinary upload failed");
            return Err(err);
        }

        let uploaded: UploadResponse = response.json().await?;
        tracing::debug!(public_id = %uploaded.public_id, kind = kind.as_str(), "Uploaded to Cloudinary");

        Ok(StoredMedia {
            filename: uploaded.public_id,
            url: uploaded.secure_url,
            kind,
            size: uploaded.bytes.unwrap_or(size),
        })
    }

    async fn remove(&self, stored: &StoredMedia) -> Result<(), MediaError> {
        let timestamp = chrono::Utc::now().timestamp();
        let creds = &self.credentials;
        let signature = sign_destroy(&stored.filename, timestamp, &creds.api_secret);

        let form = reqwest::multipart::Form::new()
            .text("public_id", stored.filename.clone())
            .text("api_key", creds.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let response = self
            .client
            .post(self.endpoint(stored.kind, "destroy"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        let destroyed: DestroyResponse = response.json().await?;
        tracing::debug!(public_id = %stored.filename, result = %destroyed.result, "Removed from Cloudinary");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "cloudinary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CloudinaryStore {
        CloudinaryStore::new(CloudinaryCredentials {
            cloud_name: "demo".into(),
            api_key: "key".into(),
            api_secret: "secret".into(),
            folder: DEFAULT_FOLDER.into(),
        })
        .unwrap()
    }

    #[test]
    fn signature_is_sha256_hex_of_sorted_params_and_secret() {
        let sig = sign("apnaghar-plots", 1_700_000_000, "secret");
        let expected = Sha256::digest(b"folder=apnaghar-plots&timestamp=1700000000secret");
        assert_eq!(sig, format!("{expected:x}"));
        assert_eq!(sig.len(), 64);
    }

    #[test]
    fn destroy_signature_covers_public_id() {
        let sig = sign_destroy("apnaghar-plots/abc123", 1_700_000_000, "secret");
        let expected =
            Sha256::digest(b"public_id=apnaghar-plots/abc123&timestamp=1700000000secret");
        assert_eq!(sig, format!("{expected:x}"));
    }

    #[test]
    fn signature_changes_with_timestamp() {
        assert_ne!(sign("f", 1, "s"), sign("f", 2, "s"));
    }

    #[test]
    fn upload_url_uses_resource_type() {
        let store = store();
        assert_eq!(
            store.upload_url(MediaKind::Image),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
        assert_eq!(
            store.upload_url(MediaKind::Video),
            "https://api.cloudinary.com/v1_1/demo/video/upload"
        );
        assert_eq!(
            store.endpoint(MediaKind::Video, "destroy"),
            "https://api.cloudinary.com/v1_1/demo/video/destroy"
        );
    }
}
