//! Local-disk provider: writes under an upload directory served statically
//! by the API at a public prefix (e.g. `/uploads`).

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::MediaError;
use crate::filter::{extension, MediaKind};
use crate::store::{MediaStore, StoredMedia};

pub struct LocalDiskStore {
    root: PathBuf,
    public_prefix: String,
}

impl LocalDiskStore {
    /// `public_prefix` is joined with the stored file name to form the URL;
    /// a trailing slash is optional.
    pub fn new(root: impl Into<PathBuf>, public_prefix: &str) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<uuid>.<ext>`, or a bare UUID when the original had no extension.
    fn unique_name(original_name: &str) -> String {
        let id = uuid::Uuid::new_v4();
        match extension(original_name) {
            Some(ext) => format!("{id}.{ext}"),
            None => id.to_string(),
        }
    }
}

#[async_trait]
impl MediaStore for LocalDiskStore {
    async fn store(
        &self,
        bytes: Vec<u8>,
        original_name: &str,
        kind: MediaKind,
    ) -> Result<StoredMedia, MediaError> {
        tokio::fs::create_dir_all(&self.root).await?;

        let filename = Self::unique_name(original_name);
        let size = bytes.len() as u64;
        tokio::fs::write(self.root.join(&filename), &bytes).await?;

        tracing::debug!(filename = %filename, size, kind = kind.as_str(), "Stored upload on disk");

        Ok(StoredMedia {
            url: format!("{}/{filename}", self.public_prefix),
            filename,
            kind,
            size,
        })
    }

    async fn remove(&self, stored: &StoredMedia) -> Result<(), MediaError> {
        match tokio::fs::remove_file(self.root.join(&stored.filename)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_file_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDiskStore::new(dir.path().join("uploads"), "/uploads/");

        let stored = store
            .store(b"fake-png".to_vec(), "front.PNG", MediaKind::Image)
            .await
            .unwrap();

        assert!(stored.filename.ends_with(".png"));
        assert_eq!(stored.url, format!("/uploads/{}", stored.filename));
        assert_eq!(stored.size, 8);
        assert_eq!(stored.kind, MediaKind::Image);

        let on_disk = tokio::fs::read(store.root().join(&stored.filename)).await.unwrap();
        assert_eq!(on_disk, b"fake-png");
    }

    #[tokio::test]
    async fn remove_deletes_the_file_and_tolerates_missing_ones() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDiskStore::new(dir.path(), "/uploads");

        let stored = store.store(vec![1, 2], "a.jpg", MediaKind::Image).await.unwrap();
        store.remove(&stored).await.unwrap();
        assert!(!store.root().join(&stored.filename).exists());

        store.remove(&stored).await.unwrap();
    }

    #[tokio::test]
    async fn names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDiskStore::new(dir.path(), "/uploads");

        let a = store.store(vec![1], "a.jpg", MediaKind::Image).await.unwrap();
        let b = store.store(vec![2], "a.jpg", MediaKind::Image).await.unwrap();
        assert_ne!(a.filename, b.filename);
    }
}
