//! The storage provider abstraction.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::MediaError;
use crate::filter::MediaKind;

/// Where an uploaded file ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredMedia {
    /// Provider-side identifier (stored file name or CDN public id).
    pub filename: String,
    /// URL the frontend should reference.
    pub url: String,
    pub kind: MediaKind,
    pub size: u64,
}

/// An accepted file waiting to be handed to a [`MediaStore`].
#[derive(Debug, Clone)]
pub struct PendingUpload {
    pub filename: String,
    pub kind: MediaKind,
    pub bytes: Vec<u8>,
}

/// A place to put uploaded files.
///
/// Implementations must be safe to share across request handlers.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist `bytes` and return its public location. `original_name` is only
    /// used for its extension.
    async fn store(
        &self,
        bytes: Vec<u8>,
        original_name: &str,
        kind: MediaKind,
    ) -> Result<StoredMedia, MediaError>;

    /// Delete a file previously returned by [`MediaStore::store`].
    async fn remove(&self, stored: &StoredMedia) -> Result<(), MediaError>;

    /// Short provider name for logs and health output.
    fn name(&self) -> &'static str;
}

/// Store every file in order. If one fails, the files already stored by this
/// call are removed again before the error is returned.
pub async fn store_batch(
    store: &dyn MediaStore,
    files: Vec<PendingUpload>,
) -> Result<Vec<StoredMedia>, MediaError> {
    let mut stored = Vec::with_capacity(files.len());
    for file in files {
        match store.store(file.bytes, &file.filename, file.kind).await {
            Ok(item) => stored.push(item),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    failed = %file.filename,
                    stored = stored.len(),
                    "Upload batch failed, removing files already stored",
                );
                for item in &stored {
                    if let Err(e) = store.remove(item).await {
                        tracing::warn!(
                            filename = %item.filename,
                            url = %item.url,
                            error = %e,
                            "Could not remove orphaned upload",
                        );
                    }
                }
                return Err(err);
            }
        }
    }
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;

    use super::*;
    use crate::local::LocalDiskStore;

    /// Local store that fails the `fail_on`-th call to `store` (zero-based).
    struct FailingStore {
        inner: LocalDiskStore,
        fail_on: usize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MediaStore for FailingStore {
        async fn store(
            &self,
            bytes: Vec<u8>,
            original_name: &str,
            kind: MediaKind,
        ) -> Result<StoredMedia, MediaError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == self.fail_on {
                return Err(MediaError::Provider {
                    status: 503,
                    message: "unavailable".into(),
                });
            }
            self.inner.store(bytes, original_name, kind).await
        }

        async fn remove(&self, stored: &StoredMedia) -> Result<(), MediaError> {
            self.inner.remove(stored).await
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn images(count: usize) -> Vec<PendingUpload> {
        (0..count)
            .map(|i| PendingUpload {
                filename: format!("photo-{i}.jpg"),
                kind: MediaKind::Image,
                bytes: vec![i as u8; 4],
            })
            .collect()
    }

    fn files_in(dir: &std::path::Path) -> usize {
        std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
    }

    #[tokio::test]
    async fn batch_stores_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDiskStore::new(dir.path(), "/uploads");

        let stored = store_batch(&store, images(3)).await.unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(files_in(dir.path()), 3);
    }

    #[tokio::test]
    async fn failed_batch_removes_files_already_stored() {
        let dir = tempfile::tempdir().unwrap();
        let store = FailingStore {
            inner: LocalDiskStore::new(dir.path(), "/uploads"),
            fail_on: 2,
            calls: AtomicUsize::new(0),
        };

        let err = store_batch(&store, images(4)).await.unwrap_err();
        assert_matches!(err, MediaError::Provider { status: 503, .. });
        assert_eq!(store.calls.load(Ordering::SeqCst), 3);
        assert_eq!(files_in(dir.path()), 0);
    }
}
