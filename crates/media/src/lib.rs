//! Media uploads: file-type filtering and pluggable storage providers.
//!
//! The API layer classifies each uploaded part with [`filter`], then hands
//! the bytes to whichever [`MediaStore`] was selected at startup.

pub mod cloudinary;
pub mod config;
pub mod error;
pub mod filter;
pub mod local;
pub mod store;

pub use config::{MediaBackend, MediaConfig};
pub use error::MediaError;
pub use filter::{Accept, MediaKind};
pub use store::{store_batch, MediaStore, PendingUpload, StoredMedia};
