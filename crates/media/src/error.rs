/// Errors raised while accepting or storing an uploaded file.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The extension or MIME type is not accepted by the endpoint.
    #[error("{0}")]
    UnsupportedType(String),

    #[error("File '{filename}' exceeds the {limit_mib} MiB limit")]
    TooLarge { filename: String, limit_mib: u64 },

    #[error("No file uploaded")]
    NoFile,

    #[error("Too many files: at most {0} allowed")]
    TooMany(usize),

    /// The selected provider is missing required settings.
    #[error("Upload service not configured: {0}")]
    NotConfigured(String),

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Upload request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote provider answered with an error status.
    #[error("Upload provider returned HTTP {status}: {message}")]
    Provider { status: u16, message: String },
}

impl MediaError {
    /// Whether the error was caused by the client's input rather than the
    /// server or provider.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MediaError::UnsupportedType(_)
                | MediaError::TooLarge { .. }
                | MediaError::NoFile
                | MediaError::TooMany(_)
        )
    }
}
