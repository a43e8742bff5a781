use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pricing artifact not found at {}; run `pricing-sync` to fetch it", .0.display())]
    MissingArtifact(PathBuf),

    #[error("invalid pricing artifact at {}: {reason}", path.display())]
    InvalidArtifact { path: PathBuf, reason: String },
}

/// Coarse classification used to pick an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Io,
    Verify,
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Api { .. } | Self::Json(_) => ErrorKind::Fetch,
            Self::Io { .. } => ErrorKind::Io,
            Self::MissingArtifact(_) | Self::InvalidArtifact { .. } => ErrorKind::Verify,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
