use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing the backing document.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed item document: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Storage task failed: {0}")]
    Task(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the document simply does not exist yet.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Item '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
