use std::path::PathBuf;

/// Failures of the key-value store backing persisted favorites.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine platform data directory")]
    NoDataDir,
}
