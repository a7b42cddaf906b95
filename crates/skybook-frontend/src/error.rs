use std::path::PathBuf;

use thiserror::Error;

/// Failures of the local key-value storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {path} is not a JSON object of strings: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors the controller does not handle itself.
///
/// Validation and API failures are shown to the user and never reach this
/// type; what does reach it is reported by the caller's top-level handler.
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("no booking confirmation has been stored yet")]
    NothingPersisted,

    #[error("stored booking confirmation is not valid JSON: {0}")]
    StoredConfirmation(#[source] serde_json::Error),

    #[error("failed to save download {filename}: {source}")]
    Download {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}
