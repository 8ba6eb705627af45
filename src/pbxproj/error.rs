//! Error types for section completion

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while inspecting or patching a project file
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot insert {section} section: anchor {anchor:?} not found")]
    AnchorNotFound { section: String, anchor: String },
}

impl PatchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for section completion
pub type PatchResult<T> = Result<T, PatchError>;
