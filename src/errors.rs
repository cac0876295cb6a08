//! Typed error definitions for asset_copy.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetCopyError {
    #[error("Source file does not exist: {0}")]
    SourceNotFound(PathBuf),

    #[error("Source path is not a regular file: {0}")]
    SourceNotFile(PathBuf),

    #[error("Permission denied on {path}: {context}")]
    PermissionDenied { path: PathBuf, context: String },

    #[error("Could not create destination directory {dir}: {context}")]
    DestDirUncreatable { dir: PathBuf, context: String },
}

impl AssetCopyError {
    /// Stable short code for structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            AssetCopyError::SourceNotFound(_) => "source_not_found",
            AssetCopyError::SourceNotFile(_) => "source_not_file",
            AssetCopyError::PermissionDenied { .. } => "permission_denied",
            AssetCopyError::DestDirUncreatable { .. } => "dest_dir_uncreatable",
        }
    }
}
