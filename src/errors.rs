//! Typed error definitions for tag_rename.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagRenameError {
    #[error("Source path not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Destination already exists, refusing to overwrite: {0}")]
    DestinationExists(PathBuf),

    #[error("Permission denied on {path}: {context}")]
    PermissionDenied { path: PathBuf, context: String },

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Cannot read tags from {path}: {reason}")]
    Metadata { path: PathBuf, reason: String },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl TagRenameError {
    /// Stable numeric code, emitted as a structured log field.
    pub fn code(&self) -> u16 {
        match self {
            TagRenameError::SourceNotFound(_) => 10,
            TagRenameError::DestinationExists(_) => 11,
            TagRenameError::PermissionDenied { .. } => 12,
            TagRenameError::InvalidConfig { .. } => 20,
            TagRenameError::Metadata { .. } => 30,
            TagRenameError::Interrupted => 130,
        }
    }

    /// Short machine-friendly kind label.
    pub fn kind(&self) -> &'static str {
        match self {
            TagRenameError::SourceNotFound(_) => "source_not_found",
            TagRenameError::DestinationExists(_) => "destination_exists",
            TagRenameError::PermissionDenied { .. } => "permission_denied",
            TagRenameError::InvalidConfig { .. } => "invalid_config",
            TagRenameError::Metadata { .. } => "metadata",
            TagRenameError::Interrupted => "interrupted",
        }
    }
}
