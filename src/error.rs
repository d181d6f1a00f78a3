use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while capturing, saving or sharing a sketch
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Captured view is empty")]
    EmptyCapture,

    #[error("No photo library directory is available on this system")]
    NoLibraryDirectory,

    #[error("Captured file {0} does not exist")]
    MissingFile(PathBuf),

    #[error("Permission request was abandoned before an answer was given")]
    PermissionAbandoned,

    #[error("The canvas went away before its view could be captured")]
    ViewUnavailable,

    #[error("Clipboard operation failed: {0}")]
    Clipboard(String),
}

pub type ExportResult<T> = Result<T, ExportError>;
