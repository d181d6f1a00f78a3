//! Data types shared by the export pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Answer to a storage permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// Denied, and the user asked not to be prompted again.
    NeverAskAgain,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

/// Explanation shown to the user before a permission is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rationale {
    pub title: String,
    pub message: String,
    pub button_negative: String,
    pub button_positive: String,
}

impl Rationale {
    pub const STORAGE_MESSAGE: &'static str =
        "Your permission is required to save images to your device";

    pub fn storage() -> Self {
        Self {
            title: "Image Download Permission".to_owned(),
            message: Self::STORAGE_MESSAGE.to_owned(),
            button_negative: "Cancel".to_owned(),
            button_positive: "OK".to_owned(),
        }
    }
}

/// Encoding used for captured views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureFormat {
    Jpg,
    Png,
}

impl CaptureFormat {
    pub fn extension(self) -> &'static str {
        match self {
            CaptureFormat::Jpg => "jpg",
            CaptureFormat::Png => "png",
        }
    }
}

/// How a captured view is written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOptions {
    pub format: CaptureFormat,
    /// JPEG quality, 1-100. Ignored for PNG.
    pub quality: u8,
    pub directory: PathBuf,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            format: CaptureFormat::Jpg,
            quality: 90,
            directory: std::env::temp_dir(),
        }
    }
}

/// Result of the Save action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The image was written into the photo library at this path.
    Saved(PathBuf),
    /// The user refused the storage permission.
    PermissionDenied,
    /// Something failed after the user pressed Save. Already logged.
    Failed(String),
}
