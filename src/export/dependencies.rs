use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use super::capture::capture_to_file;
use super::library::{LibraryConfig, save_to_library};
use super::permission::{DialogPermission, PromptQueue};
use super::share::ClipboardShare;
use super::types::{CaptureOptions, PermissionStatus, Rationale};
use crate::error::{ExportError, ExportResult};
use crate::raster::SketchSnapshot;

/// Turns the current view into an image file.
#[async_trait]
pub trait CaptureProvider: Send + Sync {
    async fn capture(&self, view: &SketchSnapshot) -> ExportResult<PathBuf>;
}

/// Persists an image file into the user's photo library.
#[async_trait]
pub trait PhotoLibrary: Send + Sync {
    async fn save(&self, file: &Path) -> ExportResult<PathBuf>;
}

/// Asks the user for the storage permission.
#[async_trait]
pub trait PermissionProvider: Send + Sync {
    async fn request(&self, rationale: &Rationale) -> ExportResult<PermissionStatus>;
}

/// Hands an image file to a share target.
///
/// The file may be deleted as soon as `open` returns.
#[async_trait]
pub trait ShareProvider: Send + Sync {
    async fn open(&self, file: &Path) -> ExportResult<()>;
}

/// Bundle of providers used by the Save and Share actions. Each one can be
/// mocked in tests.
#[derive(Clone)]
pub struct ExportDependencies {
    pub capture: Arc<dyn CaptureProvider>,
    pub library: Arc<dyn PhotoLibrary>,
    pub permission: Arc<dyn PermissionProvider>,
    pub share: Arc<dyn ShareProvider>,
}

impl ExportDependencies {
    /// Desktop providers: files on disk, a directory album, the rationale
    /// dialog and the clipboard.
    pub fn desktop(capture: CaptureOptions, library: Option<LibraryConfig>, prompts: PromptQueue) -> Self {
        Self {
            capture: Arc::new(FileCapture { options: capture }),
            library: Arc::new(DirectoryLibrary { config: library }),
            permission: Arc::new(DialogPermission::new(prompts)),
            share: Arc::new(ClipboardShare::new()),
        }
    }
}

struct FileCapture {
    options: CaptureOptions,
}

struct DirectoryLibrary {
    config: Option<LibraryConfig>,
}

#[async_trait]
impl CaptureProvider for FileCapture {
    async fn capture(&self, view: &SketchSnapshot) -> ExportResult<PathBuf> {
        capture_to_file(view, &self.options)
    }
}

#[async_trait]
impl PhotoLibrary for DirectoryLibrary {
    async fn save(&self, file: &Path) -> ExportResult<PathBuf> {
        let config = self.config.as_ref().ok_or(ExportError::NoLibraryDirectory)?;
        save_to_library(file, config)
    }
}
