#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use sketchpad::error::{ExportError, ExportResult};
use sketchpad::export::{
    CaptureProvider, DrawActions, ExportDependencies, PermissionProvider, PermissionStatus, PhotoLibrary,
    Rationale, ShareProvider,
};
use sketchpad::raster::SketchSnapshot;

/// Calls seen by the mock providers, in order.
pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

/// Views handed to the capture provider, in order.
pub type CapturedViews = Arc<Mutex<Vec<SketchSnapshot>>>;

pub struct MockCapture {
    pub log: CallLog,
    pub fail: bool,
    pub views: CapturedViews,
    /// Write a real file here instead of returning a made-up path.
    pub directory: Option<PathBuf>,
}

#[async_trait]
impl CaptureProvider for MockCapture {
    async fn capture(&self, view: &SketchSnapshot) -> ExportResult<PathBuf> {
        self.log.lock().push("capture");
        self.views.lock().push(view.clone());
        if self.fail {
            return Err(ExportError::EmptyCapture);
        }
        match &self.directory {
            Some(directory) => {
                let path = directory.join("captured.jpg");
                std::fs::write(&path, b"jpeg")?;
                Ok(path)
            }
            None => Ok(PathBuf::from("/tmp/captured.jpg")),
        }
    }
}

pub struct MockLibrary {
    pub log: CallLog,
    pub fail: bool,
}

#[async_trait]
impl PhotoLibrary for MockLibrary {
    async fn save(&self, file: &Path) -> ExportResult<PathBuf> {
        self.log.lock().push("library");
        if self.fail {
            Err(ExportError::MissingFile(file.to_path_buf()))
        } else {
            Ok(PathBuf::from("/album/sketch.jpg"))
        }
    }
}

pub struct MockPermission {
    pub log: CallLog,
    pub answer: Option<PermissionStatus>,
}

#[async_trait]
impl PermissionProvider for MockPermission {
    async fn request(&self, _rationale: &Rationale) -> ExportResult<PermissionStatus> {
        self.log.lock().push("permission");
        self.answer.ok_or(ExportError::PermissionAbandoned)
    }
}

pub struct MockShare {
    pub log: CallLog,
    pub fail: bool,
}

#[async_trait]
impl ShareProvider for MockShare {
    async fn open(&self, _file: &Path) -> ExportResult<()> {
        self.log.lock().push("share");
        if self.fail {
            Err(ExportError::Clipboard("no clipboard".to_owned()))
        } else {
            Ok(())
        }
    }
}

/// Builder for mock-backed actions.
#[derive(Clone)]
pub struct Mocks {
    pub log: CallLog,
    pub permission: Option<PermissionStatus>,
    pub permission_required: bool,
    pub capture_fails: bool,
    pub library_fails: bool,
    pub share_fails: bool,
    pub views: CapturedViews,
    pub capture_directory: Option<PathBuf>,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            log: CallLog::default(),
            permission: Some(PermissionStatus::Granted),
            permission_required: false,
            capture_fails: false,
            library_fails: false,
            share_fails: false,
            views: CapturedViews::default(),
            capture_directory: None,
        }
    }
}

impl Mocks {
    pub fn dependencies(&self) -> ExportDependencies {
        ExportDependencies {
            capture: Arc::new(MockCapture {
                log: self.log.clone(),
                fail: self.capture_fails,
                views: self.views.clone(),
                directory: self.capture_directory.clone(),
            }),
            library: Arc::new(MockLibrary {
                log: self.log.clone(),
                fail: self.library_fails,
            }),
            permission: Arc::new(MockPermission {
                log: self.log.clone(),
                answer: self.permission,
            }),
            share: Arc::new(MockShare {
                log: self.log.clone(),
                fail: self.share_fails,
            }),
        }
    }

    pub fn actions(&self) -> DrawActions {
        DrawActions::new(self.dependencies(), self.permission_required)
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.log.lock().clone()
    }

    pub fn captured_views(&self) -> Vec<SketchSnapshot> {
        self.views.lock().clone()
    }
}

pub fn blank_snapshot() -> SketchSnapshot {
    SketchSnapshot::new(image::RgbaImage::new(4, 4))
}
