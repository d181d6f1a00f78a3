use std::path::{Path, PathBuf};

use super::dependencies::ExportDependencies;
use super::types::{Rationale, SaveOutcome};
use super::view::ViewSource;
use crate::error::ExportResult;

/// The Save and Share sequences of the draw screen.
#[derive(Clone)]
pub struct DrawActions {
    deps: ExportDependencies,
    permission_required: bool,
}

impl DrawActions {
    pub fn new(deps: ExportDependencies, permission_required: bool) -> Self {
        Self {
            deps,
            permission_required,
        }
    }

    /// Ask for the storage permission. `Ok(false)` means the user refused.
    async fn storage_permission(&self) -> ExportResult<bool> {
        let status = self.deps.permission.request(&Rationale::storage()).await?;
        log::info!("Storage permission answered: {:?}", status);
        Ok(status.is_granted())
    }

    /// Permission (when required), capture, then one library write.
    ///
    /// The view is taken only after permission is granted. Errors are logged
    /// here; only a refused permission is meant to be shown to the user.
    pub async fn save<V>(&self, view: &V) -> SaveOutcome
    where
        V: ViewSource + ?Sized,
    {
        if self.permission_required {
            match self.storage_permission().await {
                Ok(true) => {}
                Ok(false) => return SaveOutcome::PermissionDenied,
                Err(err) => {
                    log::error!("Storage permission request failed: {}", err);
                    return SaveOutcome::Failed(err.to_string());
                }
            }
        }

        let captured = match self.capture(view).await {
            Ok(path) => path,
            Err(err) => {
                log::error!("Capturing the sketch failed: {}", err);
                return SaveOutcome::Failed(err.to_string());
            }
        };
        let outcome = match self.deps.library.save(&captured).await {
            Ok(saved) => {
                log::info!("Sketch saved to {}", saved.display());
                SaveOutcome::Saved(saved)
            }
            Err(err) => {
                log::error!("Writing {} to the photo library failed: {}", captured.display(), err);
                SaveOutcome::Failed(err.to_string())
            }
        };
        if !matches!(&outcome, SaveOutcome::Saved(saved) if *saved == captured) {
            discard_capture(&captured);
        }
        outcome
    }

    /// Capture, then open the share target with the captured file.
    ///
    /// The share target has taken what it needs once `open` returns, so the
    /// captured file is removed afterwards.
    pub async fn share<V>(&self, view: &V) -> ExportResult<()>
    where
        V: ViewSource + ?Sized,
    {
        let captured = self.capture(view).await?;
        let shared = self.deps.share.open(&captured).await;
        discard_capture(&captured);
        shared
    }

    async fn capture<V>(&self, view: &V) -> ExportResult<PathBuf>
    where
        V: ViewSource + ?Sized,
    {
        let snapshot = view.current_view().await?;
        self.deps.capture.capture(&snapshot).await
    }
}

/// Remove a capture once it has been copied or shared.
fn discard_capture(file: &Path) {
    match std::fs::remove_file(file) {
        Ok(()) => log::debug!("Removed capture {}", file.display()),
        Err(err) => log::warn!("Could not remove capture {}: {}", file.display(), err),
    }
}
