//! Where export jobs get the pixels they capture.

use std::sync::Arc;

use async_trait::async_trait;
use futures::channel::oneshot;
use parking_lot::Mutex;

use crate::error::{ExportError, ExportResult};
use crate::raster::SketchSnapshot;

/// Source of the view an export captures.
///
/// Asked only once the export is allowed to proceed, so the capture holds
/// whatever was drawn up to that moment.
#[async_trait]
pub trait ViewSource: Send + Sync {
    async fn current_view(&self) -> ExportResult<SketchSnapshot>;
}

/// A fixed snapshot.
#[async_trait]
impl ViewSource for SketchSnapshot {
    async fn current_view(&self) -> ExportResult<SketchSnapshot> {
        Ok(self.clone())
    }
}

/// Snapshot requests from export jobs, answered on the UI thread that owns
/// the canvas.
#[derive(Clone, Default)]
pub struct ViewRequests {
    pending: Arc<Mutex<Vec<oneshot::Sender<SketchSnapshot>>>>,
    repaint: Arc<Mutex<Option<egui::Context>>>,
}

impl ViewRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets new requests wake the UI.
    pub fn attach(&self, ctx: &egui::Context) {
        let mut repaint = self.repaint.lock();
        if repaint.is_none() {
            *repaint = Some(ctx.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }

    /// Answers every waiting request with a snapshot from `snapshot`.
    /// Returns how many were answered.
    pub fn answer_with(&self, mut snapshot: impl FnMut() -> SketchSnapshot) -> usize {
        let waiting: Vec<_> = self.pending.lock().drain(..).collect();
        if waiting.is_empty() {
            return 0;
        }
        let view = snapshot();
        let answered = waiting.len();
        for request in waiting {
            if request.send(view.clone()).is_err() {
                log::debug!("View request dropped before it was answered");
            }
        }
        answered
    }
}

#[async_trait]
impl ViewSource for ViewRequests {
    async fn current_view(&self) -> ExportResult<SketchSnapshot> {
        let (sender, view) = oneshot::channel();
        self.pending.lock().push(sender);
        if let Some(ctx) = self.repaint.lock().as_ref() {
            ctx.request_repaint();
        }
        view.await.map_err(|_| ExportError::ViewUnavailable)
    }
}
