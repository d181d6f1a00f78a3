//! Storage permission prompts answered through the draw screen.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use futures::channel::oneshot;
use parking_lot::Mutex;

use super::dependencies::PermissionProvider;
use super::types::{PermissionStatus, Rationale};
use crate::error::{ExportError, ExportResult};

/// A permission request waiting for the user.
pub struct PendingPrompt {
    rationale: Rationale,
    responder: oneshot::Sender<PermissionStatus>,
}

impl PendingPrompt {
    pub fn rationale(&self) -> &Rationale {
        &self.rationale
    }
}

/// Requests shared between export jobs and the UI thread that shows them.
#[derive(Clone, Default)]
pub struct PromptQueue {
    pending: Arc<Mutex<VecDeque<PendingPrompt>>>,
    repaint: Arc<Mutex<Option<egui::Context>>>,
}

impl PromptQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets queued prompts wake the UI.
    pub fn attach(&self, ctx: &egui::Context) {
        let mut repaint = self.repaint.lock();
        if repaint.is_none() {
            *repaint = Some(ctx.clone());
        }
    }

    fn push(&self, prompt: PendingPrompt) {
        self.pending.lock().push_back(prompt);
        if let Some(ctx) = self.repaint.lock().as_ref() {
            ctx.request_repaint();
        }
    }

    /// The rationale of the oldest unanswered prompt.
    pub fn current(&self) -> Option<Rationale> {
        self.pending.lock().front().map(|p| p.rationale().clone())
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }

    /// Answers the oldest prompt. Returns `false` when nothing was pending.
    pub fn respond(&self, status: PermissionStatus) -> bool {
        let Some(prompt) = self.pending.lock().pop_front() else {
            return false;
        };
        if prompt.responder.send(status).is_err() {
            log::warn!("Permission answer arrived after the request was dropped");
        }
        true
    }
}

/// Asks the user through the rationale dialog of the draw screen.
pub struct DialogPermission {
    prompts: PromptQueue,
}

impl DialogPermission {
    pub fn new(prompts: PromptQueue) -> Self {
        Self { prompts }
    }
}

#[async_trait]
impl PermissionProvider for DialogPermission {
    async fn request(&self, rationale: &Rationale) -> ExportResult<PermissionStatus> {
        let (responder, answer) = oneshot::channel();
        self.prompts.push(PendingPrompt {
            rationale: rationale.clone(),
            responder,
        });
        answer.await.map_err(|_| ExportError::PermissionAbandoned)
    }
}
