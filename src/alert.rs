use std::collections::VecDeque;

use crate::export::{PermissionStatus, Rationale, SaveOutcome};

/// A modal message with a single OK button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn image_saved() -> Self {
        Self::new("", "Image saved successfully.")
    }

    pub fn permission_required() -> Self {
        Self::new("", Rationale::STORAGE_MESSAGE)
    }

    /// The alert the user sees after a Save. Failures are only logged.
    pub fn for_save(outcome: &SaveOutcome) -> Option<Self> {
        match outcome {
            SaveOutcome::Saved(_) => Some(Self::image_saved()),
            SaveOutcome::PermissionDenied => Some(Self::permission_required()),
            SaveOutcome::Failed(_) => None,
        }
    }
}

/// Alerts waiting to be acknowledged, oldest first.
#[derive(Debug, Default)]
pub struct AlertQueue {
    queue: VecDeque<Alert>,
}

impl AlertQueue {
    pub fn push(&mut self, alert: Alert) {
        self.queue.push_back(alert);
    }

    pub fn current(&self) -> Option<&Alert> {
        self.queue.front()
    }

    pub fn dismiss(&mut self) -> Option<Alert> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Show `alert` as a modal. Returns true once OK is pressed.
///
/// Clicking outside or pressing Escape does nothing; only OK closes it.
pub fn show_alert(ctx: &egui::Context, alert: &Alert) -> bool {
    egui::Modal::new(egui::Id::new("sketchpad_alert"))
        .show(ctx, |ui| {
            ui.set_max_width(280.0);
            if !alert.title.is_empty() {
                ui.heading(&alert.title);
            }
            ui.label(&alert.message);
            ui.add_space(8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| ui.button("OK").clicked())
                .inner
        })
        .inner
}

/// Show the permission rationale as a modal. Returns the user's answer, if
/// any. Like alerts it can't be dismissed without choosing a button.
pub fn show_rationale(ctx: &egui::Context, rationale: &Rationale) -> Option<PermissionStatus> {
    egui::Modal::new(egui::Id::new("sketchpad_permission"))
        .show(ctx, |ui| {
            ui.set_max_width(280.0);
            ui.heading(&rationale.title);
            ui.label(&rationale.message);
            ui.add_space(8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(&rationale.button_positive).clicked() {
                    Some(PermissionStatus::Granted)
                } else if ui.button(&rationale.button_negative).clicked() {
                    Some(PermissionStatus::Denied)
                } else {
                    None
                }
            })
            .inner
        })
        .inner
}
