//! Export work running off the UI thread.

use std::future::Future;

use futures::channel::oneshot;

use super::types::SaveOutcome;
use crate::error::ExportResult;

/// What a finished export job produced.
#[derive(Debug)]
pub enum JobResult {
    Save(SaveOutcome),
    Share(ExportResult<()>),
}

struct Job {
    label: &'static str,
    result: oneshot::Receiver<JobResult>,
}

/// In-flight export jobs. Any number may run at once.
#[derive(Default)]
pub struct ExportJobs {
    running: Vec<Job>,
}

impl ExportJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work` to completion on its own thread. The UI is woken through
    /// `ctx` when the result is ready.
    pub fn spawn<F>(&mut self, label: &'static str, ctx: Option<egui::Context>, work: F)
    where
        F: Future<Output = JobResult> + Send + 'static,
    {
        let (sender, result) = oneshot::channel();
        let spawned = std::thread::Builder::new()
            .name(format!("export-{}", label))
            .spawn(move || {
                let outcome = futures::executor::block_on(work);
                if sender.send(outcome).is_err() {
                    log::debug!("Export job {} finished after its screen went away", label);
                }
                if let Some(ctx) = ctx {
                    ctx.request_repaint();
                }
            });

        match spawned {
            Ok(_) => self.running.push(Job { label, result }),
            Err(err) => log::error!("Failed to start export job {}: {}", label, err),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.running.len()
    }

    /// Collect the results of jobs that have finished since the last call.
    pub fn poll(&mut self) -> Vec<JobResult> {
        let mut finished = Vec::new();
        self.running.retain_mut(|job| match job.result.try_recv() {
            Ok(Some(result)) => {
                finished.push(result);
                false
            }
            Ok(None) => true,
            Err(_) => {
                log::error!("Export job {} ended without a result", job.label);
                false
            }
        });
        finished
    }
}
