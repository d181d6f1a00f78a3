//! Capture, save and share of the sketch.

pub mod actions;
pub mod capture;
pub mod dependencies;
pub mod jobs;
pub mod library;
pub mod permission;
pub mod share;
pub mod types;
pub mod view;

pub use actions::DrawActions;
pub use dependencies::{CaptureProvider, ExportDependencies, PermissionProvider, PhotoLibrary, ShareProvider};
pub use jobs::{ExportJobs, JobResult};
pub use library::LibraryConfig;
pub use permission::{DialogPermission, PromptQueue};
pub use types::{CaptureFormat, CaptureOptions, PermissionStatus, Rationale, SaveOutcome};
pub use view::{ViewRequests, ViewSource};
