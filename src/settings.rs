use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::export::library::DEFAULT_FILENAME_TEMPLATE;
use crate::export::{CaptureFormat, CaptureOptions, LibraryConfig};

/// User-tunable settings, restored from eframe storage between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub pen_width: f32,
    pub eraser_width: f32,
    pub capture_format: CaptureFormat,
    pub capture_quality: u8,
    /// Where captures are written before being saved or shared. Temp dir when unset.
    pub capture_directory: Option<PathBuf>,
    /// Photo library album. `<Pictures>/Sketchpad` when unset.
    pub library_directory: Option<PathBuf>,
    pub filename_template: String,
    pub require_storage_permission: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pen_width: 4.0,
            eraser_width: 24.0,
            capture_format: CaptureFormat::Jpg,
            capture_quality: 90,
            capture_directory: None,
            library_directory: None,
            filename_template: DEFAULT_FILENAME_TEMPLATE.to_owned(),
            require_storage_permission: cfg!(target_os = "android"),
        }
    }
}

impl Settings {
    pub const MIN_WIDTH: f32 = 1.0;
    pub const MAX_WIDTH: f32 = 100.0;

    /// Pull out-of-range values restored from storage back into range.
    pub fn sanitized(mut self) -> Self {
        let defaults = Settings::default();
        if !self.pen_width.is_finite() {
            self.pen_width = defaults.pen_width;
        }
        if !self.eraser_width.is_finite() {
            self.eraser_width = defaults.eraser_width;
        }
        self.pen_width = self.pen_width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH);
        self.eraser_width = self.eraser_width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH);
        self.capture_quality = self.capture_quality.clamp(1, 100);
        if self.filename_template.trim().is_empty() {
            self.filename_template = defaults.filename_template;
        }
        self
    }

    pub fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            format: self.capture_format,
            quality: self.capture_quality,
            directory: self
                .capture_directory
                .clone()
                .unwrap_or_else(std::env::temp_dir),
        }
    }

    pub fn library_config(&self) -> Option<LibraryConfig> {
        let album_directory = self
            .library_directory
            .clone()
            .or_else(LibraryConfig::default_album_directory)?;
        Some(LibraryConfig {
            album_directory,
            filename_template: self.filename_template.clone(),
        })
    }
}
