use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;
use thiserror::Error;

use crate::stroke::StrokeRef;

#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("Failed to read background image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Background image {0} has no pixels")]
    Empty(PathBuf),
}

/// Image drawn beneath every stroke.
#[derive(Debug, Clone)]
pub struct Background {
    pixels: Arc<RgbaImage>,
}

impl Background {
    pub fn load(path: &Path) -> Result<Self, BackgroundError> {
        let decoded = image::open(path).map_err(|source| BackgroundError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let pixels = decoded.to_rgba8();
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(BackgroundError::Empty(path.to_path_buf()));
        }
        log::debug!(
            "Loaded background image {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );
        Ok(Self::from_pixels(pixels))
    }

    pub fn from_pixels(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Everything drawn on the sketch canvas.
#[derive(Debug, Default)]
pub struct Document {
    strokes: Vec<StrokeRef>,
    background: Option<Background>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stroke(&mut self, stroke: StrokeRef) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    /// Removes every stroke. The background stays.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn set_background(&mut self, background: Option<Background>) {
        self.background = background;
    }
}
