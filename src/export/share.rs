//! Share target backed by the system clipboard.

use std::borrow::Cow;
use std::path::Path;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::dependencies::ShareProvider;
use crate::error::{ExportError, ExportResult};

/// Shares an image by placing it on the clipboard.
#[derive(Default)]
pub struct ClipboardShare {
    // The clipboard only serves its contents while this handle lives.
    clipboard: Mutex<Option<arboard::Clipboard>>,
}

impl ClipboardShare {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShareProvider for ClipboardShare {
    async fn open(&self, file: &Path) -> ExportResult<()> {
        if !file.is_file() {
            return Err(ExportError::MissingFile(file.to_path_buf()));
        }
        let pixels = image::open(file)?.to_rgba8();
        let (width, height) = pixels.dimensions();
        let data = arboard::ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Owned(pixels.into_raw()),
        };

        let mut slot = self.clipboard.lock();
        if slot.is_none() {
            *slot = Some(arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?);
        }
        if let Some(clipboard) = slot.as_mut() {
            clipboard
                .set_image(data)
                .map_err(|e| ExportError::Clipboard(e.to_string()))?;
        }
        log::info!("Shared {} to clipboard ({}x{})", file.display(), width, height);
        Ok(())
    }
}
