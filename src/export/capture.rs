//! Writing the current canvas view to an image file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::ImageFormat;
use image::codecs::jpeg::JpegEncoder;
use uuid::Uuid;

use super::types::{CaptureFormat, CaptureOptions};
use crate::error::{ExportError, ExportResult};
use crate::raster::SketchSnapshot;

/// Encode `snapshot` into a new uniquely named file under the capture directory.
pub fn capture_to_file(snapshot: &SketchSnapshot, options: &CaptureOptions) -> ExportResult<PathBuf> {
    if snapshot.width() == 0 || snapshot.height() == 0 {
        return Err(ExportError::EmptyCapture);
    }
    std::fs::create_dir_all(&options.directory)?;

    let file_name = format!("sketch-{}.{}", Uuid::new_v4(), options.format.extension());
    let path = options.directory.join(file_name);
    write_image(snapshot, options, &path)?;

    log::debug!(
        "Captured {}x{} view to {}",
        snapshot.width(),
        snapshot.height(),
        path.display()
    );
    Ok(path)
}

fn write_image(snapshot: &SketchSnapshot, options: &CaptureOptions, path: &Path) -> ExportResult<()> {
    match options.format {
        CaptureFormat::Jpg => {
            // JPEG has no alpha channel.
            let rgb = image::DynamicImage::ImageRgba8(snapshot.pixels().clone()).to_rgb8();
            let mut writer = BufWriter::new(File::create(path)?);
            let quality = options.quality.clamp(1, 100);
            JpegEncoder::new_with_quality(&mut writer, quality).encode_image(&rgb)?;
            writer.flush()?;
        }
        CaptureFormat::Png => {
            snapshot.pixels().save_with_format(path, ImageFormat::Png)?;
        }
    }
    Ok(())
}
