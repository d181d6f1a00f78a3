//! Photo library: a directory of saved sketches.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{ExportError, ExportResult};

pub const DEFAULT_FILENAME_TEMPLATE: &str = "sketch_%Y-%m-%d_%H%M%S";

/// Where saved sketches end up.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryConfig {
    pub album_directory: PathBuf,
    /// Filename template (chrono format specifiers).
    pub filename_template: String,
}

impl LibraryConfig {
    /// `<Pictures>/Sketchpad`, if the system has a pictures directory.
    pub fn default_album_directory() -> Option<PathBuf> {
        dirs::picture_dir().map(|dir| dir.join("Sketchpad"))
    }
}

/// Expand the template against the current local time.
pub fn generate_filename(template: &str, extension: &str) -> String {
    let stem = Local::now().format(template).to_string();
    format!("{}.{}", stem, extension)
}

/// Copy `file` into the album directory, returning the new path.
///
/// Names that already exist get a `-1`, `-2`, ... suffix so earlier saves
/// from the same second are kept.
pub fn save_to_library(file: &Path, config: &LibraryConfig) -> ExportResult<PathBuf> {
    if !file.is_file() {
        return Err(ExportError::MissingFile(file.to_path_buf()));
    }
    if !config.album_directory.exists() {
        log::info!("Creating photo library directory: {}", config.album_directory.display());
        fs::create_dir_all(&config.album_directory)?;
    }

    let extension = file
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_else(|| "jpg".to_owned());
    let target = unique_path(
        &config.album_directory,
        &generate_filename(&config.filename_template, &extension),
    );

    let bytes = fs::copy(file, &target)?;
    log::info!("Saved {} bytes to photo library: {}", bytes, target.display());
    Ok(target)
}

fn unique_path(directory: &Path, file_name: &str) -> PathBuf {
    let candidate = directory.join(file_name);
    if !candidate.exists() {
        return candidate;
    }
    let path = Path::new(file_name);
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let extension = path.extension().map(|e| e.to_string_lossy().into_owned());
    (1..)
        .map(|n| match &extension {
            Some(ext) => directory.join(format!("{}-{}.{}", stem, n, ext)),
            None => directory.join(format!("{}-{}", stem, n)),
        })
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &Path) -> LibraryConfig {
        LibraryConfig {
            album_directory: dir.join("album"),
            filename_template: "fixed".to_owned(),
        }
    }

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("sketch_%Y%m%d", "png");
        assert!(filename.starts_with("sketch_20"));
        assert!(filename.ends_with(".png"));
    }

    #[test]
    fn test_save_creates_album_and_keeps_extension() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("capture.jpg");
        fs::write(&source, b"jpeg bytes").unwrap();

        let saved = save_to_library(&source, &config(dir.path())).unwrap();
        assert_eq!(saved, dir.path().join("album").join("fixed.jpg"));
        assert_eq!(fs::read(&saved).unwrap(), b"jpeg bytes");
    }

    #[test]
    fn test_colliding_names_get_a_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("capture.png");
        fs::write(&source, b"png").unwrap();
        let config = config(dir.path());

        let first = save_to_library(&source, &config).unwrap();
        let second = save_to_library(&source, &config).unwrap();
        let third = save_to_library(&source, &config).unwrap();
        assert_eq!(first.file_name().unwrap(), "fixed.png");
        assert_eq!(second.file_name().unwrap(), "fixed-1.png");
        assert_eq!(third.file_name().unwrap(), "fixed-2.png");
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_to_library(&dir.path().join("nope.jpg"), &config(dir.path()));
        assert!(matches!(result, Err(ExportError::MissingFile(_))));
    }
}
