//! Filesystem side of a run: making sure the output directory exists, and
//! writing the rendered image into it.
//!
//! The image format comes from the filename extension:
//!
//! | Extension | Format |
//! |---|---|
//! | `.png` | PNG |
//! | `.jpg`, `.jpeg` | JPEG |
//! | `.tif`, `.tiff` | TIFF |
//! | `.webp` | WebP (lossless) |
//!
//! Anything else, including no extension, is rejected before any bytes are
//! written. An existing file at the target path is overwritten.

use crate::error::QrError;
use crate::types::OutputTarget;
use image::{ImageError, ImageFormat, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Create `directory` and any missing ancestors. Already existing is fine.
pub fn ensure_output_directory(directory: &Path) -> Result<(), QrError> {
    fs::create_dir_all(directory).map_err(|e| QrError::filesystem(directory, e))?;
    info!("Directory '{}' is ready.", directory.display());
    Ok(())
}

/// Pick the encoder for `path` from its extension.
pub fn output_format(path: &Path) -> Result<ImageFormat, QrError> {
    let unsupported = |reason: String| QrError::UnsupportedFormat {
        path: path.to_path_buf(),
        reason,
    };
    let format = ImageFormat::from_path(path).map_err(|e| unsupported(e.to_string()))?;
    if !format.writing_enabled() {
        return Err(unsupported(format!("no {format:?} encoder available")));
    }
    Ok(format)
}

/// Write `image` to `target`, returning the full path written.
pub fn write_image(image: &RgbImage, target: &OutputTarget) -> Result<PathBuf, QrError> {
    let path = target.path();
    let format = output_format(&path)?;
    image
        .save_with_format(&path, format)
        .map_err(|e| match e {
            ImageError::IoError(io) => QrError::filesystem(&path, io),
            other => QrError::UnsupportedFormat {
                path: path.clone(),
                reason: other.to_string(),
            },
        })?;
    info!("QR code saved at: {}", path.display());
    Ok(path)
}
