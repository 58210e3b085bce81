//! Symbol generation and rasterization.
//!
//! Reed–Solomon coding, module placement and masking all happen inside the
//! `qrcode` crate. This module only picks the version, and turns the finished
//! module grid into pixels: each module becomes a `module_size` square, with a
//! `border`-module quiet zone in the background color around the symbol.

use super::params::QrSettings;
use crate::color::Color;
use crate::error::QrError;
use image::RgbImage;
use qrcode::QrCode;
use qrcode::types::QrError as SymbolError;
use tracing::debug;

/// Encode `data` into a symbol.
///
/// The configured version is tried first. If the payload does not fit and
/// `fit` is set, the smallest version that does fit is used instead.
pub fn encode(data: &str, settings: &QrSettings) -> Result<QrCode, QrError> {
    let bytes = data.as_bytes();
    match QrCode::with_version(bytes, settings.version, settings.ec_level) {
        Ok(code) => Ok(code),
        Err(SymbolError::DataTooLong) if settings.fit => {
            debug!(
                bytes = bytes.len(),
                "payload exceeds {:?}, fitting version",
                settings.version
            );
            Ok(QrCode::with_error_correction_level(
                bytes,
                settings.ec_level,
            )?)
        }
        Err(err) => Err(err.into()),
    }
}

/// Draw `code` with dark modules in `fill` and everything else in `back`.
pub fn render(code: &QrCode, fill: Color, back: Color, settings: &QrSettings) -> RgbImage {
    let modules = code.width() as u32;
    let dark = dark_modules(code);
    let side = settings.image_side(modules);
    let (fill, back) = (fill.to_rgb(), back.to_rgb());

    RgbImage::from_fn(side, side, |x, y| {
        let mx = (x / settings.module_size).checked_sub(settings.border);
        let my = (y / settings.module_size).checked_sub(settings.border);
        match (mx, my) {
            (Some(mx), Some(my)) if mx < modules && my < modules => {
                if dark[(my * modules + mx) as usize] {
                    fill
                } else {
                    back
                }
            }
            _ => back,
        }
    })
}

/// Row-major dark/light grid of the symbol, without quiet zone.
fn dark_modules(code: &QrCode) -> Vec<bool> {
    code.to_colors()
        .into_iter()
        .map(|c| c == qrcode::Color::Dark)
        .collect()
}
