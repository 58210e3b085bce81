//! QR imaging: symbol generation via `qrcode`, pixels via `image`.
//!
//! | Step | Crate / function |
//! |---|---|
//! | **Encode** | `qrcode::QrCode::with_version`, falling back to `with_error_correction_level` |
//! | **Render** | `image::RgbImage::from_fn`, one square per module |
//!
//! The module is split into:
//! - **Parameters**: [`QrSettings`], the fixed encoder policy
//! - **Symbol**: [`encode`] and [`render`]

mod params;
mod symbol;

pub use params::QrSettings;
pub use symbol::{encode, render};
