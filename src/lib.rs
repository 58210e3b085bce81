//! # url-qr
//!
//! Encode a URL into a QR code image file.
//!
//! # Pipeline
//!
//! A run is a single straight line, and the first failure ends it:
//!
//! ```text
//! 1. Resolve    flags / env / defaults  →  EffectiveConfig
//! 2. Validate   URL well-formedness
//! 3. Prepare    create the output directory
//! 4. Name       default filename → qr_<timestamp>.png
//! 5. Encode     qrcode symbol → RGB image
//! 6. Write      image file, format from extension
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Flag > env > default resolution, env-file loading, `.env` template |
//! | [`validate`] | URL well-formedness check |
//! | [`naming`] | Default-filename timestamping |
//! | [`color`] | CSS color parsing (`csscolorparser`) |
//! | [`imaging`] | Symbol encoding (`qrcode`) and rasterization |
//! | [`output`] | Directory creation and image writing |
//! | [`generate`] | The pipeline, plus the side-effect-free [`generate::plan`] |
//! | [`report`] | CLI output for `check` |
//! | [`error`] | [`QrError`], the failure taxonomy |
//! | [`types`] | [`types::OutputTarget`] |
//!
//! # Design Decisions
//!
//! ## Symbol Encoding Is Not Ours
//!
//! Reed–Solomon coding, module placement and mask selection come from the
//! `qrcode` crate. Only the pixel rendering is done here, because the crate's
//! renderer has a fixed four-module quiet zone and the output uses two.
//!
//! ## Fail Fast
//!
//! There are no retries and no partial recovery. Every error propagates to
//! `main`, which logs it and exits with status 1. A bad URL is caught before
//! the output directory is created.
//!
//! ## Precedence Belongs To clap
//!
//! Each setting is a clap argument with `env` and `default_value`, so
//! flag > env > default is decided by the parser. The env file is loaded
//! before the final parse, which is what lets it feed those env lookups.

pub mod color;
pub mod config;
pub mod error;
pub mod generate;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod report;
pub mod types;
pub mod validate;

pub use error::QrError;

#[cfg(test)]
pub(crate) mod test_helpers;
