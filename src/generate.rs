//! The generate pipeline.
//!
//! One run walks these states in order and stops at the first error:
//!
//! ```text
//! ConfigResolved → Validated → DirectoryReady → FilenameResolved
//!                → ImageEncoded → ImageWritten
//! ```
//!
//! The URL is validated before the directory is created, so a bad URL
//! leaves the filesystem untouched.

use crate::color::{Color, parse_color};
use crate::config::EffectiveConfig;
use crate::error::QrError;
use crate::imaging::{self, QrSettings};
use crate::naming::resolve_filename_at;
use crate::output::{ensure_output_directory, write_image};
use crate::types::OutputTarget;
use crate::validate::validate_url;
use chrono::{DateTime, Local, TimeZone};
use std::path::PathBuf;
use tracing::{debug, info};

/// What a run would do, without doing it. Produced by [`plan`].
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub url: url::Url,
    pub target: OutputTarget,
    pub fill: Color,
    pub back: Color,
    pub settings: QrSettings,
}

/// Run the full pipeline against the current local time.
pub fn generate(config: &EffectiveConfig) -> Result<PathBuf, QrError> {
    generate_at(config, &Local::now())
}

/// Run the full pipeline, timestamping default filenames with `now`.
///
/// Returns the path of the written image.
pub fn generate_at<Tz>(config: &EffectiveConfig, now: &DateTime<Tz>) -> Result<PathBuf, QrError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let settings = QrSettings::default();

    validate_url(&config.url)?;
    debug!(url = %config.url, "URL is valid");

    ensure_output_directory(&config.output_dir)?;

    let target = OutputTarget::new(
        &config.output_dir,
        resolve_filename_at(&config.filename, now),
    );
    debug!(filename = %target.filename, "output filename resolved");

    let fill = parse_color(&config.fill_color)?;
    let back = parse_color(&config.back_color)?;
    let code = imaging::encode(&config.url, &settings)?;
    let image = imaging::render(&code, fill, back, &settings);
    debug!(
        version = ?code.version(),
        modules = code.width(),
        pixels = image.width(),
        "QR symbol encoded"
    );

    write_image(&image, &target)
}

/// Resolve everything a run needs without touching the filesystem.
///
/// Validates the URL and both colors, and computes the output path that a
/// run at `now` would write.
pub fn plan<Tz>(config: &EffectiveConfig, now: &DateTime<Tz>) -> Result<Plan, QrError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let url = validate_url(&config.url)?;
    let plan = Plan {
        url,
        target: OutputTarget::new(
            &config.output_dir,
            resolve_filename_at(&config.filename, now),
        ),
        fill: parse_color(&config.fill_color)?,
        back: parse_color(&config.back_color)?,
        settings: QrSettings::default(),
    };
    info!("Configuration is valid, would write {}", plan.target.path().display());
    Ok(plan)
}
