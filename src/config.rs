//! Run configuration.
//!
//! Every setting comes from one of three layers, resolved independently per
//! field:
//!
//! ```text
//! --flag            (highest)
//! ENV_VAR           (process environment, optionally seeded from .env)
//! compiled default  (lowest)
//! ```
//!
//! ## Settings
//!
//! | Flag | Env var | Default |
//! |---|---|---|
//! | `--url` | `QR_DATA_URL` | `https://github.com/AbhishekDuddupudi` |
//! | `--dir` | `QR_CODE_DIR` | `output_qr` |
//! | `--filename` | `QR_CODE_FILENAME` | `qr.png` |
//! | `--fill` | `FILL_COLOR` | `black` |
//! | `--back` | `BACK_COLOR` | `white` |
//!
//! Layering is clap's `env` + `default_value`, so values stay `OsString`-backed
//! until they reach a typed field and `--dir` accepts any path the OS does.
//! Resolution never validates. An env var that is set to the empty string
//! still counts as set; the URL validator rejects it later if it matters.
//!
//! ## Env File
//!
//! A `KEY=VALUE` file (default `.env` in the working directory) may seed the
//! environment before the command line is parsed. Variables already present
//! in the process environment are never overridden by the file.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_URL: &str = "https://github.com/AbhishekDuddupudi";
pub const DEFAULT_DIR: &str = "output_qr";
/// Leaving the filename at this exact value turns on timestamped names.
pub const DEFAULT_FILENAME: &str = "qr.png";
pub const DEFAULT_FILL: &str = "black";
pub const DEFAULT_BACK: &str = "white";
pub const DEFAULT_ENV_FILE: &str = ".env";

pub const ENV_URL: &str = "QR_DATA_URL";
pub const ENV_DIR: &str = "QR_CODE_DIR";
pub const ENV_FILENAME: &str = "QR_CODE_FILENAME";
pub const ENV_FILL: &str = "FILL_COLOR";
pub const ENV_BACK: &str = "BACK_COLOR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Command-line settings. clap fills each field from its flag, then its env
/// var, then its default, so every field is always populated.
#[derive(clap::Args, Debug, Clone)]
pub struct ConfigArgs {
    /// The URL to encode in the QR code
    #[arg(long, env = ENV_URL, default_value = DEFAULT_URL, global = true)]
    pub url: String,

    /// Directory where the QR code image will be saved
    #[arg(long, env = ENV_DIR, default_value = DEFAULT_DIR, global = true)]
    pub dir: PathBuf,

    /// Filename for the QR code image
    #[arg(long, env = ENV_FILENAME, default_value = DEFAULT_FILENAME, global = true)]
    pub filename: String,

    /// Fill color for the QR code
    #[arg(long, env = ENV_FILL, default_value = DEFAULT_FILL, global = true)]
    pub fill: String,

    /// Background color for the QR code
    #[arg(long, env = ENV_BACK, default_value = DEFAULT_BACK, global = true)]
    pub back: String,
}

/// Fully resolved settings for one run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub url: String,
    pub output_dir: PathBuf,
    pub filename: String,
    pub fill_color: String,
    pub back_color: String,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_DIR),
            filename: DEFAULT_FILENAME.to_string(),
            fill_color: DEFAULT_FILL.to_string(),
            back_color: DEFAULT_BACK.to_string(),
        }
    }
}

impl From<ConfigArgs> for EffectiveConfig {
    fn from(args: ConfigArgs) -> Self {
        Self {
            url: args.url,
            output_dir: args.dir,
            filename: args.filename,
            fill_color: args.fill,
            back_color: args.back,
        }
    }
}

/// Seed the process environment from an env file.
///
/// Returns the path that was loaded, or `Ok(None)` when `path` does not exist
/// and the caller did not ask for it explicitly. A missing file that was
/// requested explicitly, or a malformed file, is an error.
pub fn load_env_file(path: &Path, explicit: bool) -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(Some(path.to_path_buf())),
        Err(err) if !explicit && err.not_found() => Ok(None),
        Err(source) => Err(ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Returns a commented `.env` template listing every setting at its default.
///
/// Used by the `gen-env` CLI command.
pub fn stock_env_file() -> &'static str {
    r##"# url-qr environment file
# =======================
# Every variable is optional. Values shown are the defaults.
# Command-line flags override anything set here, and variables already
# present in the environment take precedence over this file.

# URL encoded into the QR code (--url)
QR_DATA_URL=https://github.com/AbhishekDuddupudi

# Directory the image is written to, created if missing (--dir)
QR_CODE_DIR=output_qr

# Output filename (--filename). The extension picks the image format:
# .png, .jpg/.jpeg, .tif/.tiff or .webp.
# Leaving it at qr.png writes qr_<YYYYMMDD_HHMMSS>.png instead, so repeated
# runs never collide. Any other name is used as-is and overwritten silently.
QR_CODE_FILENAME=qr.png

# Module and background colors (--fill / --back).
# Accepts CSS color names (black, navy, ...), #rgb, #rgba, #rrggbb,
# #rrggbbaa, rgb()/rgba(), hsl()/hsla() and hsv(). Alpha is ignored.
FILL_COLOR=black
BACK_COLOR=white
"##
}
