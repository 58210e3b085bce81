//! Output filename policy.
//!
//! The default filename is a placeholder, not a real name: when the
//! configured filename is exactly [`DEFAULT_FILENAME`] the run writes
//! `qr_<YYYYMMDD_HHMMSS>.png` instead, so repeated runs into the same
//! directory never collide. Any other name is used verbatim and an existing
//! file with that name is overwritten without warning.
//!
//! The check is plain string equality. Passing `--filename qr.png` explicitly
//! is indistinguishable from not passing it, and gets a timestamp too.
//!
//! - `qr.png` at 2024-03-05 14:07:09 → `qr_20240305_140709.png`
//! - `qr.PNG` → `qr.PNG`
//! - `badge.png` → `badge.png`

use crate::config::DEFAULT_FILENAME;
use chrono::{DateTime, TimeZone};

/// strftime pattern for the generated name, second resolution.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Resolve the final filename for the given instant.
pub fn resolve_filename_at<Tz>(configured: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if is_default_filename(configured) {
        format!("qr_{}.png", now.format(TIMESTAMP_FORMAT))
    } else {
        configured.to_string()
    }
}

pub fn is_default_filename(configured: &str) -> bool {
    configured == DEFAULT_FILENAME
}
