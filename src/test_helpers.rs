//! Shared test utilities for the url-qr unit tests.
//!
//! Decoding written images back to their payload is done by the integration
//! suite (`tests/common`), which exercises the same pipeline end to end.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let config = config_in(tmp.path(), "https://example.com");
//! let _dir = EnvGuard::unset(ENV_DIR);
//! ```

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::config::EffectiveConfig;

// =========================================================================
// Fixture setup
// =========================================================================

/// Default config pointed at `<root>/out` with the given URL.
pub fn config_in(root: &Path, url: &str) -> EffectiveConfig {
    EffectiveConfig {
        url: url.to_string(),
        output_dir: root.join("out"),
        ..Default::default()
    }
}

// =========================================================================
// Process environment
// =========================================================================

/// Sets or removes an env var for the life of the guard, then restores it.
///
/// Tests holding one must be `#[serial]`: the process environment is shared
/// by every test thread.
pub struct EnvGuard {
    key: String,
    prev: Option<OsString>,
}

impl EnvGuard {
    pub fn set(key: &str, val: impl AsRef<OsStr>) -> Self {
        let prev = std::env::var_os(key);
        unsafe { std::env::set_var(key, val) };
        Self {
            key: key.to_string(),
            prev,
        }
    }

    pub fn unset(key: &str) -> Self {
        let prev = std::env::var_os(key);
        unsafe { std::env::remove_var(key) };
        Self {
            key: key.to_string(),
            prev,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.prev {
            Some(v) => unsafe { std::env::set_var(&self.key, v) },
            None => unsafe { std::env::remove_var(&self.key) },
        }
    }
}
