//! URL well-formedness check run before anything touches the filesystem.
//!
//! A candidate is accepted when it parses under the WHATWG URL grammar and
//! carries both a scheme and a non-empty host. Relative references,
//! host-less URLs (`mailto:`, `data:`) and free text are rejected.

use crate::error::QrError;
use url::Url;

/// Parse and check `candidate`, returning the parsed URL on success.
pub fn validate_url(candidate: &str) -> Result<Url, QrError> {
    let invalid = |reason: String| QrError::InvalidInput {
        url: candidate.to_string(),
        reason,
    };

    if candidate.trim().is_empty() {
        return Err(invalid("empty string".into()));
    }
    if candidate.chars().any(char::is_whitespace) {
        return Err(invalid("contains whitespace".into()));
    }

    let url = Url::parse(candidate).map_err(|e| invalid(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(invalid(format!("no host in {}: URL", url.scheme()))),
    }
}
