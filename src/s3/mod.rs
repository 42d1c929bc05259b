//! Rewriting S3 HTTP URLs into `s3://` URIs.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static AMAZONAWS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"amazonaws\.com/(.*)").unwrap());

/// Rewrites one argument into an `s3://` URI.
///
/// An `amazonaws.com` URL yields the object key with any query string
/// stripped; a bare argument with no scheme is taken to already be a key.
/// Anything else (a non-S3 URL) yields `None`.
pub fn to_s3_uri(input: &str) -> Option<String> {
    if let Some(caps) = AMAZONAWS_PATTERN.captures(input) {
        let key = caps[1].split('?').next().unwrap_or_default();
        return Some(format!("s3://{key}"));
    }

    if !input.contains("://") {
        return Some(format!("s3://{input}"));
    }

    None
}
