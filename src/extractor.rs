// src/extractor.rs

use anyhow::{Context, Result, anyhow};
use regex::Regex;

// The player configuration is embedded in the page as an inline script
// object rather than a manifest, so the only handle we have is its textual
// shape. The pattern is kept exactly as the site serves it today; do not
// "improve" it without rechecking the page.
const MEDIA_PATTERN: &str = r#"(?s)\{.*type: "video/mp4".*src: "([^"]*)".*\}"#;

/// Returns the mp4 source URL embedded in the page body, or fails if no
/// fragment of the form `{ ... type: "video/mp4" ... src: "<url>" ... }`
/// is present.
pub fn extract_media_url(body: &str) -> Result<String> {
    let pattern = Regex::new(MEDIA_PATTERN).context("Invalid media pattern")?;

    let captures = pattern
        .captures(body)
        .ok_or_else(|| anyhow!("Pattern not found in the HTML."))?;

    Ok(captures[1].to_string())
}
