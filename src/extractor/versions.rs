//! Version list extraction
//!
//! Format example:
//! ```text
//! ## Available Versions
//! - `1.1.0`
//! - `1.2.0-beta`
//!
//! ### Prior Versions
//! The following versions are no longer maintained:
//! - `1.0.0`
//! ```

use std::sync::LazyLock;

use regex::Regex;

pub const AVAILABLE_VERSIONS_HEADING: &str = "## Available Versions";
pub const PRIOR_VERSIONS_HEADING: &str = "### Prior Versions";

/// Back-tick quoted `major.minor.patch`, optionally suffixed with `-beta`
static VERSION_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(\d+\.\d+\.\d+(?:-beta)?)`").expect("version pattern is valid"));

/// Collects versions from `## Available Versions` followed by `### Prior Versions`
///
/// Order within each section is kept and duplicates across sections are not removed.
/// A document without either section contributes nothing for that section.
pub fn extract_versions(text: &str) -> Vec<String> {
    let mut versions = section_body(text, AVAILABLE_VERSIONS_HEADING, false)
        .map(|body| version_tokens(&body))
        .unwrap_or_default();

    if let Some(body) = section_body(text, PRIOR_VERSIONS_HEADING, true) {
        versions.extend(version_tokens(&body));
    }

    versions
}

/// Every version token in `text`, left to right
pub fn version_tokens(text: &str) -> Vec<String> {
    VERSION_TOKEN_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns the lines below `heading` up to the next blank line or heading
///
/// Blank lines directly below the heading are skipped. With `skip_intro`, a first
/// line ending in `:` is treated as an introduction and not part of the body.
fn section_body(text: &str, heading: &str, skip_intro: bool) -> Option<String> {
    let mut lines = text.lines().skip_while(|line| line.trim_end() != heading);
    lines.next()?;

    let mut lines = lines.skip_while(|line| line.trim().is_empty()).peekable();

    if skip_intro && lines.peek().is_some_and(|line| line.trim_end().ends_with(':')) {
        lines.next();
        while lines.peek().is_some_and(|line| line.trim().is_empty()) {
            lines.next();
        }
    }

    let body: Vec<&str> = lines
        .take_while(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .collect();

    Some(body.join("\n"))
}
