//! Manifest block location and parsing
//!
//! Module pages describe the module with an annotated JSON snippet:
//!
//! ````text
//! ## Manifest Details
//! ```json
//! {
//!     "module_name": "@minecraft/server",
//!     "version": "1.1.0" // use "1.2.0-beta" for experimental APIs
//! }
//! ```
//! ````
//!
//! The `//` annotations are not valid JSON and are removed before parsing.

use regex::Regex;
use serde_json::{Map, Value};

use crate::extractor::error::ExtractError;
use crate::extractor::types::MatchStrictness;

/// Finds the manifest block of a document and parses it into a JSON object
pub struct ManifestLocator {
    /// Regex whose first group captures the body of the manifest fence
    block_re: Regex,
}

impl ManifestLocator {
    pub fn new(strictness: MatchStrictness) -> Self {
        let pattern = match strictness {
            // Match: `## Manifest Details`, blank lines, then the ```json fence
            MatchStrictness::Anchored => {
                r"(?m)^#{1,6}[ \t]*Manifest Details[ \t]*\r?\n(?:[ \t]*\r?\n)*```json[^\n]*\n((?s:.*?))^[ \t]*```"
            }
            // Match: the first ```json fence
            MatchStrictness::Anywhere => r"(?m)^```json[^\n]*\n((?s:.*?))^[ \t]*```",
        };

        Self {
            block_re: Regex::new(pattern).expect("manifest pattern is valid"),
        }
    }

    /// Returns the raw body of the manifest block, comments included
    pub fn find_block<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.block_re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Locates, cleans and parses the manifest block
    pub fn parse(&self, text: &str) -> Result<Map<String, Value>, ExtractError> {
        let block = self.find_block(text).ok_or(ExtractError::ManifestNotFound)?;
        let cleaned = strip_line_comments(block);

        match serde_json::from_str::<Value>(&cleaned)? {
            Value::Object(map) => Ok(map),
            other => Err(ExtractError::InvalidManifest(serde::de::Error::custom(
                format!("expected a JSON object, found {}", json_kind(&other)),
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Removes `// ...` comments up to the end of each line
///
/// `//` inside a JSON string literal (e.g. a URL) is kept. Line breaks are preserved
/// so that parse errors still point at the original line.
pub fn strip_line_comments(block: &str) -> String {
    let mut result = String::with_capacity(block.len());

    for line in block.split_inclusive('\n') {
        let (content, line_break) = split_line_break(line);
        result.push_str(&content[..comment_start(content).unwrap_or(content.len())]);
        result.push_str(line_break);
    }

    result
}

fn split_line_break(line: &str) -> (&str, &str) {
    let content_len = line.trim_end_matches(['\r', '\n']).len();
    line.split_at(content_len)
}

/// Byte offset of the first `//` that is outside a string literal
fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
        } else if b == b'"' {
            in_string = true;
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            return Some(i);
        }
    }

    None
}
