//! Front-matter stripping
//!
//! Documentation pages start with a metadata block:
//!
//! ```text
//! ---
//! author: someone
//! ms.service: minecraft-bedrock-edition
//! ---
//! # Page title
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Opening `---` line at the very start, body, closing `---` line and its line break
static FRONT_MATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(?:.*?\r?\n)??---(?:\r?\n|\z)").expect("front-matter pattern is valid")
});

/// Removes a leading front-matter block, returning the text unchanged when there is none
pub fn strip_front_matter(text: &str) -> &str {
    match FRONT_MATTER_RE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}
