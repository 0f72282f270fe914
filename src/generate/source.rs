//! Source references

/// A module name paired with the URL of its documentation page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    pub name: String,
    pub url: String,
}

impl SourceRef {
    /// Builds a reference named after the second-to-last path segment of `url`
    ///
    /// `https://host/scriptapi/mojang-gametest/mojang-gametest.md` is named `mojang-gametest`.
    /// Returns None when the URL has no such segment.
    pub fn from_url(url: &str) -> Option<Self> {
        let name = url.rsplit('/').nth(1)?;

        Some(Self {
            name: name.to_string(),
            url: url.to_string(),
        })
    }
}
