//! Module-info extractor
//!
//! Runs the extraction pipeline over one document and assembles a [`ModuleRecord`]
//! in the configured [`RecordShape`].

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::extractor::error::ExtractError;
use crate::extractor::front_matter::strip_front_matter;
use crate::extractor::manifest::ManifestLocator;
use crate::extractor::types::{ExtractorConfig, ModuleRecord, RecordShape};
use crate::extractor::versions::extract_versions;

pub struct ModuleInfoExtractor {
    shape: RecordShape,
    manifest: ManifestLocator,
}

impl ModuleInfoExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            shape: config.shape,
            manifest: ManifestLocator::new(config.strictness),
        }
    }

    pub fn shape(&self) -> RecordShape {
        self.shape
    }

    /// Extracts a record, logging and discarding any failure
    pub fn extract(&self, raw_text: &str) -> Option<ModuleRecord> {
        match self.try_extract(raw_text) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("No module info extracted: {}", e);
                None
            }
        }
    }

    /// Extracts a record, returning why none could be produced
    pub fn try_extract(&self, raw_text: &str) -> Result<ModuleRecord, ExtractError> {
        let text = strip_front_matter(raw_text);
        let manifest = self.manifest.parse(text)?;

        match self.shape {
            RecordShape::DependencyPair => Ok(ModuleRecord::Dependency {
                uuid: string_field(&manifest, "uuid")?,
                version: string_field(&manifest, "version")?,
            }),
            RecordShape::NameWithVersions => {
                let module_name = string_field(&manifest, "module_name")?;
                let versions = extract_versions(text);
                debug!("{} lists {} versions", module_name, versions.len());

                Ok(ModuleRecord::Versioned {
                    module_name,
                    versions,
                })
            }
        }
    }
}

fn string_field(manifest: &Map<String, Value>, key: &'static str) -> Result<String, ExtractError> {
    manifest
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ExtractError::MissingField(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::types::MatchStrictness;

    fn extractor(shape: RecordShape, strictness: MatchStrictness) -> ModuleInfoExtractor {
        ModuleInfoExtractor::new(ExtractorConfig { shape, strictness })
    }

    const GAMETEST_PAGE: &str = r#"---
author: docs
ms.prod: gaming
---
# mojang-gametest Module

The GameTest framework.

```json
{
    "uuid": "6f4b6893-1bb6-42fd-b458-7fa3d0c89616", // identifier of the module
    "version": "0.1.0" // current beta version
}
```
"#;

    const SCRIPT_API_PAGE: &str = r#"---
title: server module
---
# @minecraft/server Module

## Available Versions
- `1.0.0`
- `1.1.0`
- `1.2.0-beta`

### Prior Versions
Versions no longer recommended:
- `0.1.0`
- `1.0.0`

## Manifest Details
```json
{
    "module_name": "@minecraft/server", // package name
    "version": "1.1.0"
}
```
"#;

    #[test]
    fn try_extract_builds_dependency_pair() {
        let record = extractor(RecordShape::DependencyPair, MatchStrictness::Anywhere)
            .try_extract(GAMETEST_PAGE)
            .unwrap();

        assert_eq!(
            record,
            ModuleRecord::Dependency {
                uuid: "6f4b6893-1bb6-42fd-b458-7fa3d0c89616".to_string(),
                version: "0.1.0".to_string(),
            }
        );
    }

    #[test]
    fn try_extract_builds_name_with_versions() {
        let record = extractor(RecordShape::NameWithVersions, MatchStrictness::Anchored)
            .try_extract(SCRIPT_API_PAGE)
            .unwrap();

        assert_eq!(
            record,
            ModuleRecord::Versioned {
                module_name: "@minecraft/server".to_string(),
                versions: vec![
                    "1.0.0".to_string(),
                    "1.1.0".to_string(),
                    "1.2.0-beta".to_string(),
                    "0.1.0".to_string(),
                    "1.0.0".to_string(),
                ],
            }
        );
    }

    #[test]
    fn try_extract_builds_name_with_empty_versions_when_section_missing() {
        let text = "```json\n{\"module_name\": \"Foo\"}\n```\n";

        let record = extractor(RecordShape::NameWithVersions, MatchStrictness::Anywhere)
            .try_extract(text)
            .unwrap();

        assert_eq!(
            record,
            ModuleRecord::Versioned {
                module_name: "Foo".to_string(),
                versions: vec![],
            }
        );
    }

    #[test]
    fn try_extract_reports_missing_field() {
        let text = "```json\n{\"uuid\": \"abc-123\"}\n```\n";

        let result = extractor(RecordShape::DependencyPair, MatchStrictness::Anywhere)
            .try_extract(text);

        assert!(matches!(result, Err(ExtractError::MissingField("version"))));
    }

    #[test]
    fn try_extract_rejects_comment_before_closing_brace_on_same_line() {
        // The comment runs to end of line, so the closing brace is removed with it
        let text = "```json\n{\"uuid\": \"abc-123\", \"version\": \"1.0.0\" // stable}\n```\n";

        let result = extractor(RecordShape::DependencyPair, MatchStrictness::Anywhere)
            .try_extract(text);

        assert!(matches!(result, Err(ExtractError::InvalidManifest(_))));
    }

    #[test]
    fn try_extract_treats_non_string_field_as_missing() {
        let text = "```json\n{\"module_name\": 42}\n```\n";

        let result = extractor(RecordShape::NameWithVersions, MatchStrictness::Anywhere)
            .try_extract(text);

        assert!(matches!(
            result,
            Err(ExtractError::MissingField("module_name"))
        ));
    }

    #[test]
    fn try_extract_with_anchored_strictness_ignores_unanchored_block() {
        let result = extractor(RecordShape::DependencyPair, MatchStrictness::Anchored)
            .try_extract(GAMETEST_PAGE);

        assert!(matches!(result, Err(ExtractError::ManifestNotFound)));
    }

    #[test]
    fn extract_returns_none_instead_of_error() {
        let extractor = extractor(RecordShape::DependencyPair, MatchStrictness::Anywhere);

        assert_eq!(extractor.extract("# No manifest here\n"), None);
        assert_eq!(extractor.extract("```json\nnot json\n```\n"), None);
        assert!(extractor.extract(GAMETEST_PAGE).is_some());
    }

    #[test]
    fn front_matter_json_fence_is_not_mistaken_for_manifest() {
        let text = "---\nnote: |\n```json\n{\"uuid\": \"wrong\", \"version\": \"0.0.0\"}\n```\n---\n```json\n{\"uuid\": \"right\", \"version\": \"1.0.0\"}\n```\n";

        let record = extractor(RecordShape::DependencyPair, MatchStrictness::Anywhere)
            .try_extract(text)
            .unwrap();

        assert_eq!(
            record,
            ModuleRecord::Dependency {
                uuid: "right".to_string(),
                version: "1.0.0".to_string(),
            }
        );
    }
}
