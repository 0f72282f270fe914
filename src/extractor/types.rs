//! Common types for module-info extraction

use serde::{Deserialize, Serialize};

/// Shape of the record produced for each module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordShape {
    /// `{uuid, version}` taken from the manifest dependency object
    #[default]
    DependencyPair,
    /// `{module_name, versions}` with versions from the versions sections
    NameWithVersions,
}

/// Where the manifest JSON block may appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrictness {
    /// Only directly below a `Manifest Details` heading
    Anchored,
    /// The first ```` ```json ```` fence anywhere in the document
    #[default]
    Anywhere,
}

/// Extractor configuration
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractorConfig {
    pub shape: RecordShape,
    pub strictness: MatchStrictness,
}

/// Structured information extracted for one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ModuleRecord {
    Dependency {
        uuid: String,
        version: String,
    },
    Versioned {
        module_name: String,
        versions: Vec<String>,
    },
    /// Placeholder written for modules registered before extraction; serializes as `{}`
    Empty {},
}
