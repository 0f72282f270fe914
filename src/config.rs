use std::path::{Path, PathBuf};

use crate::extractor::types::{ExtractorConfig, MatchStrictness, RecordShape};

// =============================================================================
// Output and network constants
// =============================================================================

/// File name of the generated module info table
pub const OUTPUT_FILE_NAME: &str = "modules.json";

/// Indentation used when serializing the module info table
pub const OUTPUT_INDENT: &[u8] = b"    ";

/// User agent sent with every document request
pub const USER_AGENT: &str = "module-info-gen";

/// Environment variable holding the tracing filter directives
pub const LOG_ENV: &str = "MODULE_INFO_LOG";

/// Filter used when `LOG_ENV` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Which family of documentation pages a run processes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// GameTest module pages (`--gametest_urls`)
    Gametest,
    /// Script API module pages (`--script_api_urls`)
    ScriptApi,
}

impl GeneratorKind {
    /// Returns the output subdirectory name for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Gametest => "gametest",
            GeneratorKind::ScriptApi => "script_api",
        }
    }

    /// Extractor settings used for pages of this kind
    pub fn extractor_config(&self) -> ExtractorConfig {
        match self {
            GeneratorKind::Gametest => ExtractorConfig {
                shape: RecordShape::DependencyPair,
                strictness: MatchStrictness::Anywhere,
            },
            GeneratorKind::ScriptApi => ExtractorConfig {
                shape: RecordShape::NameWithVersions,
                strictness: MatchStrictness::Anchored,
            },
        }
    }

    /// Directory the table for this kind is written into, below `output_root`
    pub fn output_dir(&self, output_root: &Path) -> PathBuf {
        output_root.join(self.as_str())
    }
}
