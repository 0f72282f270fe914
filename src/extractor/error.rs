use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No manifest block found")]
    ManifestNotFound,

    #[error("Invalid manifest JSON: {0}")]
    InvalidManifest(#[from] serde_json::Error),

    #[error("Manifest has no string field '{0}'")]
    MissingField(&'static str),
}
