//! Module-info extraction layer
//!
//! Turns the raw Markdown of one documentation page into a [`ModuleRecord`].
//!
//! # Pipeline
//!
//! ```text
//! raw text ─▶ front_matter ─▶ manifest ─▶ versions ─▶ ModuleRecord
//!             (strip ---)     (```json)   (## Available Versions)
//! ```
//!
//! # Modules
//!
//! - [`front_matter`]: Removes the leading `---` metadata block
//! - [`manifest`]: Locates the fenced JSON manifest and parses it
//! - [`versions`]: Collects version tokens from the versions sections
//! - [`module_info`]: `ModuleInfoExtractor`, which runs the whole pipeline
//! - [`types`]: Record shapes, matching strictness and `ModuleRecord`
//! - [`error`]: Extraction error type

pub mod error;
pub mod front_matter;
pub mod manifest;
pub mod module_info;
pub mod types;
pub mod versions;

pub use error::ExtractError;
pub use module_info::ModuleInfoExtractor;
pub use types::{ExtractorConfig, MatchStrictness, ModuleRecord, RecordShape};
