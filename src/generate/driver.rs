//! Fetch-and-extract loop
//!
//! Documents are processed one at a time in input order. A failure for one document
//! (fetch or extraction) is logged and the module is left out of the table; it never
//! stops the remaining documents.

use std::path::{Path, PathBuf};

use anyhow::Context;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::config::{GeneratorKind, OUTPUT_FILE_NAME, OUTPUT_INDENT};
use crate::extractor::module_info::ModuleInfoExtractor;
use crate::extractor::types::ModuleRecord;
use crate::fetch::fetcher::DocumentFetcher;
use crate::generate::source::SourceRef;

/// Module name to record, in first-seen input order
pub type ModuleInfoTable = IndexMap<String, ModuleRecord>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Register every requested module with an empty record before extraction,
    /// so modules without a manifest appear as `{}` instead of being omitted
    pub prepopulate_empty: bool,
}

/// Builds the module info table for `sources`
pub async fn collect_module_info(
    fetcher: &dyn DocumentFetcher,
    extractor: &ModuleInfoExtractor,
    sources: &[SourceRef],
    options: GenerateOptions,
) -> ModuleInfoTable {
    let mut table = ModuleInfoTable::new();

    if options.prepopulate_empty {
        for source in sources {
            table.insert(source.name.clone(), ModuleRecord::Empty {});
        }
    }

    for source in sources {
        let text = match fetcher.fetch(&source.url).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping {}: {}", source.name, e);
                continue;
            }
        };

        let span = info_span!("module", name = %source.name, url = %source.url);
        let Some(record) = span.in_scope(|| extractor.extract(&text)) else {
            continue;
        };

        debug!("Extracted {:?} record for {}", extractor.shape(), source.name);
        table.insert(source.name.clone(), record);
    }

    table
}

/// Writes `table` as 4-space indented JSON to `<output_dir>/modules.json`
///
/// Parent directories are created and an existing file is overwritten.
pub fn write_module_info(table: &ModuleInfoTable, output_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(OUTPUT_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    table
        .serialize(&mut serializer)
        .context("Failed to serialize module info")?;

    let path = output_dir.join(OUTPUT_FILE_NAME);
    std::fs::write(&path, buf).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

/// Generates the module info file of `kind` for `urls` below `output_root`
pub async fn run(
    kind: GeneratorKind,
    urls: &[String],
    output_root: &Path,
    fetcher: &dyn DocumentFetcher,
) -> anyhow::Result<PathBuf> {
    let sources: Vec<SourceRef> = urls
        .iter()
        .filter_map(|url| {
            let source = SourceRef::from_url(url);
            if source.is_none() {
                warn!("Skipping {}: no module name in URL", url);
            }
            source
        })
        .collect();

    let extractor = ModuleInfoExtractor::new(kind.extractor_config());
    let table =
        collect_module_info(fetcher, &extractor, &sources, GenerateOptions::default()).await;

    info!(
        "Extracted {} of {} {} modules",
        table.len(),
        urls.len(),
        kind.as_str()
    );

    write_module_info(&table, &kind.output_dir(output_root))
}
