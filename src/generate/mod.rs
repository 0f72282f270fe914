//! Batch driver
//!
//! - [`source`]: `SourceRef` pairs of module name and document URL
//! - [`driver`]: Fetch-and-extract loop and output writing

pub mod driver;
pub mod source;

pub use driver::{GenerateOptions, ModuleInfoTable, collect_module_info, run, write_module_info};
pub use source::SourceRef;
