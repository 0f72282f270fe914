pub mod config;
pub mod extractor;
pub mod fetch;
pub mod generate;
pub mod logging;
