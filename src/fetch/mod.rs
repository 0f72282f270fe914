//! Document retrieval layer
//!
//! - [`fetcher`]: `DocumentFetcher` trait, the injected fetch capability
//! - [`http`]: reqwest-backed implementation
//! - [`error`]: Fetch error type

pub mod error;
pub mod fetcher;
pub mod http;

pub use error::FetchError;
pub use fetcher::DocumentFetcher;
pub use http::HttpFetcher;
