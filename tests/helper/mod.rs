#![allow(dead_code)]

pub mod fetcher;

pub use fetcher::{StubFetcher, read_output};
