//! Fetcher test utilities

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use module_info_gen::fetch::{DocumentFetcher, FetchError};

/// Stub fetcher serving documents from memory and recording requested URLs
#[derive(Default)]
pub struct StubFetcher {
    documents: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: &str, body: &str) -> Self {
        self.documents.insert(url.to_string(), body.to_string());
        self
    }

    /// URLs requested so far, in request order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());

        match self.documents.get(url) {
            Some(body) => Ok(body.clone()),
            None => Err(FetchError::NotFound(url.to_string())),
        }
    }
}

/// Reads a generated modules.json back as a JSON value
pub fn read_output(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}
