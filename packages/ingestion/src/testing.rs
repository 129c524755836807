//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the pipeline without
//! making real network or model calls.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use url::Url;

use crate::error::{FetchError, FetchResult, ModelError, ModelResult};
use crate::traits::{fetcher::PageFetcher, model::TextModel};
use crate::types::FetchedDocument;

/// A mock page fetcher with canned documents and injectable failures.
///
/// Pages are keyed by the URL's serialized form (note that `Url` normalizes,
/// e.g. `https://example.com` becomes `https://example.com/`). URLs with no
/// canned page behave like a 404.
#[derive(Default, Clone)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    failures: Arc<RwLock<HashSet<String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create an empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned page body for a URL.
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), html.into());
        self
    }

    /// Make fetches of a URL fail with a transport error.
    pub fn with_failure(self, url: impl Into<String>) -> Self {
        self.failures.write().unwrap().insert(url.into());
        self
    }

    /// URLs fetched so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of fetches made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult<FetchedDocument> {
        let key = url.as_str().to_string();
        self.calls.write().unwrap().push(key.clone());

        if self.failures.read().unwrap().contains(&key) {
            return Err(FetchError::Http(
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "mock network failure")
                    .into(),
            ));
        }

        match self.pages.read().unwrap().get(&key) {
            Some(html) => Ok(FetchedDocument {
                raw_html: html.clone(),
                source_url: url.clone(),
            }),
            None => Err(FetchError::Status {
                status: 404,
                url: key,
            }),
        }
    }
}

enum ScriptedResponse {
    Text(String),
    Failure(String),
}

/// A mock text model with a scripted response queue.
///
/// Responses are consumed in FIFO order, one per `generate` call; the
/// enrichment engine always issues the tag prompt first and the summary
/// prompt second. Every prompt is recorded for assertions. An exhausted
/// script fails the call.
#[derive(Default, Clone)]
pub struct MockModel {
    script: Arc<RwLock<VecDeque<ScriptedResponse>>>,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl MockModel {
    /// Create a mock model with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(ScriptedResponse::Text(text.into()));
        self
    }

    /// Queue a failed call.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(ScriptedResponse::Failure(message.into()));
        self
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }

    /// Number of generate calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.read().unwrap().len()
    }
}

#[async_trait]
impl TextModel for MockModel {
    async fn generate(&self, prompt: &str) -> ModelResult<String> {
        self.prompts.write().unwrap().push(prompt.to_string());

        match self.script.write().unwrap().pop_front() {
            Some(ScriptedResponse::Text(text)) => Ok(text),
            Some(ScriptedResponse::Failure(message)) => Err(ModelError::Api(message)),
            None => Err(ModelError::Api("no scripted response".to_string())),
        }
    }
}
