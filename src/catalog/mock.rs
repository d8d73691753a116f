//! Mock catalog upstream for testing
//!
//! Serves canned XML and counts calls so tests can assert how often the
//! service actually went upstream.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::upstream::CatalogUpstream;
use crate::error::{CatalogError, Result};

/// Tracks upstream call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub search: usize,
    pub thing: usize,
}

/// Mock upstream client.
///
/// # Example
/// ```ignore
/// let mock = MockUpstream::new().with_search_xml(fixtures::SEARCH_CATAN);
/// let service = CatalogService::with_clock(Arc::new(mock.clone()), ttl, clock);
/// ```
#[derive(Clone, Default)]
pub struct MockUpstream {
    search_xml: Arc<Mutex<String>>,
    thing_xml: Arc<Mutex<String>>,
    /// When set, every call fails with this message
    failure: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<CallCounts>>,
    /// Queries and ids in the order they were requested
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_xml(self, xml: &str) -> Self {
        self.search_xml.try_lock().expect("fresh mock").push_str(xml);
        self
    }

    pub fn with_thing_xml(self, xml: &str) -> Self {
        self.thing_xml.try_lock().expect("fresh mock").push_str(xml);
        self
    }

    pub async fn set_search_xml(&self, xml: &str) {
        *self.search_xml.lock().await = xml.to_string();
    }

    pub async fn set_thing_xml(&self, xml: &str) {
        *self.thing_xml.lock().await = xml.to_string();
    }

    pub async fn fail_with(&self, message: &str) {
        *self.failure.lock().await = Some(message.to_string());
    }

    pub async fn recover(&self) {
        *self.failure.lock().await = None;
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }

    async fn check_failure(&self) -> Result<()> {
        match self.failure.lock().await.as_ref() {
            Some(message) => Err(CatalogError::Upstream(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogUpstream for MockUpstream {
    async fn search(&self, query: &str) -> Result<String> {
        self.call_count.lock().await.search += 1;
        self.requests.lock().await.push(query.to_string());
        self.check_failure().await?;
        Ok(self.search_xml.lock().await.clone())
    }

    async fn thing(&self, id: &str) -> Result<String> {
        self.call_count.lock().await.thing += 1;
        self.requests.lock().await.push(id.to_string());
        self.check_failure().await?;
        Ok(self.thing_xml.lock().await.clone())
    }
}
