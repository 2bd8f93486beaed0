use super::client::PageFetcher;
use super::types::{FetchError, Page};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) const MISSING_PAGE: &str = "<html><h1>Нет такой страницы</h1></html>";

/// Serves canned pages by URL and counts requests. Unknown URLs get a 404.
#[derive(Default)]
pub(crate) struct FakeFetcher {
    pages: HashMap<String, Page>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub(crate) fn with_page(mut self, url: impl Into<String>, page: Page) -> Self {
        self.pages.insert(url.into(), page);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn get(&self, url: &str) -> Result<Page, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().push(url.to_string());
        tokio::task::yield_now().await;
        Ok(self
            .pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| Page::new(404, MISSING_PAGE)))
    }
}

/// Fails every request at the transport level.
pub(crate) struct BrokenFetcher;

#[async_trait]
impl PageFetcher for BrokenFetcher {
    async fn get(&self, url: &str) -> Result<Page, FetchError> {
        Err(FetchError::transport(url, "connection refused"))
    }
}
