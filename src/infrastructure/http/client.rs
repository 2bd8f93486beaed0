use super::config::USER_AGENT;
use super::types::{FetchError, Page};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

/// GET-only page source. Implemented over reqwest in production and by
/// in-memory fakes in tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<Page, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Page, FetchError> {
        let t0 = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        log::trace!(
            "http.get status={} bytes={} perf.fetch_us={}",
            status,
            body.len(),
            t0.elapsed().as_micros()
        );

        Ok(Page { status, body })
    }
}
