use super::config::{COURSE_PREFIXES, GITHUB_API};
use super::types::{CorpusError, ReadmePayload};
use crate::infrastructure::http::{FetchError, PageFetcher};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// Source of the lowercased texts a query runs over.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    async fn load(&self) -> Result<Vec<String>, CorpusError>;
}

/// README files of `{org}/{course}{index}` for every course prefix and
/// `index` in `1..=task_count`.
pub struct GithubCorpus {
    fetcher: Arc<dyn PageFetcher>,
    org: String,
    token: String,
    task_count: usize,
}

impl GithubCorpus {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        org: impl Into<String>,
        token: impl Into<String>,
        task_count: usize,
    ) -> Self {
        Self {
            fetcher,
            org: org.into(),
            token: token.into(),
            task_count,
        }
    }

    pub fn repos(&self) -> Vec<String> {
        (1..=self.task_count)
            .flat_map(|index| {
                COURSE_PREFIXES
                    .iter()
                    .map(move |course| format!("{}{}", course, index))
            })
            .collect()
    }

    pub fn readme_url(&self, repo: &str) -> Result<String, CorpusError> {
        let base = format!("{}/repos/{}/{}/readme", GITHUB_API, self.org, repo);
        let mut url = Url::parse(&base).map_err(|source| CorpusError::Url {
            repo: repo.to_string(),
            source,
        })?;
        url.query_pairs_mut().append_pair("access_token", &self.token);
        Ok(url.into())
    }

    async fn fetch_readme(&self, repo: &str) -> Result<String, CorpusError> {
        let url = self.readme_url(repo)?;
        let page = self.fetcher.get(&url).await?;
        if !page.is_success() {
            return Err(FetchError::status(&url, page.status).into());
        }

        let payload: ReadmePayload =
            serde_json::from_str(&page.body).map_err(|source| CorpusError::Json {
                repo: repo.to_string(),
                source,
            })?;
        decode_readme(repo, &payload)
    }
}

#[async_trait]
impl CorpusSource for GithubCorpus {
    async fn load(&self) -> Result<Vec<String>, CorpusError> {
        let t0 = Instant::now();
        let mut texts = Vec::new();
        for repo in self.repos() {
            let text = self.fetch_readme(&repo).await?;
            log::debug!("corpus.readme repo={}/{} chars={}", self.org, repo, text.chars().count());
            texts.push(text);
        }
        log::info!(
            "corpus.loaded={} org={} perf.load_ms={}",
            texts.len(),
            self.org,
            t0.elapsed().as_millis()
        );
        Ok(texts)
    }
}

pub(crate) fn decode_readme(repo: &str, payload: &ReadmePayload) -> Result<String, CorpusError> {
    let text = match payload.encoding.to_ascii_lowercase().as_str() {
        "base64" => {
            let compact: String = payload
                .content
                .chars()
                .filter(|ch| !ch.is_ascii_whitespace())
                .collect();
            let bytes = BASE64_STANDARD
                .decode(compact)
                .map_err(|source| CorpusError::Base64 {
                    repo: repo.to_string(),
                    source,
                })?;
            String::from_utf8(bytes).map_err(|_| CorpusError::Utf8 {
                repo: repo.to_string(),
            })?
        }
        "utf-8" | "utf8" => payload.content.clone(),
        other => {
            return Err(CorpusError::Encoding {
                repo: repo.to_string(),
                encoding: other.to_string(),
            });
        }
    };
    Ok(text.to_lowercase())
}
