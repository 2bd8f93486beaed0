use super::types::QueryResult;
use crate::application::roots::{RootMap, RootResolver, aggregate, aggregate_concurrent};
use crate::application::tokenizer::{Tokenizer, Word};
use crate::infrastructure::corpus::CorpusSource;
use crate::infrastructure::morphology::MorphologyService;
use std::sync::Arc;

/// Answers `count` and `top` over a freshly aggregated corpus. The plain
/// forms resolve one word at a time; the `_async` forms fan all lookups out
/// at once. Root caches persist across calls through the shared resolver.
pub struct QueryEngine {
    corpus: Arc<dyn CorpusSource>,
    tokenizer: Tokenizer,
    resolver: RootResolver,
    sequential_service: MorphologyService,
    concurrent_service: MorphologyService,
    concurrency: Option<usize>,
}

impl QueryEngine {
    pub fn new(corpus: Arc<dyn CorpusSource>, tokenizer: Tokenizer, resolver: RootResolver) -> Self {
        Self {
            corpus,
            tokenizer,
            resolver,
            sequential_service: MorphologyService::MorphemeOnline,
            concurrent_service: MorphologyService::VnutriSlova,
            concurrency: None,
        }
    }

    pub fn with_services(mut self, sequential: MorphologyService, concurrent: MorphologyService) -> Self {
        self.sequential_service = sequential;
        self.concurrent_service = concurrent;
        self
    }

    /// Caps in-flight lookups for the `_async` forms. `None` means no cap.
    pub fn with_concurrency(mut self, limit: Option<usize>) -> Self {
        self.concurrency = limit;
        self
    }

    /// Occurrences of exactly `word` among corpus words sharing its root.
    pub async fn count(&self, word: &str) -> QueryResult<usize> {
        let word = word.to_lowercase();
        let root = self
            .resolver
            .resolve_root(&word, self.sequential_service)
            .await?;
        let roots = self.roots_sequential().await?;
        Ok(roots.count_exact(&root, &word))
    }

    pub async fn top(&self, n: usize) -> QueryResult<Vec<String>> {
        Ok(self.roots_sequential().await?.top(n))
    }

    /// Aggregates first, so a query word found in the corpus reads the root
    /// its stem was filed under.
    pub async fn count_async(&self, word: &str) -> QueryResult<usize> {
        let word = word.to_lowercase();
        let roots = self.roots_concurrent().await?;
        let root = self
            .resolver
            .resolve_by_stem(&word, self.concurrent_service)
            .await?;
        Ok(roots.count_exact(&root, &word))
    }

    pub async fn top_async(&self, n: usize) -> QueryResult<Vec<String>> {
        Ok(self.roots_concurrent().await?.top(n))
    }

    async fn words(&self) -> QueryResult<Vec<Word>> {
        let texts = self.corpus.load().await?;
        Ok(texts
            .iter()
            .flat_map(|text| self.tokenizer.tokenize(text))
            .collect())
    }

    async fn roots_sequential(&self) -> QueryResult<RootMap> {
        let words = self.words().await?;
        Ok(aggregate(&self.resolver, &words, self.sequential_service).await?)
    }

    async fn roots_concurrent(&self) -> QueryResult<RootMap> {
        let words = self.words().await?;
        Ok(aggregate_concurrent(
            &self.resolver,
            &words,
            self.concurrent_service,
            self.concurrency,
        )
        .await?)
    }
}
