use super::cache::RootCache;
use super::stemmer::Stemmer;
use super::types::{Root, SharedRootMap};
use crate::infrastructure::http::{FetchError, PageFetcher};
use crate::infrastructure::morphology::{Lookup, MorphologyService};
use std::sync::Arc;

/// Resolves words to roots through a root cache, a morphology site, or the
/// stemmer as a fallback. The sequential form caches by word and the
/// concurrent form by stem; both caches live as long as the resolver.
pub struct RootResolver {
    fetcher: Arc<dyn PageFetcher>,
    stemmer: Stemmer,
    by_word: RootCache,
    by_stem: RootCache,
}

impl RootResolver {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            stemmer: Stemmer::russian(),
            by_word: RootCache::new(),
            by_stem: RootCache::new(),
        }
    }

    #[cfg(test)]
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    pub fn cached_roots(&self) -> usize {
        self.by_word.len() + self.by_stem.len()
    }

    pub fn cached_stems(&self) -> usize {
        self.stemmer.cached()
    }

    /// Looks the word up and returns its root. A page that does not know the
    /// word yields the stem, which is returned without being cached so a
    /// later call asks the site again.
    pub async fn resolve_root(
        &self,
        word: &str,
        service: MorphologyService,
    ) -> Result<Root, FetchError> {
        if let Some(root) = self.by_word.get(word) {
            return Ok(root);
        }

        let root = match self.lookup(word, service).await? {
            Lookup::NotFound => {
                let stem = self.stemmer.stem(word);
                log::debug!("root.not_found service={} word={} stem={}", service, word, stem);
                return Ok(stem);
            }
            Lookup::Found(root) if root.is_empty() => self.stemmer.stem(word),
            Lookup::Found(root) => root,
        };

        Ok(self.by_word.insert(word.to_string(), root))
    }

    /// Root shared by every word with the same stem. Unknown words and blank
    /// parses both fall back to the stem, and the outcome is cached either
    /// way, so the first root stored for a stem is the one every later
    /// caller sees.
    pub async fn resolve_by_stem(
        &self,
        word: &str,
        service: MorphologyService,
    ) -> Result<Root, FetchError> {
        let stem = self.stemmer.stem(word);
        if let Some(root) = self.by_stem.get(&stem) {
            return Ok(root);
        }

        let root = match self.lookup(word, service).await? {
            Lookup::Found(root) if !root.is_empty() => root,
            _ => stem.clone(),
        };
        Ok(self.by_stem.insert(stem, root))
    }

    /// Resolves the word by stem and files it under its root in `roots`.
    pub async fn resolve_into(
        &self,
        word: &str,
        roots: &SharedRootMap,
        service: MorphologyService,
    ) -> Result<(), FetchError> {
        let root = self.resolve_by_stem(word, service).await?;
        log::debug!("Root: {} Word {}", root, word);
        roots.lock().push(root, word.to_string());
        Ok(())
    }

    async fn lookup(&self, word: &str, service: MorphologyService) -> Result<Lookup, FetchError> {
        let url = service.build_url(word);
        let page = self.fetcher.get(&url).await?;
        service.interpret(&url, &page)
    }
}
