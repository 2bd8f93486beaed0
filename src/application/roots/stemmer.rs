use dashmap::DashMap;
use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};

/// Russian Snowball stemmer memoized per word.
pub struct Stemmer {
    inner: SnowballStemmer,
    cache: DashMap<String, String>,
}

impl Stemmer {
    pub fn russian() -> Self {
        Self {
            inner: SnowballStemmer::create(Algorithm::Russian),
            cache: DashMap::new(),
        }
    }

    pub fn stem(&self, word: &str) -> String {
        if let Some(stem) = self.cache.get(word) {
            return stem.value().clone();
        }
        let stem = self.inner.stem(word).into_owned();
        self.cache
            .entry(word.to_string())
            .or_insert(stem)
            .value()
            .clone()
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
