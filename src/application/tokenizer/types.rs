use std::collections::HashSet;
use std::path::PathBuf;

/// A lowercased token made of Cyrillic letters only.
pub type Word = String;

#[derive(Debug, thiserror::Error)]
pub enum BlacklistError {
    #[error("failed to read blacklist {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("blacklist {path} is not a JSON array of strings: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Words excluded from every aggregation. Built once at startup.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    words: HashSet<Word>,
}

impl Blacklist {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize_token(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

pub(crate) fn normalize_token(s: &str) -> String {
    s.trim().to_lowercase()
}

pub(crate) fn is_word_char(ch: char) -> bool {
    matches!(ch, 'а'..='я' | 'ё')
}
