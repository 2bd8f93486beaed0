use crate::infrastructure::corpus::CorpusError;
use crate::infrastructure::http::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("failed to load corpus: {0}")]
    Corpus(#[from] CorpusError),
    #[error("root lookup failed: {0}")]
    Lookup(#[from] FetchError),
}

pub type QueryResult<T> = Result<T, QueryError>;
