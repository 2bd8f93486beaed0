use crate::infrastructure::http::FetchError;
use serde::Deserialize;

/// GitHub contents API answer for `GET /repos/{owner}/{repo}/readme`.
#[derive(Deserialize, Debug)]
pub(crate) struct ReadmePayload {
    pub content: String,
    pub encoding: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("invalid README url for {repo}: {source}")]
    Url {
        repo: String,
        #[source]
        source: url::ParseError,
    },
    #[error("README of {repo} is not valid JSON: {source}")]
    Json {
        repo: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("README of {repo} is not valid base64: {source}")]
    Base64 {
        repo: String,
        #[source]
        source: base64::DecodeError,
    },
    #[error("README of {repo} is not valid UTF-8")]
    Utf8 { repo: String },
    #[error("README of {repo} uses unsupported encoding '{encoding}'")]
    Encoding { repo: String, encoding: String },
}
