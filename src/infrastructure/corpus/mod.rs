pub mod client;
pub mod config;
pub mod types;

pub use client::{CorpusSource, GithubCorpus};
pub use types::CorpusError;
