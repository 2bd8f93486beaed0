pub mod client;
pub mod config;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;

pub use client::{HttpFetcher, PageFetcher};
pub use types::{FetchError, Page};
