pub mod aggregator;
pub mod cache;
pub mod resolver;
pub mod stemmer;
pub mod types;

pub use aggregator::{aggregate, aggregate_concurrent};
pub use resolver::RootResolver;
pub use types::RootMap;
