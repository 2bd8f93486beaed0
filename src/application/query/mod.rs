pub mod engine;
pub mod types;

pub use engine::QueryEngine;
