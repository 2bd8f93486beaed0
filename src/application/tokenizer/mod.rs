pub mod loader;
pub mod tokenizer;
pub mod types;

pub use loader::load_blacklist;
pub use tokenizer::Tokenizer;
pub use types::Word;
