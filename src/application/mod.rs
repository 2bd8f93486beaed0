pub mod query;
pub mod roots;
pub mod tokenizer;
