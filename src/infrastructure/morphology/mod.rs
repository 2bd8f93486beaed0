pub mod config;
pub mod morpheme_online;
pub mod service;
pub mod vnutri_slova;

pub use service::{Lookup, MorphologyService};
