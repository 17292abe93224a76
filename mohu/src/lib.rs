//! mohu
//!
//! Fuzzy string matching for mixed Chinese/English vocabularies.

pub mod config;

pub use config::MatcherConfig;
