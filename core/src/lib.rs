//! mohu-core
//!
//! Language-agnostic machinery shared by the mohu matching crates:
//! substitution-cost tables, weighted edit distance and the Aho-Corasick
//! candidate index. Everything here operates on sequences of string tokens;
//! what a token *is* (a grapheme cluster, a pinyin syllable) is decided by
//! the language crate on top.
//!
//! Public API:
//! - `ConfusionTable` - symmetric substitution costs for confusable tokens
//! - `distance` / `similarity` - weighted Levenshtein over token sequences
//! - `Automaton` - multi-pattern Aho-Corasick for candidate enumeration
//! - `MohuError` / `Result` - shared error types

pub mod ac;
pub mod confusion;
pub mod distance;
pub mod errors;

pub use ac::Automaton;
pub use confusion::ConfusionTable;
pub use distance::{distance, similarity, similarity_from_distance};
pub use errors::{MohuError, Result};
