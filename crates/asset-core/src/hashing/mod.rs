//! Módulo de hashing y serialización JSON ordenada.

pub mod canonical_json;
pub mod hash;

pub use canonical_json::{to_canonical_json, to_key_sorted_json};
pub use hash::hash_str;
