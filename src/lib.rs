//! A compressed prefix tree (radix trie) based map implementation.
//!
//! This crate provides a `RadixTrie`, a key-value map over string keys that
//! stores shared prefixes once and collapses single-child chains into
//! multi-character edges.
//!
//! # Features
//!
//! - Exact lookups that descend one edge label at a time
//! - Case-insensitive fuzzy lookups over partial keys
//! - Depth-first iteration that rebuilds full keys
//! - JSON rendering of all entries (`serde` feature, on by default)

mod as_key;
mod error;
mod fuzzy;
mod iter;
mod node;
mod radix_trie;
mod scan;
#[cfg(feature = "serde")]
mod text;

pub use as_key::AsKey;
pub use error::{Result, TrieError};
pub use iter::{FuzzyIter, IntoIter, Iter, Keys, Values};
pub use radix_trie::RadixTrie;

#[cfg(test)]
mod proptest_radix_trie;
