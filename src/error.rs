use thiserror::Error;

/// Errors reported by [`RadixTrie`](crate::RadixTrie) operations.
#[derive(Error, Debug)]
pub enum TrieError {
    /// The empty key was offered for insertion. Edge labels are never empty,
    /// so there is no node that could hold it.
    #[error("empty keys cannot be stored in a radix trie")]
    EmptyKey,

    /// A value could not be rendered as text.
    #[cfg(feature = "serde")]
    #[error("failed to render trie as text: {0}")]
    Text(#[from] serde_json::Error),
}

/// Result type for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;
