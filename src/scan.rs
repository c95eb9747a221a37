//! Prefix scans over a key and the edge labels of a single node.
//!
//! All scans walk the key by character boundary and slice it in place, so no
//! candidate prefix is ever allocated.

use crate::node::Edges;

/// Where a key meets an existing edge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PrefixMatch {
    /// Position of the matching edge in the node's edge map.
    pub(crate) index: usize,
    /// Byte length of the prefix the key shares with the label.
    pub(crate) shared: usize,
    /// The label is exactly the shared prefix.
    pub(crate) exact: bool,
}

/// Byte offsets just past each character of `key`, shortest prefix first.
pub(crate) fn prefix_ends(key: &str) -> impl DoubleEndedIterator<Item = usize> + '_ {
    key.char_indices().map(|(start, ch)| start + ch.len_utf8())
}

/// Finds the longest prefix of `key` that some label equals or starts with.
///
/// Candidates are tried from the whole key down to its first character; the
/// first label in iteration order that matches a candidate wins. Sibling
/// labels are prefix free, so at most one label can match any candidate.
pub(crate) fn longest_common_prefix<T>(key: &str, edges: &Edges<T>) -> Option<PrefixMatch> {
    prefix_ends(key).rev().find_map(|end| {
        let candidate = &key[..end];
        edges
            .keys()
            .position(|label| label.starts_with(candidate))
            .map(|index| PrefixMatch {
                index,
                shared: end,
                exact: edges
                    .get_index(index)
                    .is_some_and(|(label, _)| label.len() == end),
            })
    })
}

/// Finds the longest prefix of `key` that equals a label exactly.
///
/// Returns the edge index and the byte length of that prefix.
pub(crate) fn longest_exact_label<T>(key: &str, edges: &Edges<T>) -> Option<(usize, usize)> {
    prefix_ends(key)
        .rev()
        .find_map(|end| edges.get_index_of(&key[..end]).map(|index| (index, end)))
}

/// Grows a prefix of `key` one character at a time until it equals a label.
///
/// Returns the edge index and the byte length of that prefix.
pub(crate) fn shortest_exact_label<T>(key: &str, edges: &Edges<T>) -> Option<(usize, usize)> {
    prefix_ends(key).find_map(|end| edges.get_index_of(&key[..end]).map(|index| (index, end)))
}
