//! Case-insensitive matching of a search term against edge labels.

use crate::scan::prefix_ends;

/// What is left of a search term after it has been matched against one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Probe {
    /// The edge cannot lead to a match.
    Miss,
    /// The edge matches. Carries the unconsumed, case-folded rest of the term,
    /// or `None` once the whole term has been consumed and every continuation
    /// below the edge matches.
    Hit(Option<String>),
}

pub(crate) fn fold_case(term: &str) -> String {
    term.to_lowercase()
}

/// Matches the case-folded `search` against `label`.
///
/// A label equal to the term consumes it whole. Otherwise the longest prefix
/// of the term that the label starts with is consumed; labels that do not
/// even share the first character are skipped outright.
pub(crate) fn probe(search: &str, label: &str) -> Probe {
    let label = fold_case(label);
    if label == search {
        return Probe::Hit(None);
    }

    match (search.chars().next(), label.chars().next()) {
        (Some(a), Some(b)) if a == b => {}
        _ => return Probe::Miss,
    }

    prefix_ends(search)
        .rev()
        .find(|&end| label.starts_with(&search[..end]))
        .map_or(Probe::Miss, |end| {
            let rest = &search[end..];
            Probe::Hit((!rest.is_empty()).then(|| rest.to_owned()))
        })
}
