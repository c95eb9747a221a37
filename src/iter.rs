use indexmap::map;

use crate::fuzzy::{self, Probe};
use crate::node::Node;

/// An iterator over the key-value pairs of a `RadixTrie`.
///
/// Walks the trie depth first, yielding a node before its descendants and
/// siblings in insertion order. Keys are rebuilt from the edge labels on the
/// way down.
///
/// This struct is created by the [`entries`] method on [`RadixTrie`].
///
/// [`entries`]: crate::RadixTrie::entries
/// [`RadixTrie`]: crate::RadixTrie
pub struct Iter<'a, T> {
    // (length of the key prefix above these edges, edges still to visit)
    stack: Vec<(usize, map::Iter<'a, String, Node<T>>)>,
    key: String,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Node<T>, len: usize) -> Self {
        Iter {
            stack: vec![(0, root.edges.iter())],
            key: String::new(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (String, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, edges) = self.stack.last_mut()?;
            let depth = *depth;

            match edges.next() {
                Some((label, child)) => {
                    self.key.truncate(depth);
                    self.key.push_str(label);
                    self.stack.push((self.key.len(), child.edges.iter()));

                    if let Some(value) = &child.value {
                        self.remaining -= 1;
                        return Some((self.key.clone(), value));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// An iterator over the keys of a `RadixTrie`.
///
/// This struct is created by the [`keys`] method on [`RadixTrie`].
///
/// [`keys`]: crate::RadixTrie::keys
/// [`RadixTrie`]: crate::RadixTrie
pub struct Keys<'a, T> {
    pub(crate) inner: Iter<'a, T>,
}

impl<T> Iterator for Keys<'_, T> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An iterator over the values of a `RadixTrie`.
///
/// This struct is created by the [`values`] method on [`RadixTrie`].
///
/// [`values`]: crate::RadixTrie::values
/// [`RadixTrie`]: crate::RadixTrie
pub struct Values<'a, T> {
    pub(crate) inner: Iter<'a, T>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An iterator over the entries whose keys loosely match a search term.
///
/// This struct is created by the [`fuzzy_get`] method on [`RadixTrie`].
///
/// [`fuzzy_get`]: crate::RadixTrie::fuzzy_get
/// [`RadixTrie`]: crate::RadixTrie
pub struct FuzzyIter<'a, T> {
    stack: Vec<FuzzyFrame<'a, T>>,
    key: String,
}

struct FuzzyFrame<'a, T> {
    depth: usize,
    // `None` once the search term is used up and everything below matches
    search: Option<String>,
    edges: map::Iter<'a, String, Node<T>>,
}

impl<'a, T> FuzzyIter<'a, T> {
    pub(crate) fn new(root: &'a Node<T>, search: &str) -> Self {
        FuzzyIter {
            stack: vec![FuzzyFrame {
                depth: 0,
                search: Some(fuzzy::fold_case(search)),
                edges: root.edges.iter(),
            }],
            key: String::new(),
        }
    }
}

impl<'a, T> Iterator for FuzzyIter<'a, T> {
    type Item = (String, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;

            let Some((label, child)) = frame.edges.next() else {
                self.stack.pop();
                continue;
            };

            let search = match &frame.search {
                None => None,
                Some(term) => match fuzzy::probe(term, label) {
                    Probe::Miss => continue,
                    Probe::Hit(rest) => rest,
                },
            };

            self.key.truncate(frame.depth);
            self.key.push_str(label);
            self.stack.push(FuzzyFrame {
                depth: self.key.len(),
                search,
                edges: child.edges.iter(),
            });

            if let Some(value) = &child.value {
                return Some((self.key.clone(), value));
            }
        }
    }
}

/// An owning iterator over the key-value pairs of a `RadixTrie`.
///
/// This struct is created when a `RadixTrie` is consumed using `into_iter()`.
pub struct IntoIter<T> {
    stack: Vec<(usize, map::IntoIter<String, Node<T>>)>,
    key: String,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Node<T>, len: usize) -> Self {
        IntoIter {
            stack: vec![(0, root.edges.into_iter())],
            key: String::new(),
            remaining: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = (String, T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, edges) = self.stack.last_mut()?;
            let depth = *depth;

            match edges.next() {
                Some((label, Node { edges: children, value })) => {
                    self.key.truncate(depth);
                    self.key.push_str(&label);
                    self.stack.push((self.key.len(), children.into_iter()));

                    if let Some(value) = value {
                        self.remaining -= 1;
                        return Some((self.key.clone(), value));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
