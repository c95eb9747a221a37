use indexmap::IndexMap;

use crate::scan::{self, PrefixMatch};

/// Children of a node keyed by edge label, in insertion order.
pub(crate) type Edges<T> = IndexMap<String, Node<T>>;

/// A node of the trie and, by extension, the root of its own sub-trie.
///
/// Every node owns its children outright. Labels along the path from the
/// root spell out the key a node stands for; `value` is `None` for nodes
/// that exist only to branch.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) edges: Edges<T>,
    pub(crate) value: Option<T>,
}

/// Outcome of removing a key below a node.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Removal<T> {
    /// No value was stored under the key; nothing changed.
    Missing,
    /// The value was taken out. `redundant` is set when the node the removal
    /// ran on is left with no value and a single child, so its parent has to
    /// fold it into the edge that points at it.
    Taken { value: T, redundant: bool },
}

impl<T> Node<T> {
    pub(crate) fn new() -> Self {
        Node {
            edges: IndexMap::new(),
            value: None,
        }
    }

    pub(crate) fn leaf(value: T) -> Self {
        Node {
            edges: IndexMap::new(),
            value: Some(value),
        }
    }

    /// A value-less node with a single child is a pass-through that
    /// compaction must remove.
    pub(crate) fn is_redundant(&self) -> bool {
        self.value.is_none() && self.edges.len() == 1
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// `key` must not be empty.
    pub(crate) fn insert(&mut self, key: &str, value: T) -> Option<T> {
        debug_assert!(!key.is_empty());

        if let Some(child) = self.edges.get_mut(key) {
            return child.value.replace(value);
        }

        match scan::longest_common_prefix(key, &self.edges) {
            None => {
                self.edges.insert(key.to_owned(), Node::leaf(value));
                None
            }
            Some(hit) if hit.exact => self.edges[hit.index].insert(&key[hit.shared..], value),
            Some(hit) => {
                self.split(hit, key, value);
                None
            }
        }
    }

    /// Breaks the edge at `hit.index` where `key` stops sharing it, moving
    /// the old child one level down and storing `value` on the new branch.
    fn split(&mut self, hit: PrefixMatch, key: &str, value: T) {
        let Some((mut head, child)) = self.edges.shift_remove_index(hit.index) else {
            return;
        };
        let tail = head.split_off(hit.shared);
        log::trace!("splitting edge {head:?}|{tail:?} for key {key:?}");

        let mut fork = Node::new();
        fork.edges.insert(tail, child);
        if hit.shared == key.len() {
            fork.value = Some(value);
        } else {
            fork.insert(&key[hit.shared..], value);
        }
        self.edges.insert(head, fork);
    }

    /// Removes the value stored under `key`, compacting any child that the
    /// removal leaves redundant.
    pub(crate) fn remove(&mut self, key: &str) -> Removal<T> {
        if let Some(index) = self.edges.get_index_of(key) {
            let child = &mut self.edges[index];

            if !child.edges.is_empty() {
                let Some(value) = child.value.take() else {
                    return Removal::Missing;
                };
                if child.is_redundant() {
                    self.compact(index);
                }
                return Removal::Taken {
                    value,
                    redundant: self.is_redundant(),
                };
            }

            return match self.edges.shift_remove_index(index) {
                Some((_, Node { value: Some(value), .. })) => Removal::Taken {
                    value,
                    redundant: self.is_redundant(),
                },
                _ => Removal::Missing,
            };
        }

        let Some((index, end)) = scan::longest_exact_label(key, &self.edges) else {
            return Removal::Missing;
        };

        match self.edges[index].remove(&key[end..]) {
            Removal::Missing => Removal::Missing,
            Removal::Taken { value, redundant } => {
                if redundant {
                    self.compact(index);
                }
                Removal::Taken {
                    value,
                    redundant: self.is_redundant(),
                }
            }
        }
    }

    /// Folds the redundant child at `index` into this node: its only label is
    /// appended to the edge that pointed at it, which now points at the
    /// grandchild.
    fn compact(&mut self, index: usize) {
        debug_assert!(self.edges[index].is_redundant());

        let Some((mut label, mut redundant)) = self.edges.shift_remove_index(index) else {
            return;
        };
        let Some((tail, grandchild)) = redundant.edges.pop() else {
            return;
        };
        log::trace!("compacting edge {label:?} with {tail:?}");

        label.push_str(&tail);
        self.edges.insert(label, grandchild);
    }

    pub(crate) fn get(&self, key: &str) -> Option<&T> {
        if let Some(child) = self.edges.get(key) {
            return child.value.as_ref();
        }

        let (index, end) = scan::shortest_exact_label(key, &self.edges)?;
        self.edges[index].get(&key[end..])
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        if let Some(index) = self.edges.get_index_of(key) {
            return self.edges[index].value.as_mut();
        }

        let (index, end) = scan::shortest_exact_label(key, &self.edges)?;
        self.edges[index].get_mut(&key[end..])
    }
}

#[cfg(test)]
impl<T> Node<T> {
    /// Panics unless the sub-trie below this node has non-empty, prefix-free
    /// sibling labels and no value-less node short of two children. Returns
    /// the number of values stored below (and at) this node.
    pub(crate) fn assert_invariants(&self, is_root: bool) -> usize {
        if !is_root && self.value.is_none() {
            assert!(
                self.edges.len() >= 2,
                "value-less node with {} children",
                self.edges.len()
            );
        }

        let mut firsts = std::collections::HashSet::new();
        for label in self.edges.keys() {
            let first = label.chars().next().expect("empty edge label");
            assert!(firsts.insert(first), "siblings share prefix {first:?}");
        }

        self.edges
            .values()
            .map(|child| child.assert_invariants(false))
            .sum::<usize>()
            + usize::from(self.value.is_some())
    }

    /// Every node below this one as the `|`-joined labels on its path,
    /// sorted, so sub-tries can be compared by shape whatever their sibling
    /// order.
    pub(crate) fn layout(&self) -> Vec<String> {
        fn walk<T>(node: &Node<T>, path: &str, out: &mut Vec<String>) {
            for (label, child) in &node.edges {
                let path = if path.is_empty() {
                    label.clone()
                } else {
                    format!("{path}|{label}")
                };
                walk(child, &path, out);
                out.push(path);
            }
        }

        let mut out = Vec::new();
        walk(self, "", &mut out);
        out.sort();
        out
    }
}
