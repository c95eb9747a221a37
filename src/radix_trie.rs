use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::as_key::AsKey;
use crate::error::{Result, TrieError};
use crate::iter::{FuzzyIter, IntoIter, Iter, Keys, Values};
use crate::node::{Node, Removal};

/// A `RadixTrie` is a key-value map stored as a compressed prefix tree.
///
/// Keys sharing a prefix share the path that spells it, and chains of
/// single-child nodes are collapsed into one multi-character edge. On top
/// of exact lookups the trie answers case-insensitive fuzzy queries through
/// [`fuzzy_get`](RadixTrie::fuzzy_get).
///
/// Entries are visited depth first, each key before its continuations and
/// siblings in the order their edges were created.
///
/// # Examples
///
/// ```
/// use radixtrie::RadixTrie;
///
/// let mut trie = RadixTrie::new();
/// trie.add("bar", 15).add("barstool", 4).add("b", 1);
///
/// assert_eq!(trie.get("bar"), Some(&15));
/// assert!(trie.has("barstool"));
/// assert!(!trie.has("ba"));
///
/// let keys: Vec<_> = trie.keys().collect();
/// assert_eq!(keys, ["b", "bar", "barstool"]);
///
/// trie.delete("bar");
/// assert_eq!(trie.get("bar"), None);
/// assert_eq!(trie.len(), 2);
/// ```
#[derive(Clone)]
pub struct RadixTrie<T> {
    pub(crate) root: Node<T>,
    pub(crate) size: usize,
}

impl<T, K: AsKey, V: Into<T>, const N: usize> From<[(K, V); N]> for RadixTrie<T> {
    fn from(array: [(K, V); N]) -> Self {
        let mut trie = RadixTrie::new();
        trie.add_all(array);
        trie
    }
}

impl<T, K: AsKey, V: Into<T>> From<&[(K, V)]> for RadixTrie<T>
where
    V: Clone,
{
    fn from(slice: &[(K, V)]) -> Self {
        let mut trie = RadixTrie::new();
        for (key, value) in slice {
            trie.add(key, value.clone().into());
        }
        trie
    }
}

impl<T> From<HashMap<String, T>> for RadixTrie<T> {
    fn from(map: HashMap<String, T>) -> Self {
        map.into_iter().collect()
    }
}

impl<T> From<BTreeMap<String, T>> for RadixTrie<T> {
    fn from(map: BTreeMap<String, T>) -> Self {
        map.into_iter().collect()
    }
}

impl<T> From<RadixTrie<T>> for HashMap<String, T> {
    fn from(trie: RadixTrie<T>) -> Self {
        trie.into_iter().collect()
    }
}

impl<T: Hash> Hash for RadixTrie<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);

        let mut entries: Vec<_> = self.entries().collect();
        entries.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));

        for (key, value) in entries {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RadixTrie<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

impl<T: PartialEq> PartialEq for RadixTrie<T> {
    /// Two tries are equal when they hold the same entries, regardless of
    /// the order in which those were added.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .entries()
                .all(|(key, value)| other.get(&key) == Some(value))
    }
}

impl<T: Eq> Eq for RadixTrie<T> {}

impl<T, Q: ?Sized> Index<&Q> for RadixTrie<T>
where
    Q: AsKey,
{
    type Output = T;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("no entry found for key")
    }
}

impl<T, Q: ?Sized> IndexMut<&Q> for RadixTrie<T>
where
    Q: AsKey,
{
    fn index_mut(&mut self, key: &Q) -> &mut Self::Output {
        self.get_mut(key).expect("no entry found for key")
    }
}

impl<T, K: AsKey, V: Into<T>> Extend<(K, V)> for RadixTrie<T> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T, K, V> FromIterator<(K, V)> for RadixTrie<T>
where
    K: AsKey,
    V: Into<T>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = RadixTrie::new();
        trie.add_all(iter);
        trie
    }
}

impl<T> IntoIterator for RadixTrie<T> {
    type Item = (String, T);
    type IntoIter = IntoIter<T>;

    /// Consumes the trie into an iterator yielding owned key-value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let trie: RadixTrie<i32> = RadixTrie::from([("a", 1), ("ab", 2)]);
    ///
    /// let pairs: Vec<_> = trie.into_iter().collect();
    /// assert_eq!(pairs, [("a".to_string(), 1), ("ab".to_string(), 2)]);
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.size)
    }
}

impl<'a, T> IntoIterator for &'a RadixTrie<T> {
    type Item = (String, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<T> Default for RadixTrie<T> {
    /// Creates a new empty `RadixTrie`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let trie: RadixTrie<i32> = Default::default();
    /// assert!(trie.is_empty());
    /// ```
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RadixTrie<T> {
    /// Creates a new empty `RadixTrie`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let trie: RadixTrie<i32> = RadixTrie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        RadixTrie {
            root: Node::new(),
            size: 0,
        }
    }

    /// Returns the number of entries in the trie.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.root = Node::new();
        self.size = 0;
    }

    /// Stores `value` under `key`, replacing any value already there, and
    /// returns the trie so calls can be chained.
    ///
    /// The empty key cannot be stored: it is logged and ignored. Use
    /// [`try_add`](RadixTrie::try_add) to have it reported instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("foo", 5).add("foos", 4);
    ///
    /// trie.add("foo", 6);
    /// assert_eq!(trie.get("foo"), Some(&6));
    /// assert_eq!(trie.get("foos"), Some(&4));
    /// assert_eq!(trie.len(), 2);
    ///
    /// trie.add("", 0);
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn add<K: AsKey>(&mut self, key: K, value: T) -> &mut Self {
        if let Err(err) = self.try_add(key, value) {
            log::warn!("ignoring insertion: {err}");
        }
        self
    }

    /// Stores `value` under `key` like [`add`](RadixTrie::add), failing with
    /// [`TrieError::EmptyKey`] for the empty key without touching the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::{RadixTrie, TrieError};
    /// let mut trie = RadixTrie::new();
    /// assert!(trie.try_add("key", 1).is_ok());
    /// assert!(matches!(trie.try_add("", 2), Err(TrieError::EmptyKey)));
    /// ```
    pub fn try_add<K: AsKey>(&mut self, key: K, value: T) -> Result<&mut Self> {
        let key = key.as_key();
        if key.is_empty() {
            return Err(TrieError::EmptyKey);
        }

        if self.root.insert(&key, value).is_none() {
            self.size += 1;
        }
        Ok(self)
    }

    /// Adds every pair from `pairs`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie: RadixTrie<i32> = RadixTrie::new();
    /// trie.add_all([("foo", 5), ("foos", 9)]);
    ///
    /// assert_eq!(trie.get("foo"), Some(&5));
    /// assert_eq!(trie.get("foos"), Some(&9));
    /// ```
    pub fn add_all<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsKey,
        V: Into<T>,
    {
        for (key, value) in pairs {
            self.add(key, value.into());
        }
        self
    }

    /// Removes `key` and returns the trie so calls can be chained.
    /// Removing a missing key does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("dog", 1).add("doge", 2).add("dogs", 3);
    ///
    /// trie.delete("dog").delete("doge").delete("cat");
    /// assert_eq!(trie.get("dog"), None);
    /// assert_eq!(trie.get("dogs"), Some(&3));
    /// ```
    pub fn delete<K: AsKey>(&mut self, key: K) -> &mut Self {
        self.remove(key);
        self
    }

    /// Removes `key`, returning the value stored under it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1);
    ///
    /// assert_eq!(trie.remove("a"), Some(1));
    /// assert_eq!(trie.remove("a"), None);
    /// ```
    pub fn remove<K: AsKey>(&mut self, key: K) -> Option<T> {
        // the root is never folded away, so its redundancy flag is dropped
        match self.root.remove(&key.as_key()) {
            Removal::Missing => None,
            Removal::Taken { value, .. } => {
                self.size -= 1;
                Some(value)
            }
        }
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// Prefixes of stored keys that were never added themselves are absent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("bar", 15).add("barstool", 0);
    ///
    /// assert_eq!(trie.get("barstool"), Some(&0));
    /// assert_eq!(trie.get("bars"), None);
    /// assert_eq!(trie.get("barkeep"), None);
    /// ```
    pub fn get<K: AsKey>(&self, key: K) -> Option<&T> {
        self.root.get(&key.as_key())
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1);
    ///
    /// if let Some(value) = trie.get_mut("a") {
    ///     *value = 10;
    /// }
    /// assert_eq!(trie.get("a"), Some(&10));
    /// ```
    pub fn get_mut<K: AsKey>(&mut self, key: K) -> Option<&mut T> {
        self.root.get_mut(&key.as_key())
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn has<K: AsKey>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Returns an iterator over the entries whose keys match `search`
    /// ignoring case, either because they continue the term or because the
    /// term continues past them along the same path.
    ///
    /// Results come in traversal order; they are not ranked.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let trie: RadixTrie<i32> = RadixTrie::from([("hello", 1), ("help", 2), ("he", 3), ("world", 4)]);
    ///
    /// let keys: Vec<_> = trie.fuzzy_get("HEL").map(|(key, _)| key).collect();
    /// assert_eq!(keys, ["he", "hello", "help"]);
    /// ```
    pub fn fuzzy_get<K: AsKey>(&self, search: K) -> FuzzyIter<'_, T> {
        FuzzyIter::new(&self.root, &search.as_key())
    }

    /// Returns an iterator over the key-value pairs of the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("bar", 15).add("barstool", 0).add("b", 2);
    ///
    /// let entries: Vec<_> = trie.entries().collect();
    /// assert_eq!(
    ///     entries,
    ///     [("b".to_string(), &2), ("bar".to_string(), &15), ("barstool".to_string(), &0)]
    /// );
    /// ```
    pub fn entries(&self) -> Iter<'_, T> {
        Iter::new(&self.root, self.size)
    }

    /// Returns an iterator over the keys of the trie, in traversal order.
    pub fn keys(&self) -> Keys<'_, T> {
        Keys {
            inner: self.entries(),
        }
    }

    /// Returns an iterator over the values of the trie, in traversal order.
    pub fn values(&self) -> Values<'_, T> {
        Values {
            inner: self.entries(),
        }
    }

    /// Calls `f` with every key-value pair, in traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let trie: RadixTrie<i32> = RadixTrie::from([("a", 1), ("ab", 2), ("abc", 3)]);
    ///
    /// let mut total = 0;
    /// trie.for_each(|_, value| total += value);
    /// assert_eq!(total, 6);
    /// ```
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &T),
    {
        for (key, value) in self.entries() {
            f(&key, value);
        }
    }
}

impl RadixTrie<bool> {
    /// Adds `key` with the `true` marker, for tries used as sets.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut words = RadixTrie::new();
    /// words.mark("dog").mark("doge");
    /// assert_eq!(words.get("doge"), Some(&true));
    /// ```
    pub fn mark<K: AsKey>(&mut self, key: K) -> &mut Self {
        self.add(key, true)
    }
}
