//! Rendering a trie as one flat JSON object, and building one back from it.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Error as _, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::RadixTrie;
use crate::error::Result;

impl<T: Serialize> Serialize for RadixTrie<T> {
    /// Serializes the entries as a map from full key to value, in traversal
    /// order.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RadixTrie<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(TrieVisitor(PhantomData))
    }
}

struct TrieVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for TrieVisitor<T> {
    type Value = RadixTrie<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with non-empty string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut trie = RadixTrie::new();
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            trie.try_add(key, value).map_err(A::Error::custom)?;
        }
        Ok(trie)
    }
}

impl<T: Serialize> RadixTrie<T> {
    /// Renders every entry as a single JSON object keyed by the full keys, in
    /// traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("bar", 15).add("barstool", 0).add("b", 2);
    ///
    /// assert_eq!(trie.to_text().unwrap(), r#"{"b":2,"bar":15,"barstool":0}"#);
    /// ```
    pub fn to_text(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
