use super::*;
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::collections::HashSet;

fn key_value_pairs(
    min_pairs: usize,
    max_pairs: usize,
) -> impl Strategy<Value = Vec<(String, i32)>> {
    proptest::collection::vec(
        (
            "[a-zA-Z0-9]{1,10}".prop_map(String::from),
            proptest::num::i32::ANY,
        ),
        min_pairs..max_pairs,
    )
}

// A tiny alphabet so that keys share prefixes and edges get split and merged.
fn dense_key() -> impl Strategy<Value = String> {
    "[abc]{1,6}".prop_map(String::from)
}

fn prefixed_keys(
    prefixes: Vec<&'static str>,
    min_pairs: usize,
    max_pairs: usize,
) -> impl Strategy<Value = Vec<(String, i32)>> {
    let prefixes_strategy = proptest::sample::select(prefixes);
    proptest::collection::vec(
        (
            prefixes_strategy.prop_flat_map(|prefix| {
                "[a-zA-Z0-9]{0,8}".prop_map(move |s| format!("{}{}", prefix, s))
            }),
            proptest::num::i32::ANY,
        ),
        min_pairs..max_pairs,
    )
}

#[derive(Debug, Clone)]
enum Operation {
    Add(String, i32),
    Delete(String),
}

fn operations(max_ops: usize) -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            3 => (dense_key(), proptest::num::i32::ANY)
                .prop_map(|(key, value)| Operation::Add(key, value)),
            2 => dense_key().prop_map(Operation::Delete),
        ],
        1..max_ops,
    )
}

fn build(pairs: &[(String, i32)]) -> (RadixTrie<i32>, BTreeMap<String, i32>) {
    let mut trie = RadixTrie::new();
    let mut reference_map = BTreeMap::new();
    for (key, value) in pairs {
        trie.add(key, *value);
        reference_map.insert(key.clone(), *value);
    }
    (trie, reference_map)
}

fn assert_matches_model(trie: &RadixTrie<i32>, reference_map: &BTreeMap<String, i32>) {
    assert_eq!(trie.root.assert_invariants(true), trie.len());
    assert_eq!(trie.len(), reference_map.len());

    let entries: BTreeMap<String, i32> = trie.entries().map(|(k, v)| (k, *v)).collect();
    assert_eq!(&entries, reference_map);
}

#[test]
fn test_radix_trie_deep_chain() {
    let mut trie = RadixTrie::new();
    let keys: Vec<String> = (1..=50).map(|n| "x".repeat(n)).collect();

    for (i, key) in keys.iter().enumerate() {
        trie.add(key, i);
    }
    assert_eq!(trie.root.assert_invariants(true), 50);

    // every other key goes, leaving nodes that have to be merged away
    for key in keys.iter().step_by(2) {
        trie.delete(key);
    }
    assert_eq!(trie.root.assert_invariants(true), 25);

    for (i, key) in keys.iter().enumerate() {
        let expected = (i % 2 == 1).then_some(i);
        assert_eq!(trie.get(key).copied(), expected);
    }
}

#[test]
fn test_empty_radix_trie_behavior() {
    let trie: RadixTrie<i32> = RadixTrie::new();

    assert_eq!(trie.len(), 0);
    assert!(trie.is_empty());
    assert_eq!(trie.get("anything"), None);
    assert!(!trie.has("anything"));
    assert_eq!(trie.entries().count(), 0);
    assert_eq!(trie.fuzzy_get("a").count(), 0);
    assert_eq!(trie.root.assert_invariants(true), 0);
}

proptest! {
    #[test]
    fn added_keys_are_found(pairs in key_value_pairs(1, 100)) {
        let (trie, reference_map) = build(&pairs);

        for (key, value) in &reference_map {
            prop_assert_eq!(trie.get(key), Some(value));
            prop_assert!(trie.has(key));
        }
        assert_matches_model(&trie, &reference_map);
    }

    #[test]
    fn random_operations_match_btreemap(ops in operations(200)) {
        let mut trie = RadixTrie::new();
        let mut reference_map = BTreeMap::new();

        for op in ops {
            match op {
                Operation::Add(key, value) => {
                    trie.add(&key, value);
                    reference_map.insert(key, value);
                }
                Operation::Delete(key) => {
                    let removed = trie.remove(&key);
                    prop_assert_eq!(removed, reference_map.remove(&key));
                }
            }
            assert_matches_model(&trie, &reference_map);
        }

        for key in ["a", "b", "c", "ab", "abc", "cba"] {
            prop_assert_eq!(trie.get(key), reference_map.get(key));
        }
    }

    #[test]
    fn traversal_visits_every_entry_once(pairs in prefixed_keys(vec!["app", "apple", "ban", "band"], 1, 60)) {
        let (trie, reference_map) = build(&pairs);

        let keys: Vec<String> = trie.keys().collect();
        let unique: HashSet<&String> = keys.iter().collect();
        prop_assert_eq!(unique.len(), keys.len());
        prop_assert_eq!(keys.len(), reference_map.len());
        prop_assert_eq!(trie.entries().len(), reference_map.len());
        prop_assert_eq!(trie.values().count(), reference_map.len());

        let mut visited = 0;
        trie.for_each(|key, value| {
            assert_eq!(reference_map.get(key), Some(value));
            visited += 1;
        });
        prop_assert_eq!(visited, reference_map.len());

        let owned: BTreeMap<String, i32> = trie.clone().into_iter().collect();
        prop_assert_eq!(owned, reference_map);
    }

    #[test]
    fn add_then_delete_restores_shape(
        keys in proptest::collection::hash_set(dense_key(), 0..30),
        extra in dense_key(),
    ) {
        prop_assume!(!keys.contains(&extra));

        let mut trie: RadixTrie<usize> = keys.iter().map(|k| (k.as_str(), k.len())).collect();
        let before = trie.root.layout();

        trie.add(&extra, 0);
        trie.delete(&extra);

        prop_assert_eq!(trie.root.layout(), before);
        prop_assert_eq!(trie.root.assert_invariants(true), keys.len());
    }

    #[test]
    fn shape_ignores_insertion_order(keys in proptest::collection::hash_set(dense_key(), 1..30)) {
        let keys: Vec<String> = keys.into_iter().collect();

        let forward: RadixTrie<()> = keys.iter().map(|k| (k.as_str(), ())).collect();
        let backward: RadixTrie<()> = keys.iter().rev().map(|k| (k.as_str(), ())).collect();

        prop_assert_eq!(forward.root.layout(), backward.root.layout());
        prop_assert_eq!(&forward, &backward);
    }

    #[test]
    fn overwriting_keeps_len(pairs in key_value_pairs(1, 100)) {
        let (mut trie, mut reference_map) = build(&pairs);
        let len = trie.len();

        for (key, value) in &pairs {
            let bumped = value.wrapping_add(1);
            trie.add(key, bumped);
            reference_map.insert(key.clone(), bumped);
        }

        prop_assert_eq!(trie.len(), len);
        assert_matches_model(&trie, &reference_map);
    }

    #[test]
    fn fuzzy_get_finds_case_insensitive_prefix_matches(
        pairs in key_value_pairs(1, 80),
        search in "[a-zA-Z0-9]{1,4}",
    ) {
        let (trie, reference_map) = build(&pairs);
        let folded = search.to_lowercase();

        let found: Vec<(String, i32)> = trie.fuzzy_get(&search).map(|(k, v)| (k, *v)).collect();
        let found_keys: HashSet<&str> = found.iter().map(|(k, _)| k.as_str()).collect();
        prop_assert_eq!(found_keys.len(), found.len());

        for (key, value) in &found {
            prop_assert_eq!(reference_map.get(key), Some(value));
        }
        for key in reference_map.keys() {
            let folded_key = key.to_lowercase();
            if folded_key.starts_with(&folded) || folded.starts_with(&folded_key) {
                prop_assert!(found_keys.contains(key.as_str()), "{key:?} missing for {search:?}");
            }
        }
    }

    #[test]
    fn deleting_everything_empties_the_trie(pairs in key_value_pairs(1, 100)) {
        let (mut trie, reference_map) = build(&pairs);

        for key in reference_map.keys() {
            trie.delete(key);
        }

        prop_assert!(trie.is_empty());
        prop_assert!(trie.root.edges.is_empty());
        prop_assert_eq!(trie.entries().count(), 0);
    }
}

#[cfg(feature = "serde")]
proptest! {
    #[test]
    fn text_parses_back_to_entries(pairs in key_value_pairs(0, 50)) {
        let (trie, reference_map) = build(&pairs);

        let text = trie.to_text().unwrap();
        let parsed: BTreeMap<String, i32> = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(parsed, reference_map);

        let rebuilt: RadixTrie<i32> = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(rebuilt, trie);
    }
}
