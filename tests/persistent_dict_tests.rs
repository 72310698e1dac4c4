//! Integration tests for PersistentDict.
//!
//! PersistentDict keeps its entries sorted by key with every key unique.
//! Every operation returns a new dictionary and leaves the receiver intact.

#![cfg(feature = "persistent")]

use rosary::control::{Maybe, Tuple};
use rosary::persistent::{PersistentDict, PersistentList};
use rosary::typeclass::{Monoid, Semigroup};
use rstest::{fixture, rstest};
use std::collections::HashMap;

#[fixture]
fn scores() -> PersistentDict<&'static str, i32> {
    [("carol", 7), ("alice", 3), ("bob", 5)].into_iter().collect()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_entries_are_sorted_by_key(scores: PersistentDict<&'static str, i32>) {
    assert_eq!(scores.keys().to_vec(), vec!["alice", "bob", "carol"]);
    assert_eq!(scores.values().to_vec(), vec![3, 5, 7]);
}

#[rstest]
fn test_from_list_keeps_last_duplicate() {
    let list: PersistentList<Tuple<i32, char>> = vec![
        Tuple::pair(2, 'a'),
        Tuple::pair(1, 'b'),
        Tuple::pair(2, 'c'),
    ]
    .into();
    let dict = PersistentDict::from_list(&list);
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.get(&2), Some(&'c'));
    assert_eq!(
        dict.to_list().to_vec(),
        vec![Tuple::pair(1, 'b'), Tuple::pair(2, 'c')]
    );
}

#[rstest]
fn test_from_hash_map_round_trip() {
    let mut map = HashMap::new();
    map.insert("x", 1);
    map.insert("y", 2);
    let dict = PersistentDict::from(map.clone());
    assert_eq!(dict.to_hash_map(), map);
}

// =============================================================================
// Lookup and Update
// =============================================================================

#[rstest]
#[case("alice", Some(3))]
#[case("carol", Some(7))]
#[case("dave", None)]
fn test_get(
    scores: PersistentDict<&'static str, i32>,
    #[case] key: &'static str,
    #[case] expected: Option<i32>,
) {
    assert_eq!(scores.get(&key).copied(), expected);
    assert_eq!(scores.contains_key(&key), expected.is_some());
}

#[rstest]
fn test_insert_replaces_and_preserves_original(scores: PersistentDict<&'static str, i32>) {
    let updated = scores.insert("bob", 50).insert("aaron", 1);
    assert_eq!(updated.get(&"bob"), Some(&50));
    assert_eq!(updated.keys().to_vec(), vec!["aaron", "alice", "bob", "carol"]);
    assert_eq!(scores.get(&"bob"), Some(&5));
    assert_eq!(scores.len(), 3);
}

#[rstest]
fn test_remove(scores: PersistentDict<&'static str, i32>) {
    let removed = scores.remove(&"bob");
    assert_eq!(removed.keys().to_vec(), vec!["alice", "carol"]);
    assert_eq!(scores.remove(&"zed"), scores);
}

#[rstest]
fn test_update_through_maybe(scores: PersistentDict<&'static str, i32>) {
    let incremented = scores.update("alice", |current| current.map(|score| score + 1));
    assert_eq!(incremented.get(&"alice"), Some(&4));

    let added = scores.update("dave", |current| match current {
        Maybe::Nothing => Maybe::Just(0),
        Maybe::Just(score) => Maybe::Just(score),
    });
    assert_eq!(added.get(&"dave"), Some(&0));

    let dropped = scores.update("carol", |_| Maybe::Nothing);
    assert!(!dropped.contains_key(&"carol"));
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
fn test_union_prefers_argument(scores: PersistentDict<&'static str, i32>) {
    let other: PersistentDict<&str, i32> = [("bob", 0), ("dave", 9)].into_iter().collect();
    let merged = scores.union(&other);
    assert_eq!(merged.keys().to_vec(), vec!["alice", "bob", "carol", "dave"]);
    assert_eq!(merged.get(&"bob"), Some(&0));
}

#[rstest]
fn test_intersect_and_diff(scores: PersistentDict<&'static str, i32>) {
    let other: PersistentDict<&str, ()> = [("bob", ()), ("zed", ())].into_iter().collect();
    assert_eq!(scores.intersect(&other).keys().to_vec(), vec!["bob"]);
    assert_eq!(scores.diff(&other).keys().to_vec(), vec!["alice", "carol"]);
}

#[rstest]
fn test_semigroup_is_union(scores: PersistentDict<&'static str, i32>) {
    let other = PersistentDict::singleton("alice", 100);
    let combined = scores.clone().combine(other);
    assert_eq!(combined.get(&"alice"), Some(&100));
    assert_eq!(PersistentDict::empty().combine(scores.clone()), scores);
}

// =============================================================================
// Traversal
// =============================================================================

#[rstest]
fn test_folds_follow_key_order(scores: PersistentDict<&'static str, i32>) {
    let left = scores.fold_left(String::new(), |accumulator, key, _| accumulator + key);
    let right = scores.fold_right(String::new(), |key, _, accumulator| accumulator + key);
    assert_eq!(left, "alicebobcarol");
    assert_eq!(right, "carolbobalice");
}

#[rstest]
fn test_filter_partition_and_map(scores: PersistentDict<&'static str, i32>) {
    let high = scores.filter(|_, score| *score > 4);
    assert_eq!(high.keys().to_vec(), vec!["bob", "carol"]);

    let (odd, even) = scores.partition(|_, score| score % 2 == 1);
    assert_eq!(odd.len(), 3);
    assert!(even.is_empty());

    let doubled = scores.map(|score| score * 2);
    assert_eq!(doubled.values().to_vec(), vec![6, 10, 14]);
}

#[rstest]
fn test_iter_yields_sorted_pairs(scores: PersistentDict<&'static str, i32>) {
    let pairs: Vec<(&&str, &i32)> = scores.iter().collect();
    assert_eq!(pairs, vec![(&"alice", &3), (&"bob", &5), (&"carol", &7)]);
}
