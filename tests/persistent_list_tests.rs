//! Unit tests for PersistentList.
//!
//! These tests cover construction, deconstruction, the list combinators
//! and the type class instances.

#![cfg(feature = "persistent")]

use rosary::control::{Either, Tuple};
use rosary::persistent::PersistentList;
use rosary::typeclass::{Foldable, Functor, Monoid, Semigroup};
use rstest::{fixture, rstest};

#[fixture]
fn one_to_five() -> PersistentList<i32> {
    (1..=5).collect()
}

// =============================================================================
// Construction and Deconstruction
// =============================================================================

#[rstest]
fn test_new_creates_empty_list() {
    let list: PersistentList<i32> = PersistentList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.head(), None);
}

#[rstest]
fn test_cons_adds_element_to_front() {
    let list = PersistentList::singleton(2).cons(1);
    assert_eq!(list.to_vec(), vec![1, 2]);
}

#[rstest]
fn test_cons_keeps_original_intact(one_to_five: PersistentList<i32>) {
    let extended = one_to_five.cons(0);
    assert_eq!(one_to_five.len(), 5);
    assert_eq!(extended.len(), 6);
    assert_eq!(extended.tail(), one_to_five);
}

#[rstest]
fn test_tail_of_empty_is_empty() {
    let list: PersistentList<i32> = PersistentList::new();
    assert!(list.tail().is_empty());
    assert!(list.uncons().is_none());
}

#[rstest]
fn test_uncons_splits_head_and_tail(one_to_five: PersistentList<i32>) {
    let (head, tail) = one_to_five.uncons().unwrap();
    assert_eq!(*head, 1);
    assert_eq!(tail.to_vec(), vec![2, 3, 4, 5]);
}

#[rstest]
#[case(0, Some(1))]
#[case(4, Some(5))]
#[case(5, None)]
fn test_get(one_to_five: PersistentList<i32>, #[case] index: usize, #[case] expected: Option<i32>) {
    assert_eq!(one_to_five.get(index).copied(), expected);
}

#[rstest]
fn test_from_slice_and_to_vec_preserve_order() {
    let list = PersistentList::from_slice(&["x", "y", "z"]);
    assert_eq!(list.to_vec(), vec!["x", "y", "z"]);
    assert_eq!(list.last(), Some(&"z"));
}

#[rstest]
fn test_repeat() {
    assert_eq!(PersistentList::repeat(3, 'a').to_vec(), vec!['a', 'a', 'a']);
    assert!(PersistentList::repeat(0, 'a').is_empty());
}

#[rstest]
#[case(1, 4, vec![1, 2, 3, 4])]
#[case(-1, 1, vec![-1, 0, 1])]
#[case(2, 2, vec![2])]
#[case(3, 2, vec![])]
fn test_range_is_inclusive(#[case] low: i64, #[case] high: i64, #[case] expected: Vec<i64>) {
    assert_eq!(PersistentList::range(low, high).to_vec(), expected);
}

// =============================================================================
// Combination and Slicing
// =============================================================================

#[rstest]
fn test_append_shares_second_list(one_to_five: PersistentList<i32>) {
    let front: PersistentList<i32> = vec![-1, 0].into();
    let joined = front.append(&one_to_five);
    assert_eq!(joined.to_vec(), vec![-1, 0, 1, 2, 3, 4, 5]);
    assert_eq!(joined.drop_first(2), one_to_five);
}

#[rstest]
fn test_append_with_empty(one_to_five: PersistentList<i32>) {
    let empty = PersistentList::new();
    assert_eq!(one_to_five.append(&empty), one_to_five);
    assert_eq!(empty.append(&one_to_five), one_to_five);
}

#[rstest]
#[case(0, vec![], vec![1, 2, 3, 4, 5])]
#[case(2, vec![1, 2], vec![3, 4, 5])]
#[case(9, vec![1, 2, 3, 4, 5], vec![])]
fn test_split_at(
    one_to_five: PersistentList<i32>,
    #[case] index: usize,
    #[case] before: Vec<i32>,
    #[case] after: Vec<i32>,
) {
    let (taken, dropped) = one_to_five.split_at(index);
    assert_eq!(taken.to_vec(), before);
    assert_eq!(dropped.to_vec(), after);
}

#[rstest]
fn test_intersperse() {
    let list: PersistentList<&str> = vec!["a", "b", "c"].into();
    assert_eq!(list.intersperse("-").to_vec(), vec!["a", "-", "b", "-", "c"]);
    assert!(PersistentList::<&str>::new().intersperse("-").is_empty());
}

#[rstest]
fn test_zip_stops_at_shorter(one_to_five: PersistentList<i32>) {
    let letters: PersistentList<char> = vec!['a', 'b'].into();
    let zipped = one_to_five.zip(&letters);
    assert_eq!(zipped.to_vec(), vec![Tuple::pair(1, 'a'), Tuple::pair(2, 'b')]);

    let (numbers, chars) = zipped.unzip();
    assert_eq!(numbers.to_vec(), vec![1, 2]);
    assert_eq!(chars.to_vec(), vec!['a', 'b']);
}

#[rstest]
fn test_concat_and_flat_map() {
    let nested: PersistentList<PersistentList<i32>> = PersistentList::from(vec![
        PersistentList::from(vec![1, 2]),
        PersistentList::new(),
        PersistentList::from(vec![3]),
    ]);
    assert_eq!(nested.concat().to_vec(), vec![1, 2, 3]);

    let list: PersistentList<i32> = vec![1, 2].into();
    let doubled = list.flat_map(|x| PersistentList::repeat(2, *x));
    assert_eq!(doubled.to_vec(), vec![1, 1, 2, 2]);
}

// =============================================================================
// Transformation and Queries
// =============================================================================

#[rstest]
fn test_map_and_indexed_map(one_to_five: PersistentList<i32>) {
    assert_eq!(one_to_five.map(|x| x * 2).to_vec(), vec![2, 4, 6, 8, 10]);
    assert_eq!(
        one_to_five.indexed_map(|index, x| index as i32 * x).to_vec(),
        vec![0, 2, 6, 12, 20]
    );
}

#[rstest]
fn test_map2_stops_at_shorter(one_to_five: PersistentList<i32>) {
    let tens: PersistentList<i32> = vec![10, 20, 30].into();
    assert_eq!(one_to_five.map2(&tens, |a, b| a + b).to_vec(), vec![11, 22, 33]);
}

#[rstest]
fn test_filter_and_partition(one_to_five: PersistentList<i32>) {
    assert_eq!(one_to_five.filter(|x| x % 2 == 1).to_vec(), vec![1, 3, 5]);

    let (even, odd) = one_to_five.partition(|x| x % 2 == 0);
    assert_eq!(even.to_vec(), vec![2, 4]);
    assert_eq!(odd.to_vec(), vec![1, 3, 5]);
}

#[rstest]
fn test_filter_map(one_to_five: PersistentList<i32>) {
    let halves = one_to_five.filter_map(|x| (x % 2 == 0).then_some(x / 2));
    assert_eq!(halves.to_vec(), vec![1, 2]);
}

#[rstest]
fn test_queries(one_to_five: PersistentList<i32>) {
    assert!(one_to_five.any(|x| *x == 3));
    assert!(one_to_five.all(|x| *x > 0));
    assert!(one_to_five.contains(&5));
    assert!(!one_to_five.contains(&6));
    assert_eq!(one_to_five.maximum(), Some(&5));
    assert_eq!(one_to_five.minimum(), Some(&1));
    assert_eq!(one_to_five.find_index(|x| *x > 3), Some(3));
    assert_eq!(one_to_five.find_index(|x| *x > 9), None);
    assert_eq!(one_to_five.sum(), 15);
    assert_eq!(one_to_five.product(), 120);
}

#[rstest]
fn test_reverse(one_to_five: PersistentList<i32>) {
    assert_eq!(one_to_five.reverse().to_vec(), vec![5, 4, 3, 2, 1]);
}

#[rstest]
fn test_sort_variants() {
    let list: PersistentList<i32> = vec![3, -1, 2, -3].into();
    assert_eq!(list.sort().to_vec(), vec![-3, -1, 2, 3]);
    assert_eq!(list.sort_by_key(|x| x.abs()).to_vec(), vec![-1, 2, 3, -3]);
    assert_eq!(list.sort_with(|a, b| b.cmp(a)).to_vec(), vec![3, 2, -1, -3]);
    assert_eq!(list.to_vec(), vec![3, -1, 2, -3]);
}

#[rstest]
fn test_lefts_and_rights_collect_every_value() {
    let results: PersistentList<Either<&str, i32>> = vec![
        Either::Right(1),
        Either::Left("a"),
        Either::Right(2),
        Either::Left("b"),
    ]
    .into();
    assert_eq!(results.lefts().to_vec(), vec!["a", "b"]);
    assert_eq!(results.rights().to_vec(), vec![1, 2]);
}

// =============================================================================
// Type Class Instances
// =============================================================================

#[rstest]
fn test_functor_fmap(one_to_five: PersistentList<i32>) {
    let strings = one_to_five.fmap(|x| x.to_string());
    assert_eq!(strings.to_vec(), vec!["1", "2", "3", "4", "5"]);
}

#[rstest]
fn test_fold_left_and_fold_right_order(one_to_five: PersistentList<i32>) {
    let left = one_to_five
        .clone()
        .fold_left(String::new(), |accumulator, x| format!("{accumulator}{x}"));
    let right = one_to_five.fold_right(String::new(), |x, accumulator| format!("{accumulator}{x}"));
    assert_eq!(left, "12345");
    assert_eq!(right, "54321");
}

#[rstest]
fn test_fold_right_builds_same_list() {
    let list: PersistentList<i32> = (0..10_000).collect();
    let rebuilt = list
        .clone()
        .fold_right(PersistentList::new(), |x, accumulator| accumulator.cons(x));
    assert_eq!(rebuilt, list);
}

#[rstest]
fn test_semigroup_and_monoid() {
    let first: PersistentList<i32> = vec![1, 2].into();
    let second: PersistentList<i32> = vec![3].into();
    assert_eq!(first.combine(second).to_vec(), vec![1, 2, 3]);
    assert!(PersistentList::<i32>::empty().is_empty());
}

#[rstest]
fn test_equality_ignores_sharing() {
    let built: PersistentList<i32> = vec![1, 2, 3].into();
    let consed = PersistentList::new().cons(3).cons(2).cons(1);
    assert_eq!(built, consed);
    assert_ne!(built, consed.tail());
}

#[rstest]
fn test_iterators(one_to_five: PersistentList<i32>) {
    assert_eq!(one_to_five.iter().len(), 5);
    let borrowed: Vec<&i32> = (&one_to_five).into_iter().collect();
    assert_eq!(borrowed.len(), 5);
    let owned: Vec<i32> = one_to_five.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3, 4, 5]);
}
