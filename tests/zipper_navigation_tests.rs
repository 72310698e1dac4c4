//! Integration tests for Zipper navigation.
//!
//! Every move returns `None` when it cannot be made and leaves the
//! starting zipper untouched.

#![cfg(feature = "tree")]

mod common;

use common::{
    Tree, deep_tree, interesting_tree, leaf, multi_child_tree, no_child_tree, single_child_tree,
};
use rosary::persistent::PersistentList;
use rosary::tree::{Context, Zipper};
use rstest::rstest;

fn data(zipper: Option<Zipper<&'static str>>) -> Option<&'static str> {
    zipper.map(|zipper| *zipper.datum())
}

// =============================================================================
// Up and Down
// =============================================================================

#[rstest]
fn test_go_to_child_builds_breadcrumb(multi_child_tree: Tree) {
    let expected = Zipper::from_parts(
        leaf("c"),
        PersistentList::singleton(Context::new(
            "a",
            PersistentList::singleton(leaf("b")),
            PersistentList::singleton(leaf("d")),
        )),
    );
    assert_eq!(Zipper::new(multi_child_tree).go_to_child(1), Some(expected));
}

#[rstest]
fn test_go_to_child_out_of_range(multi_child_tree: Tree, no_child_tree: Tree) {
    assert!(Zipper::new(multi_child_tree).go_to_child(3).is_none());
    assert!(Zipper::new(no_child_tree).go_to_child(0).is_none());
}

#[rstest]
fn test_go_up_restores_parent(interesting_tree: Tree) {
    let root = Zipper::new(interesting_tree);
    let up = root.go_to_child(2).and_then(|zipper| zipper.go_up());
    assert_eq!(up, Some(root.clone()));
    assert!(root.go_up().is_none());
}

#[rstest]
fn test_go_to_rightmost_child(interesting_tree: Tree) {
    let root = Zipper::new(interesting_tree);
    assert_eq!(data(root.go_to_rightmost_child()), Some("d"));
    let leaf_focus = root.go_to(|datum| *datum == "k");
    assert!(leaf_focus.and_then(|zipper| zipper.go_to_rightmost_child()).is_none());
}

#[rstest]
fn test_depth_tracks_breadcrumbs(deep_tree: Tree) {
    let bottom = Zipper::new(deep_tree).go_to(|datum| *datum == "d");
    assert_eq!(bottom.as_ref().map(Zipper::depth), Some(3));
    assert_eq!(bottom.map(|zipper| zipper.go_to_root().is_root()), Some(true));
}

// =============================================================================
// Siblings
// =============================================================================

#[rstest]
fn test_go_left_and_right_between_siblings(multi_child_tree: Tree) {
    let middle = Zipper::new(multi_child_tree).go_to_child(1);
    assert_eq!(data(middle.clone().and_then(|zipper| zipper.go_left())), Some("b"));
    assert_eq!(data(middle.clone().and_then(|zipper| zipper.go_right())), Some("d"));

    let back = middle
        .clone()
        .and_then(|zipper| zipper.go_left())
        .and_then(|zipper| zipper.go_right());
    assert_eq!(back, middle);
}

#[rstest]
fn test_go_left_updates_context(multi_child_tree: Tree) {
    let left = Zipper::new(multi_child_tree)
        .go_to_child(2)
        .and_then(|zipper| zipper.go_left());
    let expected = Zipper::from_parts(
        leaf("c"),
        PersistentList::singleton(Context::new(
            "a",
            PersistentList::singleton(leaf("b")),
            PersistentList::singleton(leaf("d")),
        )),
    );
    assert_eq!(left, Some(expected));
}

#[rstest]
fn test_no_sibling_in_direction(multi_child_tree: Tree, single_child_tree: Tree) {
    let first = Zipper::new(multi_child_tree.clone()).go_to_child(0);
    assert!(first.and_then(|zipper| zipper.go_left()).is_none());

    let last = Zipper::new(multi_child_tree).go_to_child(2);
    assert!(last.and_then(|zipper| zipper.go_right()).is_none());

    let only = Zipper::new(single_child_tree).go_to_child(0);
    assert!(only.clone().and_then(|zipper| zipper.go_left()).is_none());
    assert!(only.and_then(|zipper| zipper.go_right()).is_none());
}

#[rstest]
fn test_root_has_no_siblings(interesting_tree: Tree) {
    let root = Zipper::new(interesting_tree);
    assert!(root.go_left().is_none());
    assert!(root.go_right().is_none());
}

// =============================================================================
// Pre-order Traversal
// =============================================================================

#[rstest]
#[case(interesting_tree())]
#[case(deep_tree())]
#[case(multi_child_tree())]
#[case(no_child_tree())]
fn test_go_to_next_enumerates_flatten(#[case] tree: Tree) {
    let mut visited = Vec::new();
    let mut current = Some(Zipper::new(tree.clone()));
    while let Some(zipper) = current {
        visited.push(*zipper.datum());
        current = zipper.go_to_next();
    }
    assert_eq!(visited, tree.flatten().to_vec());
}

#[rstest]
fn test_go_to_previous_descends_into_left_sibling(interesting_tree: Tree) {
    let at_c = Zipper::new(interesting_tree).go_to_child(1);
    assert_eq!(data(at_c.and_then(|zipper| zipper.go_to_previous())), Some("k"));
}

#[rstest]
fn test_go_to_previous_falls_back_to_parent(interesting_tree: Tree) {
    let at_f = Zipper::new(interesting_tree).go_to(|datum| *datum == "f");
    assert_eq!(data(at_f.and_then(|zipper| zipper.go_to_previous())), Some("c"));
}

#[rstest]
fn test_go_to_next_climbs_out_of_subtree(interesting_tree: Tree) {
    let at_k = Zipper::new(interesting_tree).go_to(|datum| *datum == "k");
    assert_eq!(data(at_k.and_then(|zipper| zipper.go_to_next())), Some("c"));
}

#[rstest]
fn test_previous_inverts_next(interesting_tree: Tree) {
    let mut current = Zipper::new(interesting_tree);
    while let Some(next) = current.go_to_next() {
        assert_eq!(next.go_to_previous(), Some(current.clone()));
        current = next;
    }
    assert_eq!(current.datum(), &"j");
}

// =============================================================================
// Root and Search
// =============================================================================

#[rstest]
fn test_go_to_root_rebuilds_tree(interesting_tree: Tree) {
    let deep = Zipper::new(interesting_tree.clone())
        .go_to_child(0)
        .and_then(|zipper| zipper.go_to_child(0))
        .and_then(|zipper| zipper.go_to_child(0));
    assert_eq!(data(deep.clone()), Some("k"));
    assert_eq!(deep.map(|zipper| zipper.go_to_root()), Some(Zipper::new(interesting_tree)));
}

#[rstest]
fn test_go_to_matches_explicit_path(interesting_tree: Tree) {
    let root = Zipper::new(interesting_tree);
    let searched = root.go_to(|datum| *datum == "h");
    let walked = root
        .go_to_child(2)
        .and_then(|zipper| zipper.go_to_child(0));
    assert!(searched.is_some());
    assert_eq!(searched, walked);
}

#[rstest]
fn test_go_to_searches_from_root(interesting_tree: Tree) {
    let at_j = Zipper::new(interesting_tree).go_to(|datum| *datum == "j");
    let back_to_b = at_j.and_then(|zipper| zipper.go_to(|datum| *datum == "b"));
    assert_eq!(back_to_b.as_ref().map(Zipper::depth), Some(1));
    assert_eq!(data(back_to_b), Some("b"));
}

#[rstest]
fn test_go_to_without_match(interesting_tree: Tree) {
    assert!(Zipper::new(interesting_tree).go_to(|datum| *datum == "FOO").is_none());
}

#[rstest]
fn test_navigation_leaves_input_untouched(interesting_tree: Tree) {
    let root = Zipper::new(interesting_tree.clone());
    let _moved = root.go_to_child(1).and_then(|zipper| zipper.go_right());
    assert_eq!(root.focus(), &interesting_tree);
}
