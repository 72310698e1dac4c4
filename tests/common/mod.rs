//! Tree fixtures shared by the tree and zipper test suites.

#![allow(dead_code)]

use rosary::tree::RoseTree;
use rstest::fixture;

pub type Tree = RoseTree<&'static str>;

pub fn node(datum: &'static str, children: impl IntoIterator<Item = Tree>) -> Tree {
    RoseTree::with_children(datum, children)
}

pub fn leaf(datum: &'static str) -> Tree {
    RoseTree::leaf(datum)
}

/// `a[b[e[k]], c[f, g], d[h, i, j]]`
#[fixture]
pub fn interesting_tree() -> Tree {
    node(
        "a",
        [
            node("b", [node("e", [leaf("k")])]),
            node("c", [leaf("f"), leaf("g")]),
            node("d", [leaf("h"), leaf("i"), leaf("j")]),
        ],
    )
}

/// `a[b, c, d]`
#[fixture]
pub fn multi_child_tree() -> Tree {
    node("a", [leaf("b"), leaf("c"), leaf("d")])
}

/// `a[b[c[d]]]`
#[fixture]
pub fn deep_tree() -> Tree {
    node("a", [node("b", [node("c", [leaf("d")])])])
}

/// `a[b]`
#[fixture]
pub fn single_child_tree() -> Tree {
    node("a", [leaf("b")])
}

/// `a`
#[fixture]
pub fn no_child_tree() -> Tree {
    leaf("a")
}

/// `a[c[g, f], b[e[k]], d[i, h, j]]`
#[fixture]
pub fn unordered_tree() -> Tree {
    node(
        "a",
        [
            node("c", [leaf("g"), leaf("f")]),
            node("b", [node("e", [leaf("k")])]),
            node("d", [leaf("i"), leaf("h"), leaf("j")]),
        ],
    )
}

/// `a[d[j, i, h], c[g, f], b[e[k]]]`
#[fixture]
pub fn reverse_sorted_tree() -> Tree {
    node(
        "a",
        [
            node("d", [leaf("j"), leaf("i"), leaf("h")]),
            node("c", [leaf("g"), leaf("f")]),
            node("b", [node("e", [leaf("k")])]),
        ],
    )
}
