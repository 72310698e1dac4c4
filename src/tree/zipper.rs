//! Zipper over a [`RoseTree`].
//!
//! A [`Zipper`] is a focused subtree plus the breadcrumbs needed to
//! rebuild every ancestor. Each breadcrumb is a [`Context`]: the parent's
//! datum and the siblings to the left and right of the path taken.
//!
//! Edits only touch the focus. Ancestors are rebuilt when the zipper moves
//! up, so a sequence of edits followed by [`Zipper::go_to_root`] yields
//! the whole modified tree.
//!
//! # Examples
//!
//! ```rust
//! use rosary::tree::{RoseTree, Zipper};
//!
//! let tree = RoseTree::with_children("a", [RoseTree::leaf("b"), RoseTree::leaf("c")]);
//!
//! let edited = Zipper::new(tree)
//!     .go_to_child(1)
//!     .map(|zipper| zipper.replace_datum("z"))
//!     .map(|zipper| zipper.into_tree());
//!
//! assert_eq!(
//!     edited,
//!     Some(RoseTree::with_children("a", [RoseTree::leaf("b"), RoseTree::leaf("z")]))
//! );
//! ```

use std::fmt;

use super::RoseTree;
use crate::persistent::PersistentList;

/// A breadcrumb: what is needed to rebuild the parent of the focus.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Context<T> {
    pub(super) previous: T,
    pub(super) before: PersistentList<RoseTree<T>>,
    pub(super) after: PersistentList<RoseTree<T>>,
}

impl<T> Context<T> {
    /// Creates a breadcrumb from the parent datum and the siblings left
    /// and right of the focus, both in tree order.
    #[inline]
    #[must_use]
    pub const fn new(
        previous: T,
        before: PersistentList<RoseTree<T>>,
        after: PersistentList<RoseTree<T>>,
    ) -> Self {
        Self {
            previous,
            before,
            after,
        }
    }

    /// The datum of the parent node.
    #[inline]
    #[must_use]
    pub const fn previous(&self) -> &T {
        &self.previous
    }

    #[inline]
    #[must_use]
    pub const fn before(&self) -> &PersistentList<RoseTree<T>> {
        &self.before
    }

    #[inline]
    #[must_use]
    pub const fn after(&self) -> &PersistentList<RoseTree<T>> {
        &self.after
    }
}

impl<T: fmt::Display> fmt::Display for Context<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Context {} ({}) ({})",
            self.previous, self.before, self.after
        )
    }
}

/// A cursor into a [`RoseTree`].
///
/// The most recent breadcrumb (the direct parent of the focus) is the head
/// of `breadcrumbs`. A zipper with no breadcrumbs is focused on the root.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zipper<T> {
    pub(super) focus: RoseTree<T>,
    pub(super) breadcrumbs: PersistentList<Context<T>>,
}

impl<T> Zipper<T> {
    /// Creates a zipper focused on the root of `tree`.
    #[inline]
    #[must_use]
    pub const fn new(tree: RoseTree<T>) -> Self {
        Self::from_parts(tree, PersistentList::new())
    }

    /// Creates a zipper from a focus and its breadcrumbs, nearest parent
    /// first.
    #[inline]
    #[must_use]
    pub const fn from_parts(focus: RoseTree<T>, breadcrumbs: PersistentList<Context<T>>) -> Self {
        Self { focus, breadcrumbs }
    }

    /// The focused subtree.
    #[inline]
    #[must_use]
    pub const fn focus(&self) -> &RoseTree<T> {
        &self.focus
    }

    #[inline]
    #[must_use]
    pub const fn breadcrumbs(&self) -> &PersistentList<Context<T>> {
        &self.breadcrumbs
    }

    /// The datum at the focus.
    #[inline]
    #[must_use]
    pub const fn datum(&self) -> &T {
        self.focus.datum()
    }

    /// Number of edges between the root and the focus.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.breadcrumbs.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.breadcrumbs.is_empty()
    }
}

impl<T: Clone> Zipper<T> {
    /// Rebuilds the whole tree, with every edit made so far.
    #[must_use]
    pub fn into_tree(self) -> RoseTree<T> {
        self.go_to_root().focus
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Replaces the focused datum with `function(datum)`.
    #[must_use]
    pub fn update_datum<F>(&self, function: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        let focus = RoseTree::new(function(&self.focus.datum), self.focus.children.clone());
        Self::from_parts(focus, self.breadcrumbs.clone())
    }

    #[must_use]
    pub fn replace_datum(&self, datum: T) -> Self {
        self.update_datum(|_| datum)
    }

    /// Replaces the children of the focus wholesale.
    #[must_use]
    pub fn update_children(&self, children: PersistentList<RoseTree<T>>) -> Self {
        let focus = RoseTree::new(self.focus.datum.clone(), children);
        Self::from_parts(focus, self.breadcrumbs.clone())
    }

    /// Adds `child` as the first child of the focus. The focus does not move.
    #[must_use]
    pub fn insert_child_tree(&self, child: RoseTree<T>) -> Self {
        Self::from_parts(self.focus.insert_child(child), self.breadcrumbs.clone())
    }

    /// Adds `child` as the last child of the focus. The focus does not move.
    #[must_use]
    pub fn append_child_tree(&self, child: RoseTree<T>) -> Self {
        Self::from_parts(self.focus.append_child(child), self.breadcrumbs.clone())
    }
}

impl<T> From<RoseTree<T>> for Zipper<T> {
    #[inline]
    fn from(tree: RoseTree<T>) -> Self {
        Self::new(tree)
    }
}

impl<T: fmt::Display> fmt::Display for Zipper<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Zipper ({}) ({})", self.focus, self.breadcrumbs)
    }
}
