//! Rose tree - a multi-way tree with a datum at every node.
//!
//! A [`RoseTree`] is a datum plus an ordered list of child trees. Every
//! traversal in this module is pre-order: a node comes before its
//! children, and children are visited left to right.
//!
//! # Examples
//!
//! ```rust
//! use rosary::tree::RoseTree;
//!
//! let tree = RoseTree::with_children("a", [
//!     RoseTree::with_children("b", [RoseTree::leaf("e")]),
//!     RoseTree::leaf("c"),
//! ]);
//!
//! assert_eq!(tree.flatten().to_vec(), vec!["a", "b", "e", "c"]);
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.to_string(), "Tree a [Tree b [Tree e []], Tree c []]");
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::control::Tuple;
use crate::persistent::{PersistentList, PersistentListIterator};
use crate::typeclass::{Foldable, Functor, TypeConstructor};

/// A multi-way tree: a datum and an ordered list of children.
///
/// A tree always holds at least its root datum. Children are stored in a
/// [`PersistentList`], so cloning a tree clones the root datum and shares
/// the children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoseTree<T> {
    pub(super) datum: T,
    pub(super) children: PersistentList<RoseTree<T>>,
}

impl<T> RoseTree<T> {
    /// Creates a tree from a datum and its children.
    #[inline]
    #[must_use]
    pub const fn new(datum: T, children: PersistentList<Self>) -> Self {
        Self { datum, children }
    }

    /// Creates a tree without children.
    #[inline]
    #[must_use]
    pub const fn leaf(datum: T) -> Self {
        Self::new(datum, PersistentList::new())
    }

    /// Creates a tree whose children are taken from an iterator, in order.
    #[must_use]
    pub fn with_children<I>(datum: T, children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::new(datum, children.into_iter().collect())
    }

    #[inline]
    #[must_use]
    pub const fn datum(&self) -> &T {
        &self.datum
    }

    #[inline]
    #[must_use]
    pub const fn children(&self) -> &PersistentList<Self> {
        &self.children
    }

    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates over the data in pre-order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> RoseTreeIterator<'_, T> {
        RoseTreeIterator {
            subtrees: self.subtrees(),
        }
    }

    /// Iterates over every subtree in pre-order, starting with `self`.
    #[inline]
    #[must_use]
    pub fn subtrees(&self) -> Subtrees<'_, T> {
        Subtrees {
            root: Some(self),
            stack: Vec::new(),
        }
    }

    /// Returns the number of nodes, the root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subtrees().count()
    }

    /// Always `false`: a tree holds at least its root.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Applies a function to every datum, keeping the shape.
    ///
    /// The function is called in pre-order.
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> RoseTree<U>
    where
        F: FnMut(&T) -> U,
    {
        self.map_with(&mut function)
    }

    fn map_with<U, F>(&self, function: &mut F) -> RoseTree<U>
    where
        F: FnMut(&T) -> U,
    {
        let datum = function(&self.datum);
        let children = self.children.map(|child| child.map_with(&mut *function));
        RoseTree::new(datum, children)
    }

    /// Zips a list of values over the tree in pre-order.
    ///
    /// Each node is paired with the next value. A node that receives the
    /// last value becomes a leaf, and children left without values are
    /// dropped. Returns `None` when `values` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::persistent::PersistentList;
    /// use rosary::tree::RoseTree;
    ///
    /// let tree = RoseTree::with_children('a', [RoseTree::leaf('b'), RoseTree::leaf('c')]);
    /// let values: PersistentList<i32> = (1..=2).collect();
    ///
    /// let zipped = tree.map_list_over(&values, |n, c| format!("{c}{n}"));
    /// assert_eq!(zipped.map(|t| t.to_string()), Some("Tree a1 [Tree b2 []]".to_string()));
    /// ```
    #[must_use]
    pub fn map_list_over<A, U, F>(&self, values: &PersistentList<A>, mut function: F) -> Option<RoseTree<U>>
    where
        F: FnMut(&A, &T) -> U,
    {
        let values: Vec<&A> = values.iter().collect();
        self.map_slice_over(&values, &mut function)
    }

    fn map_slice_over<A, U, F>(&self, values: &[&A], function: &mut F) -> Option<RoseTree<U>>
    where
        F: FnMut(&A, &T) -> U,
    {
        let (head, tail) = values.split_first()?;
        let datum = function(head, &self.datum);
        if tail.is_empty() {
            return Some(RoseTree::leaf(datum));
        }

        let mut remaining = tail;
        let mut children = Vec::with_capacity(self.children.len());
        for child in &self.children {
            if remaining.is_empty() {
                break;
            }
            let (chunk, rest) = remaining.split_at(child.len().min(remaining.len()));
            remaining = rest;
            children.extend(child.map_slice_over(chunk, &mut *function));
        }

        Some(RoseTree::with_children(datum, children))
    }

    /// Applies a function to every datum together with its pre-order index
    /// (the root is 0).
    ///
    /// Always `Some` for a tree built through this API.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::tree::RoseTree;
    ///
    /// let tree = RoseTree::with_children("a", [RoseTree::leaf("b"), RoseTree::leaf("c")]);
    /// let indexed = tree.indexed_map(|index, datum| format!("{index}:{datum}"));
    /// assert_eq!(
    ///     indexed.map(|t| t.flatten().to_vec()),
    ///     Some(vec!["0:a".to_string(), "1:b".to_string(), "2:c".to_string()])
    /// );
    /// ```
    #[must_use]
    pub fn indexed_map<U, F>(&self, mut function: F) -> Option<RoseTree<U>>
    where
        F: FnMut(usize, &T) -> U,
    {
        let indices: PersistentList<usize> = (0..self.len()).collect();
        self.map_list_over(&indices, |index, datum| function(*index, datum))
    }
}

impl<T: Clone> RoseTree<T> {
    /// Splits the tree into its datum and its children.
    #[must_use]
    pub fn into_parts(mut self) -> (T, PersistentList<Self>) {
        let children = std::mem::take(&mut self.children);
        (self.datum.clone(), children)
    }

    /// Returns a copy of the tree with `child` as its first child.
    #[must_use]
    pub fn insert_child(&self, child: Self) -> Self {
        Self::new(self.datum.clone(), self.children.cons(child))
    }

    /// Returns a copy of the tree with `child` as its last child.
    #[must_use]
    pub fn append_child(&self, child: Self) -> Self {
        Self::new(
            self.datum.clone(),
            self.children.append(&PersistentList::singleton(child)),
        )
    }

    /// Returns every datum in pre-order.
    #[must_use]
    pub fn flatten(&self) -> PersistentList<T> {
        self.iter().cloned().collect()
    }

    /// Pairs every datum, in pre-order, with the flattened data of its
    /// children.
    #[must_use]
    pub fn tuples_of_datum_and_flat_children(&self) -> PersistentList<Tuple<T, PersistentList<T>>> {
        self.subtrees()
            .map(|subtree| {
                let descendants: PersistentList<T> =
                    subtree.subtrees().skip(1).map(|node| node.datum.clone()).collect();
                Tuple::pair(subtree.datum.clone(), descendants)
            })
            .collect()
    }

    /// Keeps the nodes whose datum satisfies `predicate`.
    ///
    /// A rejected node is removed together with its whole subtree, even if
    /// some descendant would pass. Returns `None` when the root is rejected.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Option<Self>
    where
        P: FnMut(&T) -> bool,
    {
        self.filter_with(&mut predicate)
    }

    fn filter_with<P>(&self, predicate: &mut P) -> Option<Self>
    where
        P: FnMut(&T) -> bool,
    {
        if !predicate(&self.datum) {
            return None;
        }
        let children = self
            .children
            .filter_map(|child| child.filter_with(&mut *predicate));
        Some(Self::new(self.datum.clone(), children))
    }

    /// Keeps a node when its datum satisfies `predicate` or when at least
    /// one of its descendants is kept.
    ///
    /// Children are filtered before their parent is tested. Returns `None`
    /// when nothing in the tree survives.
    #[must_use]
    pub fn filter_with_child_precedence<P>(&self, mut predicate: P) -> Option<Self>
    where
        P: FnMut(&T) -> bool,
    {
        self.filter_with_child_precedence_with(&mut predicate)
    }

    fn filter_with_child_precedence_with<P>(&self, predicate: &mut P) -> Option<Self>
    where
        P: FnMut(&T) -> bool,
    {
        let children = self
            .children
            .filter_map(|child| child.filter_with_child_precedence_with(&mut *predicate));
        if children.is_empty() {
            predicate(&self.datum).then(|| Self::leaf(self.datum.clone()))
        } else {
            Some(Self::new(self.datum.clone(), children))
        }
    }

    /// Sorts the children of every node by a key derived from their datum.
    /// The sort is stable.
    #[must_use]
    pub fn sort_by_key<K, F>(&self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_with(|first, second| key(first).cmp(&key(second)))
    }

    /// Sorts the children of every node with a comparator on their data.
    /// The sort is stable.
    #[must_use]
    pub fn sort_with<F>(&self, mut comparator: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_with_ref(&mut comparator)
    }

    fn sort_with_ref<F>(&self, comparator: &mut F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let children = self
            .children
            .sort_with(|first, second| comparator(&first.datum, &second.datum))
            .map(|child| child.sort_with_ref(&mut *comparator));
        Self::new(self.datum.clone(), children)
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// A pre-order iterator over the subtrees of a [`RoseTree`].
pub struct Subtrees<'a, T> {
    root: Option<&'a RoseTree<T>>,
    stack: Vec<PersistentListIterator<'a, RoseTree<T>>>,
}

impl<'a, T> Iterator for Subtrees<'a, T> {
    type Item = &'a RoseTree<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack.push(root.children.iter());
            return Some(root);
        }
        loop {
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(subtree) => {
                    self.stack.push(subtree.children.iter());
                    return Some(subtree);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// A pre-order iterator over references to the data of a [`RoseTree`].
pub struct RoseTreeIterator<'a, T> {
    subtrees: Subtrees<'a, T>,
}

impl<'a, T> Iterator for RoseTreeIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.subtrees.next().map(RoseTree::datum)
    }
}

impl<'a, T> IntoIterator for &'a RoseTree<T> {
    type Item = &'a T;
    type IntoIter = RoseTreeIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

/// Detaches the children of uniquely owned subtrees onto a work list before
/// they are freed, so a deep tree drops without one stack frame per level.
impl<T> Drop for RoseTree<T> {
    fn drop(&mut self) {
        let mut pending = vec![std::mem::take(&mut self.children)];
        while let Some(mut children) = pending.pop() {
            children.for_each_unshared_mut(|child| {
                pending.push(std::mem::take(&mut child.children));
            });
        }
    }
}

impl<T: fmt::Display> fmt::Display for RoseTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Tree {} {}", self.datum, self.children)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for RoseTree<T> {
    type Inner = T;
    type WithType<B> = RoseTree<B>;
}

impl<T: Clone> Functor for RoseTree<T> {
    fn fmap<B, F>(self, mut function: F) -> RoseTree<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(|datum| function(datum.clone()))
    }

    fn fmap_ref<B, F>(&self, function: F) -> RoseTree<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T: Clone> Foldable for RoseTree<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.iter().cloned().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let data: Vec<&T> = self.iter().collect();
        data.into_iter()
            .rev()
            .fold(init, |accumulator, datum| function(datum.clone(), accumulator))
    }

    /// A tree always holds its root datum.
    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}
