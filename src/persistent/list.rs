//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`PersistentList`], an immutable singly-linked list
//! that uses structural sharing for efficient operations. It is the
//! building block for the ordered dictionary and for the children and
//! breadcrumbs of the rose tree.
//!
//! # Overview
//!
//! - O(1) prepend (`cons`)
//! - O(1) head and tail access
//! - O(1) length (cached)
//! - O(n) index access, append and reverse
//!
//! All operations return new lists without modifying the original.
//!
//! # Examples
//!
//! ```rust
//! use rosary::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! let evens = PersistentList::range(1, 10).filter(|x| x % 2 == 0);
//! assert_eq!(evens.to_string(), "[2, 4, 6, 8, 10]");
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, Product, Sum};

use super::ReferenceCounter;
use crate::control::{Either, Tuple};
use crate::typeclass::{Foldable, Functor, Monoid, Semigroup, TypeConstructor};

/// Internal node structure for the persistent list.
struct Node<T> {
    element: T,
    next: Option<ReferenceCounter<Self>>,
}

/// Unlinks uniquely owned successors one at a time so that dropping a long
/// list does not recurse once per node.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(node) = next {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut owned) => next = owned.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `cons`    | O(1)       |
/// | `head`    | O(1)       |
/// | `tail`    | O(1)       |
/// | `len`     | O(1)       |
/// | `get`     | O(n)       |
/// | `append`  | O(n)       |
/// | `reverse` | O(n)       |
/// | `sort`    | O(n log n) |
///
/// # Examples
///
/// ```rust
/// use rosary::persistent::PersistentList;
///
/// let list = PersistentList::singleton(42);
/// assert_eq!(list.head(), Some(&42));
/// ```
pub struct PersistentList<T> {
    head: Option<ReferenceCounter<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> PersistentList<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = PersistentList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Builds a list from a Vec, keeping the Vec's order.
    ///
    /// Consumes the Vec from the end with `pop`, so no reversal is needed.
    pub(crate) fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Prepends an element to the front of the list.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    // =========================================================================
    // Deconstruction
    // =========================================================================

    /// Returns a reference to the first element, or `None` for an empty list.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// The tail of an empty list is the empty list. The result shares its
    /// nodes with `self`.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length.saturating_sub(1),
        })
    }

    /// Decomposes the list into its head and tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(2).cons(1);
    /// if let Some((head, tail)) = list.uncons() {
    ///     assert_eq!(*head, 1);
    ///     assert_eq!(tail.head(), Some(&2));
    /// }
    /// ```
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length.saturating_sub(1),
            };
            (&node.element, tail)
        })
    }

    /// Returns a reference to the element at `index`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut current = &self.head;
        let mut remaining = index;

        while let Some(node) = current {
            if remaining == 0 {
                return Some(&node.element);
            }
            remaining -= 1;
            current = &node.next;
        }
        None
    }

    /// Returns a reference to the last element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a borrowing iterator from head to last.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }

    /// Visits the elements held by nodes that no other list shares, from the
    /// head, stopping at the first shared node.
    #[cfg_attr(not(feature = "tree"), allow(dead_code))]
    pub(crate) fn for_each_unshared_mut<F>(&mut self, mut function: F)
    where
        F: FnMut(&mut T),
    {
        let mut current = self.head.as_mut();
        while let Some(node) = current {
            match ReferenceCounter::get_mut(node) {
                Some(node) => {
                    function(&mut node.element);
                    current = node.next.as_mut();
                }
                None => break,
            }
        }
    }

    // =========================================================================
    // Transformation (no Clone required)
    // =========================================================================

    /// Applies a function to every element, producing a new list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=3).collect();
    /// assert_eq!(list.map(|x| x * 10).to_vec(), vec![10, 20, 30]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> PersistentList<U>
    where
        F: FnMut(&T) -> U,
    {
        PersistentList::build_from_vec(self.iter().map(function).collect())
    }

    /// Like [`PersistentList::map`], also passing the 0-based position.
    #[must_use]
    pub fn indexed_map<U, F>(&self, mut function: F) -> PersistentList<U>
    where
        F: FnMut(usize, &T) -> U,
    {
        PersistentList::build_from_vec(
            self.iter()
                .enumerate()
                .map(|(index, element)| function(index, element))
                .collect(),
        )
    }

    /// Maps every element and keeps only the `Some` results.
    #[must_use]
    pub fn filter_map<U, F>(&self, function: F) -> PersistentList<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        PersistentList::build_from_vec(self.iter().filter_map(function).collect())
    }

    /// Pairs up elements of two lists with a function, stopping at the
    /// shorter list.
    #[must_use]
    pub fn map2<U, V, F>(&self, other: &PersistentList<U>, mut function: F) -> PersistentList<V>
    where
        F: FnMut(&T, &U) -> V,
    {
        PersistentList::build_from_vec(
            self.iter()
                .zip(other.iter())
                .map(|(first, second)| function(first, second))
                .collect(),
        )
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    #[must_use]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns `true` if some element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Returns the largest element; the last one wins among equals.
    #[must_use]
    pub fn maximum(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.iter().max()
    }

    /// Returns the smallest element; the first one wins among equals.
    #[must_use]
    pub fn minimum(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.iter().min()
    }

    /// Returns the position of the first element satisfying `predicate`.
    #[must_use]
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }
}

impl<T: Clone> PersistentList<T> {
    // =========================================================================
    // Construction (Clone required)
    // =========================================================================

    /// Creates a list from a slice, cloning each element.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        for element in slice.iter().rev() {
            head = Some(ReferenceCounter::new(Node {
                element: element.clone(),
                next: head,
            }));
        }
        Self {
            head,
            length: slice.len(),
        }
    }

    /// Creates a list holding `count` copies of `value`.
    #[must_use]
    pub fn repeat(count: usize, value: T) -> Self {
        let mut result = Self::new();
        for _ in 0..count {
            result = result.cons(value.clone());
        }
        result
    }

    /// Copies the elements into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Returns a list with the elements of `self` followed by those of `other`.
    ///
    /// Only `self` is copied; `other` is shared as the new list's tail.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut elements: Vec<T> = self.to_vec();
        let mut result = other.clone();
        while let Some(element) = elements.pop() {
            result = result.cons(element);
        }
        result
    }

    /// Inserts `separator` between every two adjacent elements.
    #[must_use]
    pub fn intersperse(&self, separator: T) -> Self {
        let mut iter = self.iter();
        let Some(first) = iter.next() else {
            return Self::new();
        };

        let mut result = Vec::with_capacity(self.len() * 2 - 1);
        result.push(first.clone());

        for element in iter {
            result.push(separator.clone());
            result.push(element.clone());
        }

        Self::build_from_vec(result)
    }

    /// Pairs up elements of two lists, stopping at the shorter list.
    #[must_use]
    pub fn zip<U: Clone>(&self, other: &PersistentList<U>) -> PersistentList<Tuple<T, U>> {
        self.map2(other, |first, second| {
            Tuple::pair(first.clone(), second.clone())
        })
    }

    /// Maps every element to a list and concatenates the results.
    #[must_use]
    pub fn flat_map<U: Clone, F>(&self, mut function: F) -> PersistentList<U>
    where
        F: FnMut(&T) -> PersistentList<U>,
    {
        let mut elements = Vec::new();
        for element in self {
            elements.extend(function(element).iter().cloned());
        }
        PersistentList::build_from_vec(elements)
    }

    // =========================================================================
    // Transformation (Clone required)
    // =========================================================================

    /// Keeps the elements satisfying `predicate`, in order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::build_from_vec(
            self.iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    /// Splits into the elements that satisfy `predicate` and those that do not.
    #[must_use]
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let mut pass = Vec::new();
        let mut fail = Vec::new();

        for element in self {
            if predicate(element) {
                pass.push(element.clone());
            } else {
                fail.push(element.clone());
            }
        }

        (Self::build_from_vec(pass), Self::build_from_vec(fail))
    }

    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut result = Self::new();
        for element in self {
            result = result.cons(element.clone());
        }
        result
    }

    // =========================================================================
    // Slicing
    // =========================================================================

    /// Returns the first `count` elements (all of them if `count` exceeds the length).
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        Self::build_from_vec(self.iter().take(count).cloned().collect())
    }

    /// Returns the list without its first `count` elements. Shares structure.
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..count.min(self.len()) {
            current = current.tail();
        }
        current
    }

    /// Equivalent to `(self.take(index), self.drop_first(index))`.
    #[must_use]
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        (self.take(index), self.drop_first(index))
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Sorts ascending. The sort is stable.
    #[must_use]
    pub fn sort(&self) -> Self
    where
        T: Ord,
    {
        self.sort_with(Ord::cmp)
    }

    /// Sorts ascending by a derived key. The sort is stable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::persistent::PersistentList;
    ///
    /// let words: PersistentList<&str> = vec!["ccc", "a", "bb"].into_iter().collect();
    /// assert_eq!(words.sort_by_key(|w| w.len()).to_vec(), vec!["a", "bb", "ccc"]);
    /// ```
    #[must_use]
    pub fn sort_by_key<K, F>(&self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_with(|first, second| key(first).cmp(&key(second)))
    }

    /// Sorts with a comparator. The sort is stable.
    #[must_use]
    pub fn sort_with<F>(&self, comparator: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut elements = self.to_vec();
        elements.sort_by(comparator);
        Self::build_from_vec(elements)
    }

    // =========================================================================
    // Numeric Folds
    // =========================================================================

    #[must_use]
    pub fn sum(&self) -> T
    where
        T: Sum,
    {
        self.iter().cloned().sum()
    }

    #[must_use]
    pub fn product(&self) -> T
    where
        T: Product,
    {
        self.iter().cloned().product()
    }
}

impl PersistentList<i64> {
    /// Creates the list `[low, low + 1, ..., high]`; empty when `low > high`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::persistent::PersistentList;
    ///
    /// assert_eq!(PersistentList::range(1, 4).to_vec(), vec![1, 2, 3, 4]);
    /// assert!(PersistentList::range(3, 2).is_empty());
    /// ```
    #[must_use]
    pub fn range(low: i64, high: i64) -> Self {
        (low..=high).collect()
    }
}

// =============================================================================
// Specialized Methods for Tuple Elements
// =============================================================================

impl<A: Clone, B: Clone> PersistentList<Tuple<A, B>> {
    /// Splits a list of pairs into a pair of lists.
    #[must_use]
    pub fn unzip(&self) -> (PersistentList<A>, PersistentList<B>) {
        let mut first_elements = Vec::with_capacity(self.len());
        let mut second_elements = Vec::with_capacity(self.len());
        for pair in self {
            first_elements.push(pair.first().clone());
            second_elements.push(pair.second().clone());
        }
        (
            PersistentList::build_from_vec(first_elements),
            PersistentList::build_from_vec(second_elements),
        )
    }
}

// =============================================================================
// Specialized Methods for Nested Lists
// =============================================================================

impl<T: Clone> PersistentList<PersistentList<T>> {
    /// Flattens a list of lists into one list.
    #[must_use]
    pub fn concat(&self) -> PersistentList<T> {
        self.flat_map(|inner| inner.clone())
    }
}

// =============================================================================
// Specialized Methods for Either Elements
// =============================================================================

impl<L: Clone, R> PersistentList<Either<L, R>> {
    /// Collects every `Left` value, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::control::Either;
    /// use rosary::persistent::PersistentList;
    ///
    /// let results: PersistentList<Either<&str, i32>> =
    ///     vec![Either::Left("a"), Either::Right(1), Either::Left("b")].into_iter().collect();
    /// assert_eq!(results.lefts().to_vec(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn lefts(&self) -> PersistentList<L> {
        self.filter_map(|either| either.left_ref().cloned())
    }
}

impl<L, R: Clone> PersistentList<Either<L, R>> {
    /// Collects every `Right` value, in order.
    #[must_use]
    pub fn rights(&self) -> PersistentList<R> {
        self.filter_map(|either| either.right_ref().cloned())
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining = self.remaining.saturating_sub(1);
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentListIterator<'_, T> {}

/// An owning iterator over elements of a [`PersistentList`].
///
/// Elements are cloned out of the shared nodes.
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, tail) = self
            .list
            .uncons()
            .map(|(head, tail)| (head.clone(), tail))?;
        self.list = tail;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

/// Shares the nodes; elements are never cloned.
impl<T> Clone for PersistentList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = PersistentListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<Vec<T>> for PersistentList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::build_from_vec(elements)
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

/// Hashes the length first, then each element in order, so equal lists
/// hash equally.
impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for PersistentList<T> {
    type Inner = T;
    type WithType<B> = PersistentList<B>;
}

impl<T: Clone> Functor for PersistentList<T> {
    fn fmap<B, F>(self, function: F) -> PersistentList<B>
    where
        F: FnMut(T) -> B,
    {
        PersistentList::build_from_vec(self.into_iter().map(function).collect())
    }

    fn fmap_ref<B, F>(&self, function: F) -> PersistentList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T: Clone> Foldable for PersistentList<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    /// Buffers the elements first, so long lists fold without recursion.
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.to_vec()
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

impl<T: Clone> Semigroup for PersistentList<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: Clone> Monoid for PersistentList<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for PersistentListVisitor<T> {
    type Value = PersistentList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(PersistentList::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for PersistentList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
