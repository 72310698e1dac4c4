//! Foldable type class - folding over structures to produce summary values.
//!
//! A Foldable is a structure whose elements can be combined, one at a time,
//! into a single summary value. For the trees in this crate the element
//! order is pre-order: a node first, then its children left to right.
//!
//! # Examples
//!
//! ```rust
//! use rosary::typeclass::Foldable;
//! use rosary::persistent::PersistentList;
//!
//! let list: PersistentList<i32> = (1..=4).collect();
//! assert_eq!(list.fold_left(0, |accumulator, x| accumulator + x), 10);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for structures that can be folded to a summary value.
///
/// # Laws
///
/// `fold_right` visits the same elements as `fold_left` and combines them
/// from the right:
///
/// ```text
/// fa.fold_right(z, f) == fa.to_list().into_iter().rev().fold(z, |b, a| f(a, b))
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from the left with an initial accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from the right with an initial accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::typeclass::Foldable;
    /// use rosary::persistent::PersistentList;
    ///
    /// let words: PersistentList<&str> = vec!["a", "b"].into_iter().collect();
    /// let joined: PersistentList<String> = words.fold_map(|w| PersistentList::singleton(w.to_uppercase()));
    /// assert_eq!(joined.to_vec(), vec!["A".to_string(), "B".to_string()]);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects all elements, in fold order, into a `Vec`.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying the predicate.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }
}

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}
