//! Tuple type - an ordered pair.
//!
//! [`Tuple`] is the pair used throughout the crate: the ordered dictionary
//! stores its entries as `Tuple<K, V>`, and the rose tree pairs each datum
//! with the flattened data of its children.

use std::fmt;

/// An ordered pair of two values.
///
/// # Examples
///
/// ```rust
/// use rosary::control::Tuple;
///
/// let pair = Tuple::pair("answer", 41).map_second(|x| x + 1);
/// assert_eq!(pair.first(), &"answer");
/// assert_eq!(pair.second(), &42);
/// assert_eq!(pair.to_string(), "(answer, 42)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tuple<A, B> {
    /// Creates a pair.
    #[inline]
    #[must_use]
    pub const fn pair(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns a reference to the first component.
    #[inline]
    #[must_use]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns a reference to the second component.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Splits the pair into its components.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }

    #[inline]
    #[must_use]
    pub fn map_first<C, F>(self, function: F) -> Tuple<C, B>
    where
        F: FnOnce(A) -> C,
    {
        Tuple::pair(function(self.first), self.second)
    }

    #[inline]
    #[must_use]
    pub fn map_second<C, F>(self, function: F) -> Tuple<A, C>
    where
        F: FnOnce(B) -> C,
    {
        Tuple::pair(self.first, function(self.second))
    }

    #[inline]
    #[must_use]
    pub fn map_both<C, D, F, G>(self, first_function: F, second_function: G) -> Tuple<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        Tuple::pair(first_function(self.first), second_function(self.second))
    }

    /// Exchanges the two components.
    #[inline]
    #[must_use]
    pub fn swap(self) -> Tuple<B, A> {
        Tuple::pair(self.second, self.first)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Tuple<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Tuple<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::pair(first, second)
    }
}

impl<A, B> From<Tuple<A, B>> for (A, B) {
    #[inline]
    fn from(tuple: Tuple<A, B>) -> Self {
        tuple.into_parts()
    }
}
