//! Maybe type - an optional value.
//!
//! `Maybe<T>` is either `Just(value)` or `Nothing`. It carries the same
//! information as [`Option`] and converts to and from it losslessly; the
//! separate type exists so that the functional combinators (`map2`, `apply`,
//! `bind`, `with_default`) and the `Just (x)` rendering live in one place.
//!
//! # Examples
//!
//! ```rust
//! use rosary::control::Maybe;
//!
//! let width = Maybe::Just(3);
//! let height = Maybe::Just(4);
//! assert_eq!(width.map2(height, |w, h| w * h), Maybe::Just(12));
//!
//! let missing: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(missing.with_default(0), 0);
//! ```

use std::fmt;

use crate::typeclass::{Foldable, Functor, Monoid, Semigroup, TypeConstructor};

/// An optional value: `Just(value)` or `Nothing`.
///
/// `Nothing` orders before any `Just`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    #[default]
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value, or `default` for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).with_default(9), 1);
    /// assert_eq!(Maybe::Nothing.with_default(9), 9);
    /// ```
    #[inline]
    pub fn with_default(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard library [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies a function to the contained value, if any.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Combines two values when both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::control::Maybe;
    ///
    /// let sum = Maybe::Just(1).map2(Maybe::Just(2), |x, y| x + y);
    /// assert_eq!(sum, Maybe::Just(3));
    ///
    /// let missing = Maybe::Just(1).map2(Maybe::<i32>::Nothing, |x, y| x + y);
    /// assert_eq!(missing, Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map2<U, V, F>(self, other: Maybe<U>, function: F) -> Maybe<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just(function(first, second)),
            _ => Maybe::Nothing,
        }
    }

    /// Chains a computation that may itself produce `Nothing`.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<F> Maybe<F> {
    /// Applies a wrapped function to a wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::control::Maybe;
    ///
    /// let increment = Maybe::Just(|x: i32| x + 1);
    /// assert_eq!(increment.apply(Maybe::Just(41)), Maybe::Just(42));
    /// ```
    #[inline]
    pub fn apply<A, B>(self, value: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        value.map2(self, |argument, function| function(argument))
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just ({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnMut(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Foldable for Maybe<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Just(value) => function(init, value),
            Self::Nothing => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Just(value) => function(value, init),
            Self::Nothing => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_nothing()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_just())
    }
}

/// `Nothing` is the identity; two `Just` values combine their contents.
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(first), Self::Just(second)) => Self::Just(first.combine(second)),
            (Self::Just(value), Self::Nothing) | (Self::Nothing, Self::Just(value)) => {
                Self::Just(value)
            }
            (Self::Nothing, Self::Nothing) => Self::Nothing,
        }
    }
}

impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Self::Nothing
    }
}
