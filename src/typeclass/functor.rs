//! Functor type class - mapping over container values.
//!
//! A Functor is a type that can be mapped over: it applies a function to the
//! value or values it contains while keeping its shape.
//!
//! Every container in this crate may hold more than one element (lists,
//! trees), so the mapping function is `FnMut` rather than `FnOnce`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rosary::typeclass::Functor;
//!
//! let x: Option<i32> = Some(5);
//! let y: Option<String> = x.fmap(|n| n.to_string());
//! assert_eq!(y, Some("5".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can be mapped over.
///
/// The mapping preserves structure: a list keeps its length, a tree keeps
/// its shape and a `Maybe` stays `Nothing` when it was `Nothing`.
pub trait Functor: TypeConstructor {
    /// Applies a function to every value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::typeclass::Functor;
    /// use rosary::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=3).collect();
    /// let doubled = list.fmap(|x| x * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to references of the values inside the functor,
    /// leaving the original untouched.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every value inside the functor with a constant.
    fn replace<B: Clone>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the values, keeping only the structure.
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
