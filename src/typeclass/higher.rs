//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native higher-kinded types, so a trait cannot abstract over
//! `PersistentList<_>` or `RoseTree<_>` as type constructors directly. The
//! [`TypeConstructor`] trait works around this with a generic associated
//! type that re-applies the same constructor to a different inner type.
//!
//! # Example
//!
//! ```rust
//! use rosary::typeclass::TypeConstructor;
//! use rosary::persistent::PersistentList;
//!
//! fn empty_of_same_shape<T>(_: &T) -> T::WithType<String>
//! where
//!     T: TypeConstructor,
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers: PersistentList<i32> = (1..=3).collect();
//! let strings: PersistentList<String> = empty_of_same_shape(&numbers);
//! assert!(strings.is_empty());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
