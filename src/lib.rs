//! # rosary
//!
//! Persistent lists, ordered dictionaries and rose trees with a purely
//! functional zipper.
//!
//! ## Overview
//!
//! Every structure in this crate is an immutable value. Operations return
//! new versions and share unchanged parts with the old ones.
//!
//! - **Type Classes**: `Functor`, `Foldable`, `Semigroup`, `Monoid`
//! - **Control Structures**: `Maybe`, `Either`, `Tuple`
//! - **Persistent Data Structures**: `PersistentList`, `PersistentDict`
//! - **Trees**: `RoseTree` and a `Zipper` to navigate and edit it
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `control`: `Maybe`, `Either` and `Tuple`
//! - `persistent`: Persistent list and dictionary
//! - `tree`: Rose tree and zipper
//! - `arc`: Share nodes through `Arc` instead of `Rc`, making every
//!   structure `Send + Sync`
//! - `full`: Enable all features
//!
//! ## Debug Output
//!
//! Set `ROSARY_DEBUG=1` (or call [`debug::set_enabled`]) to have
//! [`debug::inspect`] log values through `tracing`.
//!
//! ## Example
//!
//! ```rust
//! use rosary::prelude::*;
//!
//! let tree = RoseTree::with_children("a", [
//!     RoseTree::with_children("b", [RoseTree::leaf("e")]),
//!     RoseTree::leaf("c"),
//! ]);
//!
//! let zipper = Zipper::new(tree.clone())
//!     .go_to(|datum| *datum == "e")
//!     .map(|zipper| zipper.replace_datum("E"));
//!
//! assert_eq!(zipper.as_ref().map(Zipper::depth), Some(2));
//! assert_eq!(
//!     zipper.map(|zipper| zipper.into_tree().flatten().to_vec()),
//!     Some(vec!["a", "b", "E", "c"])
//! );
//! assert_eq!(tree.flatten().to_vec(), vec!["a", "b", "e", "c"]);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use rosary::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "tree")]
    pub use crate::tree::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "tree")]
pub mod tree;

pub mod debug;
