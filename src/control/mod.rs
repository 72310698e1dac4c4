//! Small algebraic data types used across the crate.
//!
//! - [`Maybe`]: An optional value, `Just` or `Nothing`
//! - [`Either`]: A value that can be one of two types
//! - [`Tuple`]: An ordered pair
//!
//! # Examples
//!
//! ```rust
//! use rosary::control::{Either, Maybe, Tuple};
//!
//! let found: Maybe<i32> = Some(3).into();
//! let checked: Either<&str, i32> = Either::from_maybe("missing", found);
//! assert_eq!(checked, Either::Right(3));
//!
//! let pair = Tuple::pair("k", checked.right_or_default());
//! assert_eq!(pair.to_string(), "(k, 3)");
//! ```

mod either;
mod maybe;
mod tuple;

pub use either::Either;
pub use maybe::Maybe;
pub use tuple::Tuple;
