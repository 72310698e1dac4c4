//! Persistent (immutable) data structures.
//!
//! - [`PersistentList`]: Persistent singly-linked list
//! - [`PersistentDict`]: Persistent dictionary with ordered, unique keys
//!
//! # Structural Sharing
//!
//! Every operation returns a new version and leaves the original intact.
//! Unchanged parts are shared between versions instead of being copied.
//!
//! # Examples
//!
//! ```rust
//! use rosary::persistent::{PersistentDict, PersistentList};
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! let dict = PersistentDict::new().insert("one", 1).insert("two", 2);
//! let updated = dict.insert("one", 100);
//! assert_eq!(dict.get(&"one"), Some(&1));
//! assert_eq!(updated.get(&"one"), Some(&100));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// `std::sync::Arc` when the `arc` feature is enabled, so that lists and
/// everything built from them can cross threads; `std::rc::Rc` otherwise.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod dict;
mod list;

pub use dict::PersistentDict;
pub use list::PersistentList;
pub use list::PersistentListIntoIterator;
pub use list::PersistentListIterator;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentList<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentDict<String, i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
