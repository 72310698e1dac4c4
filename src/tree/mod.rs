//! Rose trees and a purely functional zipper over them.
//!
//! - [`RoseTree`]: A datum with an ordered list of child trees
//! - [`Zipper`]: A cursor into a tree, with navigation and edits at the focus
//! - [`Context`]: One breadcrumb of a zipper
//!
//! # Examples
//!
//! ```rust
//! use rosary::tree::{RoseTree, Zipper};
//!
//! let tree = RoseTree::with_children("a", [
//!     RoseTree::leaf("b"),
//!     RoseTree::with_children("c", [RoseTree::leaf("f")]),
//! ]);
//!
//! let found = Zipper::new(tree).go_to(|datum| *datum == "f");
//! assert_eq!(found.as_ref().map(|zipper| zipper.depth()), Some(2));
//!
//! let rebuilt = found
//!     .map(|zipper| zipper.append_child_tree(RoseTree::leaf("g")))
//!     .map(|zipper| zipper.into_tree());
//! assert_eq!(rebuilt.map(|tree| tree.len()), Some(5));
//! ```

mod navigation;
mod rose_tree;
mod zipper;

pub use rose_tree::RoseTree;
pub use rose_tree::RoseTreeIterator;
pub use rose_tree::Subtrees;
pub use zipper::Context;
pub use zipper::Zipper;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(RoseTree<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Zipper<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Zipper<i32>: Send, Sync);
