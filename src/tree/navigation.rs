//! Zipper navigation.
//!
//! Every move returns `Option<Zipper<T>>`: `None` when the move is not
//! possible (no parent, no such child, no sibling in that direction, end
//! of traversal). The zipper that was moved is left unchanged.

use super::{Context, RoseTree, Zipper};
use crate::persistent::PersistentList;

/// A child list split around one child.
struct Split<T> {
    before: PersistentList<RoseTree<T>>,
    focus: RoseTree<T>,
    after: PersistentList<RoseTree<T>>,
}

fn split_on_index<T: Clone>(index: usize, children: &PersistentList<RoseTree<T>>) -> Option<Split<T>> {
    let focus = children.get(index)?.clone();
    Some(Split {
        before: children.take(index),
        focus,
        after: children.drop_first(index + 1),
    })
}

impl<T: Clone> Zipper<T> {
    /// Moves to the parent of the focus.
    #[must_use]
    pub fn go_up(&self) -> Option<Self> {
        let (context, rest) = self.breadcrumbs.uncons()?;
        let children = context
            .before
            .append(&context.after.cons(self.focus.clone()));
        Some(Self::from_parts(
            RoseTree::new(context.previous.clone(), children),
            rest,
        ))
    }

    /// Moves to the child at `index` (0-based).
    #[must_use]
    pub fn go_to_child(&self, index: usize) -> Option<Self> {
        let Split {
            before,
            focus,
            after,
        } = split_on_index(index, &self.focus.children)?;
        let context = Context::new(self.focus.datum.clone(), before, after);
        Some(Self::from_parts(focus, self.breadcrumbs.cons(context)))
    }

    /// Moves to the last child of the focus.
    #[must_use]
    pub fn go_to_rightmost_child(&self) -> Option<Self> {
        let last = self.focus.children.len().checked_sub(1)?;
        self.go_to_child(last)
    }

    /// Moves to the sibling immediately left of the focus.
    #[must_use]
    pub fn go_left(&self) -> Option<Self> {
        let (context, rest) = self.breadcrumbs.uncons()?;
        let last = context.before.len().checked_sub(1)?;
        let sibling = context.before.get(last)?.clone();
        let context = Context::new(
            context.previous.clone(),
            context.before.take(last),
            context.after.cons(self.focus.clone()),
        );
        Some(Self::from_parts(sibling, rest.cons(context)))
    }

    /// Moves to the sibling immediately right of the focus.
    #[must_use]
    pub fn go_right(&self) -> Option<Self> {
        let (context, rest) = self.breadcrumbs.uncons()?;
        let (sibling, after) = context.after.uncons()?;
        let context = Context::new(
            context.previous.clone(),
            context
                .before
                .append(&PersistentList::singleton(self.focus.clone())),
            after,
        );
        Some(Self::from_parts(sibling.clone(), rest.cons(context)))
    }

    /// Moves to the pre-order predecessor of the focus.
    ///
    /// `None` at the root.
    #[must_use]
    pub fn go_to_previous(&self) -> Option<Self> {
        match self.go_left() {
            Some(mut current) => {
                while let Some(child) = current.go_to_rightmost_child() {
                    current = child;
                }
                Some(current)
            }
            None => self.go_up(),
        }
    }

    /// Moves to the pre-order successor of the focus.
    ///
    /// `None` once the last node of the traversal is reached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rosary::tree::{RoseTree, Zipper};
    ///
    /// let tree = RoseTree::with_children(1, [
    ///     RoseTree::with_children(2, [RoseTree::leaf(3)]),
    ///     RoseTree::leaf(4),
    /// ]);
    ///
    /// let mut visited = Vec::new();
    /// let mut current = Some(Zipper::new(tree));
    /// while let Some(zipper) = current {
    ///     visited.push(*zipper.datum());
    ///     current = zipper.go_to_next();
    /// }
    /// assert_eq!(visited, vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn go_to_next(&self) -> Option<Self> {
        self.go_to_child(0)
            .or_else(|| self.go_right())
            .or_else(|| self.up_and_over())
    }

    fn up_and_over(&self) -> Option<Self> {
        let mut current = self.clone();
        loop {
            let Some(parent) = current.go_up() else {
                tracing::trace!(target: "rosary", "end of pre-order traversal");
                return None;
            };
            if let Some(next) = parent.go_right() {
                return Some(next);
            }
            current = parent;
        }
    }

    /// Moves to the root, rebuilding every ancestor on the way.
    #[must_use]
    pub fn go_to_root(&self) -> Self {
        let mut current = self.clone();
        while let Some(parent) = current.go_up() {
            current = parent;
        }
        current
    }

    /// Searches the whole tree, from the root in pre-order, for the first
    /// node whose datum satisfies `predicate`.
    ///
    /// The search always starts at the root, wherever the zipper is
    /// focused.
    #[must_use]
    pub fn go_to<P>(&self, mut predicate: P) -> Option<Self>
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self.go_to_root();
        loop {
            if predicate(current.datum()) {
                return Some(current);
            }
            match current.go_to_next() {
                Some(next) => current = next,
                None => {
                    tracing::trace!(target: "rosary", "search exhausted without a match");
                    return None;
                }
            }
        }
    }
}
