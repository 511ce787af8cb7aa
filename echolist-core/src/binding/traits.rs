/*
    traits.rs - Observable list abstraction

    The adaptor drives any target that exposes positional edits and
    notification suppression. `suppress_notifications` hands back a guard
    that releases the suppression on drop, so a scope stays balanced even
    when an edit inside it returns early.
*/

use std::ops::{Deref, DerefMut};

/// A mutable ordered collection that notifies observers about edits.
///
/// Implementations decide how notifications are delivered; the trait only
/// requires that suppression nests (each `begin_suppress` is balanced by one
/// `end_suppress`) and that a suppressed run of mutations collapses into a
/// single coarse notification when the outermost scope ends.
pub trait ObservableList {
    type Item;

    /// Number of items currently held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every item
    fn clear(&mut self);

    /// Insert `value` so that it occupies `index`.
    ///
    /// Callers must pass `index <= len()`.
    fn insert(&mut self, index: usize, value: Self::Item);

    /// Remove and return the item at `index`.
    ///
    /// Callers must pass `index < len()`.
    fn remove(&mut self, index: usize) -> Self::Item;

    /// Relocate the item at `from` so that it occupies `to`.
    ///
    /// Both positions are interpreted against the current list, `to` being
    /// the final resting index after the item has been taken out.
    fn move_item(&mut self, from: usize, to: usize);

    /// Enter a suppression scope; nested calls stack
    fn begin_suppress(&mut self);

    /// Leave the innermost suppression scope
    fn end_suppress(&mut self);

    /// Run edits without per-edit notifications.
    ///
    /// The returned guard derefs to the list and calls `end_suppress` when
    /// dropped.
    fn suppress_notifications(&mut self) -> SuppressScope<'_, Self>
    where
        Self: Sized,
    {
        self.begin_suppress();
        SuppressScope { list: self }
    }
}

/// RAII guard for a notification suppression scope
pub struct SuppressScope<'a, L: ObservableList> {
    list: &'a mut L,
}

impl<L: ObservableList> Deref for SuppressScope<'_, L> {
    type Target = L;

    fn deref(&self) -> &L {
        self.list
    }
}

impl<L: ObservableList> DerefMut for SuppressScope<'_, L> {
    fn deref_mut(&mut self) -> &mut L {
        self.list
    }
}

impl<L: ObservableList> Drop for SuppressScope<'_, L> {
    fn drop(&mut self) {
        self.list.end_suppress();
    }
}
