/*
    shared.rs - Shared list handle

    Cheap clone-able handle over an observable list so the adaptor can own
    one handle while views or tests hold others onto the same data.
    Single-threaded by construction (Rc + RefCell); the adaptor itself never
    crosses threads.
*/

use super::traits::ObservableList;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Shared ownership wrapper around an observable list
#[derive(Debug)]
pub struct SharedList<L> {
    inner: Rc<RefCell<L>>,
}

impl<L> SharedList<L> {
    pub fn new(list: L) -> Self {
        SharedList {
            inner: Rc::new(RefCell::new(list)),
        }
    }

    /// Immutable view of the underlying list.
    ///
    /// Panics if a mutable borrow is live, per `RefCell` rules.
    pub fn borrow(&self) -> Ref<'_, L> {
        self.inner.borrow()
    }

    /// Mutable view of the underlying list
    pub fn borrow_mut(&self) -> RefMut<'_, L> {
        self.inner.borrow_mut()
    }
}

// Derived Clone would demand L: Clone; the handle only clones the Rc.
impl<L> Clone for SharedList<L> {
    fn clone(&self) -> Self {
        SharedList {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<L: ObservableList> ObservableList for SharedList<L> {
    type Item = L::Item;

    fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    fn clear(&mut self) {
        self.inner.borrow_mut().clear();
    }

    fn insert(&mut self, index: usize, value: Self::Item) {
        self.inner.borrow_mut().insert(index, value);
    }

    fn remove(&mut self, index: usize) -> Self::Item {
        self.inner.borrow_mut().remove(index)
    }

    fn move_item(&mut self, from: usize, to: usize) {
        self.inner.borrow_mut().move_item(from, to);
    }

    fn begin_suppress(&mut self) {
        self.inner.borrow_mut().begin_suppress();
    }

    fn end_suppress(&mut self) {
        self.inner.borrow_mut().end_suppress();
    }
}
