/*
    vec_list.rs - In-memory observable list

    Vec-backed target that records every notification it raises. While a
    suppression scope is open, mutations still happen immediately but only
    set a dirty flag; the outermost `end_suppress` turns that flag into one
    `Reset` event. Primarily the list used in tests and single-threaded
    pipelines, and the reference for what the trait contract means.
*/

use super::event::ListEvent;
use super::traits::ObservableList;
use metrics::counter;

/// Observable list backed by a `Vec`, recording raised events in order
#[derive(Debug, Default)]
pub struct VecList<T> {
    items: Vec<T>,
    events: Vec<ListEvent>,
    suppress_depth: u32,
    dirty: bool,
}

impl<T> VecList<T> {
    pub fn new() -> Self {
        VecList {
            items: Vec::new(),
            events: Vec::new(),
            suppress_depth: 0,
            dirty: false,
        }
    }

    /// Current items in list order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Events raised so far, oldest first
    pub fn events(&self) -> &[ListEvent] {
        &self.events
    }

    /// Drain the recorded events, leaving the list contents untouched
    pub fn take_events(&mut self) -> Vec<ListEvent> {
        std::mem::take(&mut self.events)
    }

    fn notify(&mut self, event: ListEvent) {
        if self.suppress_depth > 0 {
            self.dirty = true;
            return;
        }
        counter!("binding.notifications.raised").increment(1);
        self.events.push(event);
    }
}

impl<T> ObservableList for VecList<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.notify(ListEvent::Cleared);
    }

    fn insert(&mut self, index: usize, value: T) {
        self.items.insert(index, value);
        self.notify(ListEvent::Inserted { index });
    }

    fn remove(&mut self, index: usize) -> T {
        let item = self.items.remove(index);
        self.notify(ListEvent::Removed { index });
        item
    }

    fn move_item(&mut self, from: usize, to: usize) {
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.notify(ListEvent::Moved { from, to });
    }

    fn begin_suppress(&mut self) {
        self.suppress_depth += 1;
    }

    fn end_suppress(&mut self) {
        debug_assert!(self.suppress_depth > 0, "unbalanced end_suppress");
        self.suppress_depth = self.suppress_depth.saturating_sub(1);
        if self.suppress_depth == 0 && self.dirty {
            self.dirty = false;
            self.notify(ListEvent::Reset);
        }
    }
}

impl<T> From<Vec<T>> for VecList<T> {
    fn from(items: Vec<T>) -> Self {
        VecList {
            items,
            events: Vec::new(),
            suppress_depth: 0,
            dirty: false,
        }
    }
}

impl<T> FromIterator<T> for VecList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        VecList::from(iter.into_iter().collect::<Vec<T>>())
    }
}
