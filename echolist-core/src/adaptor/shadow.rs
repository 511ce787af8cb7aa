/*
    shadow.rs - Keyed shadow of the target list

    Mirror of the upstream collection keyed by item key, order-free. Kept in
    lockstep with every batch before any positional edit runs, so key lookups
    stay correct even when a later edit in the same batch is rejected.
*/

use crate::changeset::{Change, SortedChangeSet};
use std::collections::HashMap;
use std::hash::Hash;

/// Key-to-value mirror of the adapted collection
#[derive(Debug, Default)]
pub struct ShadowStore<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> ShadowStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        ShadowStore {
            entries: HashMap::new(),
        }
    }

    /// Fold a batch into the store.
    ///
    /// A store that is empty when the batch arrives is reallocated to the
    /// batch size, which right-sizes the map on initial loads. Moves carry
    /// no key-state change and are skipped.
    pub fn sync(&mut self, batch: &SortedChangeSet<K, V>) {
        if self.entries.is_empty() {
            self.entries = HashMap::with_capacity(batch.len());
        }
        for change in batch {
            match change {
                Change::Add { key, value, .. } | Change::Update { key, value, .. } => {
                    self.entries.insert(key.clone(), value.clone());
                }
                Change::Remove { key, .. } => {
                    self.entries.remove(key);
                }
                Change::Moved { .. } => {}
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}
