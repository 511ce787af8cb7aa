/*
    batch.rs - Sorted change batch

    A batch pairs an ordered run of changes with the full post-batch state of
    the collection (`sorted_items`). The change order is significant: each
    index is valid only against the list state produced by every prior change
    in the same batch, so consumers must never reorder iteration.
*/

use super::change::Change;
use super::reason::SortReason;
use serde::{Deserialize, Serialize};

/// An ordered run of keyed changes plus the resulting sorted state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedChangeSet<K, V> {
    sort_reason: SortReason,
    changes: Vec<Change<K, V>>,
    sorted_items: Vec<(K, V)>,
}

impl<K, V> SortedChangeSet<K, V> {
    /// Create a batch from its parts.
    ///
    /// `sorted_items` must be the complete collection state after every
    /// change in `changes` has been applied, in final order.
    pub fn new(
        sort_reason: SortReason,
        changes: Vec<Change<K, V>>,
        sorted_items: Vec<(K, V)>,
    ) -> Self {
        // Upstream contract: a reorder batch carries position changes only.
        debug_assert!(
            sort_reason != SortReason::Reorder
                || changes.iter().all(|c| matches!(c, Change::Moved { .. })),
            "reorder batch contains non-move changes"
        );

        SortedChangeSet {
            sort_reason,
            changes,
            sorted_items,
        }
    }

    /// Why the upstream collection emitted this batch
    pub fn sort_reason(&self) -> SortReason {
        self.sort_reason
    }

    /// Number of changes in the batch (not the collection size)
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// True when the batch carries no changes
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// The changes in application order
    pub fn changes(&self) -> &[Change<K, V>] {
        &self.changes
    }

    /// The complete post-batch collection state, in final order
    pub fn sorted_items(&self) -> &[(K, V)] {
        &self.sorted_items
    }

    /// Iterate the changes in application order
    pub fn iter(&self) -> std::slice::Iter<'_, Change<K, V>> {
        self.changes.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a SortedChangeSet<K, V> {
    type Item = &'a Change<K, V>;
    type IntoIter = std::slice::Iter<'a, Change<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}
