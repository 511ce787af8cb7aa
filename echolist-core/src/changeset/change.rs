/*
    change.rs - A single keyed change within a sorted batch

    The variant set makes invalid combinations unrepresentable: every reason
    carries exactly the index fields its positional mutation needs. Indices
    are supplied by the upstream producer and already account for the
    cumulative effect of prior changes in the same batch.
*/

use super::reason::ChangeReason;
use serde::{Deserialize, Serialize};

/// One unit of a sorted change batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change<K, V> {
    /// Insert `value` at `current_index`
    Add {
        key: K,
        value: V,
        current_index: usize,
    },
    /// Remove the element at `previous_index`, then insert `value` at
    /// `current_index`. Deliberately not an in-place replace: the two-step
    /// form composes a value change with a position change.
    Update {
        key: K,
        value: V,
        previous_index: usize,
        current_index: usize,
    },
    /// Remove the element at `previous_index`; `value` is the removed payload
    Remove {
        key: K,
        value: V,
        previous_index: usize,
    },
    /// Move the element at `previous_index` to `current_index`; the value is
    /// unchanged and carried only for observers
    Moved {
        key: K,
        value: V,
        previous_index: usize,
        current_index: usize,
    },
}

impl<K, V> Change<K, V> {
    /// Shorthand for [`Change::Add`]
    pub fn add(key: K, value: V, current_index: usize) -> Self {
        Change::Add {
            key,
            value,
            current_index,
        }
    }

    /// Shorthand for [`Change::Update`]
    pub fn update(key: K, value: V, previous_index: usize, current_index: usize) -> Self {
        Change::Update {
            key,
            value,
            previous_index,
            current_index,
        }
    }

    /// Shorthand for [`Change::Remove`]
    pub fn remove(key: K, value: V, previous_index: usize) -> Self {
        Change::Remove {
            key,
            value,
            previous_index,
        }
    }

    /// Shorthand for [`Change::Moved`]
    pub fn moved(key: K, value: V, previous_index: usize, current_index: usize) -> Self {
        Change::Moved {
            key,
            value,
            previous_index,
            current_index,
        }
    }

    /// The reason tag of this change
    pub fn reason(&self) -> ChangeReason {
        match self {
            Change::Add { .. } => ChangeReason::Add,
            Change::Update { .. } => ChangeReason::Update,
            Change::Remove { .. } => ChangeReason::Remove,
            Change::Moved { .. } => ChangeReason::Moved,
        }
    }

    /// The key this change applies to
    pub fn key(&self) -> &K {
        match self {
            Change::Add { key, .. }
            | Change::Update { key, .. }
            | Change::Remove { key, .. }
            | Change::Moved { key, .. } => key,
        }
    }

    /// The value carried by this change (for removes, the removed payload)
    pub fn value(&self) -> &V {
        match self {
            Change::Add { value, .. }
            | Change::Update { value, .. }
            | Change::Remove { value, .. }
            | Change::Moved { value, .. } => value,
        }
    }
}
