/*
    sorted.rs - Sorted change set adaptor

    Bridges keyed, pre-sorted change batches onto a live observable list.
    Every batch first folds into the keyed shadow store, then the policy
    picks between a wholesale rebuild under notification suppression and a
    faithful replay of the batch's positional edits.

    Indices are trusted as produced: each change's index is valid against
    the list state left by the previous change in the same batch, so edits
    run strictly in batch order with no sorting or visual-position lookups
    on this side.
*/

use super::errors::{AdaptError, AdaptResult};
use super::policy::{self, ApplyStrategy, DEFAULT_RESET_THRESHOLD};
use super::shadow::ShadowStore;
use crate::binding::ObservableList;
use crate::changeset::{Change, ChangeReason, SortedChangeSet};
use metrics::counter;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Tunables for a [`SortedListAdaptor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptorSettings {
    /// Data-changed batches with more changes than this are applied as a
    /// rebuild instead of individual edits
    pub reset_threshold: usize,
}

impl Default for AdaptorSettings {
    fn default() -> Self {
        AdaptorSettings {
            reset_threshold: DEFAULT_RESET_THRESHOLD,
        }
    }
}

impl AdaptorSettings {
    pub fn with_reset_threshold(mut self, reset_threshold: usize) -> Self {
        self.reset_threshold = reset_threshold;
        self
    }
}

/// Applies sorted change batches to an observable target list.
///
/// The adaptor owns the target plus a keyed shadow of its contents. Feed it
/// batches through [`adapt`](Self::adapt); read the live list back through
/// [`target`](Self::target) and key state through
/// [`tracked_value`](Self::tracked_value).
#[derive(Debug)]
pub struct SortedListAdaptor<K, V, L> {
    target: L,
    shadow: ShadowStore<K, V>,
    settings: AdaptorSettings,
}

impl<K, V, L> SortedListAdaptor<K, V, L>
where
    K: Eq + Hash + Clone,
    V: Clone,
    L: ObservableList<Item = V>,
{
    /// Adaptor over `target` with default settings
    pub fn new(target: L) -> Self {
        Self::with_settings(target, AdaptorSettings::default())
    }

    pub fn with_settings(target: L, settings: AdaptorSettings) -> Self {
        SortedListAdaptor {
            target,
            shadow: ShadowStore::new(),
            settings,
        }
    }

    /// Start building an adaptor; fails at `build` if no target is supplied
    pub fn builder() -> AdaptorBuilder<K, V, L> {
        AdaptorBuilder::new()
    }

    /// Apply one batch to the target.
    ///
    /// The shadow store is synced before any positional edit, so it reflects
    /// the whole batch even when an edit is rejected. On
    /// [`AdaptError::IndexOutOfRange`] the offending change has touched
    /// nothing, but changes earlier in the batch remain applied; the target
    /// no longer mirrors upstream at that point, so a failed call leaves the
    /// adaptor unfit for further batches.
    pub fn adapt(&mut self, batch: &SortedChangeSet<K, V>) -> AdaptResult<()> {
        counter!("adaptor.batches.total").increment(1);
        self.shadow.sync(batch);

        let strategy = policy::choose_strategy(
            batch.sort_reason(),
            batch.len(),
            self.settings.reset_threshold,
        );
        debug!(
            reason = %batch.sort_reason(),
            changes = batch.len(),
            strategy = ?strategy,
            "applying change batch"
        );

        match strategy {
            ApplyStrategy::Rebuild => {
                self.rebuild(batch);
                Ok(())
            }
            ApplyStrategy::Incremental => self.apply_edits(batch),
        }
    }

    /// The adapted list
    pub fn target(&self) -> &L {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut L {
        &mut self.target
    }

    /// Consume the adaptor, handing the target back
    pub fn into_target(self) -> L {
        self.target
    }

    /// Number of keys currently tracked in the shadow store
    pub fn tracked_count(&self) -> usize {
        self.shadow.len()
    }

    /// Latest value recorded for `key`, if it is tracked
    pub fn tracked_value(&self, key: &K) -> Option<&V> {
        self.shadow.get(key)
    }

    pub fn settings(&self) -> AdaptorSettings {
        self.settings
    }

    fn rebuild(&mut self, batch: &SortedChangeSet<K, V>) {
        counter!("adaptor.rebuilds.total").increment(1);
        let mut scope = self.target.suppress_notifications();
        scope.clear();
        for (index, (_, value)) in batch.sorted_items().iter().enumerate() {
            scope.insert(index, value.clone());
        }
    }

    fn apply_edits(&mut self, batch: &SortedChangeSet<K, V>) -> AdaptResult<()> {
        for change in batch {
            self.apply_one(change)?;
        }
        counter!("adaptor.edits.applied").increment(batch.len() as u64);
        Ok(())
    }

    // Bounds are checked before the first primitive runs, so a rejected
    // change leaves the target exactly as it found it.
    fn apply_one(&mut self, change: &Change<K, V>) -> AdaptResult<()> {
        let len = self.target.len();
        match change {
            Change::Add {
                value,
                current_index,
                ..
            } => {
                if *current_index > len {
                    return Err(self.out_of_range(ChangeReason::Add, *current_index, len));
                }
                self.target.insert(*current_index, value.clone());
            }
            Change::Update {
                value,
                previous_index,
                current_index,
                ..
            } => {
                if *previous_index >= len {
                    return Err(self.out_of_range(ChangeReason::Update, *previous_index, len));
                }
                if *current_index >= len {
                    return Err(self.out_of_range(ChangeReason::Update, *current_index, len));
                }
                // Replace is remove-then-insert so observers see the item
                // leave its old position before the new value lands.
                self.target.remove(*previous_index);
                self.target.insert(*current_index, value.clone());
            }
            Change::Remove { previous_index, .. } => {
                if *previous_index >= len {
                    return Err(self.out_of_range(ChangeReason::Remove, *previous_index, len));
                }
                self.target.remove(*previous_index);
            }
            Change::Moved {
                previous_index,
                current_index,
                ..
            } => {
                if *previous_index >= len {
                    return Err(self.out_of_range(ChangeReason::Moved, *previous_index, len));
                }
                if *current_index >= len {
                    return Err(self.out_of_range(ChangeReason::Moved, *current_index, len));
                }
                self.target.move_item(*previous_index, *current_index);
            }
        }
        Ok(())
    }

    fn out_of_range(&self, reason: ChangeReason, index: usize, len: usize) -> AdaptError {
        counter!("adaptor.contract_violations.total").increment(1);
        warn!(
            reason = %reason,
            index,
            len,
            "change addresses an index outside the target"
        );
        AdaptError::IndexOutOfRange { reason, index, len }
    }
}

/// Step-wise construction for [`SortedListAdaptor`]
#[derive(Debug)]
pub struct AdaptorBuilder<K, V, L> {
    target: Option<L>,
    settings: AdaptorSettings,
    _marker: PhantomData<(K, V)>,
}

impl<K, V, L> AdaptorBuilder<K, V, L> {
    pub fn new() -> Self {
        AdaptorBuilder {
            target: None,
            settings: AdaptorSettings::default(),
            _marker: PhantomData,
        }
    }

    /// The list the adaptor will keep in sync; required
    pub fn target(mut self, target: L) -> Self {
        self.target = Some(target);
        self
    }

    pub fn reset_threshold(mut self, reset_threshold: usize) -> Self {
        self.settings.reset_threshold = reset_threshold;
        self
    }

    pub fn settings(mut self, settings: AdaptorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Finish construction; errors with [`AdaptError::NullTarget`] when no
    /// target was supplied
    pub fn build(self) -> AdaptResult<SortedListAdaptor<K, V, L>>
    where
        K: Eq + Hash + Clone,
        V: Clone,
        L: ObservableList<Item = V>,
    {
        let target = self.target.ok_or(AdaptError::NullTarget)?;
        Ok(SortedListAdaptor::with_settings(target, self.settings))
    }
}

impl<K, V, L> Default for AdaptorBuilder<K, V, L> {
    fn default() -> Self {
        Self::new()
    }
}
