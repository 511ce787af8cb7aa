//! Echolist keeps a live observable list in sync with a stream of keyed,
//! pre-sorted change batches.
//!
//! Producers ship [`SortedChangeSet`] batches whose positional indices are
//! already resolved against the final sort order. [`SortedListAdaptor`]
//! applies each batch to an [`ObservableList`] target, choosing per batch
//! between replaying the individual edits and rebuilding the whole list
//! under a single reset notification, so observers see the fewest events
//! that still describe the change.
//!
//! ```
//! use echolist_core::{Change, SortReason, SortedChangeSet, SortedListAdaptor, VecList};
//!
//! let mut adaptor = SortedListAdaptor::new(VecList::new());
//! let batch = SortedChangeSet::new(
//!     SortReason::InitialLoad,
//!     vec![Change::add(1u64, "ant", 0), Change::add(2, "bee", 1)],
//!     vec![(1, "ant"), (2, "bee")],
//! );
//! adaptor.adapt(&batch)?;
//! assert_eq!(adaptor.target().as_slice(), &["ant", "bee"]);
//! # Ok::<(), echolist_core::AdaptError>(())
//! ```

pub mod adaptor;
pub mod binding;
pub mod changeset;
pub mod logging;
pub mod metrics;

pub use adaptor::{
    AdaptError, AdaptResult, AdaptorBuilder, AdaptorSettings, ApplyStrategy, SortedListAdaptor,
    DEFAULT_RESET_THRESHOLD,
};
pub use binding::{ListEvent, ObservableList, SharedList, SuppressScope, VecList};
pub use changeset::{Change, ChangeReason, SortReason, SortedChangeSet};
