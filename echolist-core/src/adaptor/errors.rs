/*
    errors.rs - Error types for the reconciliation adaptor

    Every error here is terminal for the operation that raised it:
    - Construction errors mean no adaptor instance exists.
    - Contract violations mean the upstream batch was inconsistent and the
      current adapt call must not continue.

    There are no transient errors; all operations are in-memory edits.
*/

use crate::changeset::ChangeReason;
use thiserror::Error;

/// Errors raised by adaptor construction and batch application
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdaptError {
    /// The builder was finalized without a target list
    #[error("no target list was supplied")]
    NullTarget,

    /// A raw sort-reason tag did not match any known reason
    #[error("unrecognized sort reason tag: {0}")]
    InvalidSortReason(u8),

    /// A change carried an index inconsistent with the target list state.
    /// The upstream producer broke the cumulative-index contract; the adapt
    /// call is aborted with prior edits of the batch left in place.
    #[error("{reason} change addresses index {index} but the target holds {len} items")]
    IndexOutOfRange {
        reason: ChangeReason,
        index: usize,
        len: usize,
    },
}

/// Result type for adaptor operations
pub type AdaptResult<T> = Result<T, AdaptError>;
