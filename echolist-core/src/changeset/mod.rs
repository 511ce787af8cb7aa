/*
    changeset - Keyed, sorted change batches

    The input side of the adaptor: change reasons, individual keyed changes
    with positional indices, and the batches that carry them together with
    the post-batch sorted state.
*/

pub mod batch;
pub mod change;
pub mod reason;

pub use batch::SortedChangeSet;
pub use change::Change;
pub use reason::{ChangeReason, SortReason};
