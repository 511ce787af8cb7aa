/*
    event.rs - List change notifications
*/

use serde::{Deserialize, Serialize};

/// A notification raised by an observable list after a mutation.
///
/// `Reset` is the coarse "re-read everything" signal: it is raised once at
/// the end of a suppression scope that covered at least one mutation, and
/// carries no positional detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListEvent {
    /// An item was inserted at `index`
    Inserted { index: usize },
    /// The item at `index` was removed
    Removed { index: usize },
    /// The item at `from` now lives at `to`
    Moved { from: usize, to: usize },
    /// All items were removed at once
    Cleared,
    /// The list changed wholesale; observers should re-read it
    Reset,
}
