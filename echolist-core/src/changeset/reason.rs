/*
    reason.rs - Change and sort reason tags

    Two closed enums describe why a batch arrived and why each entry is in it.
    Unknown reasons cannot exist inside the crate; raw tags coming from an
    outside boundary are decoded through SortReason::from_tag, which is the
    single place an unrecognized value is rejected.
*/

use crate::adaptor::errors::AdaptError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a single change plays within a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeReason {
    /// A key absent from the collection was inserted
    Add,
    /// An existing key changed value (and possibly position)
    Update,
    /// A key was removed from the collection
    Remove,
    /// A key kept its value but changed position
    Moved,
}

impl ChangeReason {
    /// Stable lowercase name, used in logs and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeReason::Add => "add",
            ChangeReason::Update => "update",
            ChangeReason::Remove => "remove",
            ChangeReason::Moved => "moved",
        }
    }
}

impl fmt::Display for ChangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why the upstream collection emitted a sorted batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortReason {
    /// First batch of a subscription; carries the whole collection
    InitialLoad,
    /// The sort comparer changed, invalidating every position
    ComparerChanged,
    /// The upstream collection was rebuilt wholesale
    Reset,
    /// Ordinary incremental adds/updates/removes/moves
    DataChanged,
    /// Positions changed but membership and values did not
    Reorder,
}

impl SortReason {
    /// Stable wire tag for producers bridging a raw boundary
    pub fn tag(&self) -> u8 {
        match self {
            SortReason::InitialLoad => 0,
            SortReason::ComparerChanged => 1,
            SortReason::Reset => 2,
            SortReason::DataChanged => 3,
            SortReason::Reorder => 4,
        }
    }

    /// Decode a raw tag. Tags outside the declared set fail with
    /// [`AdaptError::InvalidSortReason`]; no batch can be built from them.
    pub fn from_tag(tag: u8) -> Result<Self, AdaptError> {
        match tag {
            0 => Ok(SortReason::InitialLoad),
            1 => Ok(SortReason::ComparerChanged),
            2 => Ok(SortReason::Reset),
            3 => Ok(SortReason::DataChanged),
            4 => Ok(SortReason::Reorder),
            other => Err(AdaptError::InvalidSortReason(other)),
        }
    }

    /// Stable lowercase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SortReason::InitialLoad => "initial_load",
            SortReason::ComparerChanged => "comparer_changed",
            SortReason::Reset => "reset",
            SortReason::DataChanged => "data_changed",
            SortReason::Reorder => "reorder",
        }
    }
}

impl fmt::Display for SortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<u8> for SortReason {
    type Error = AdaptError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        SortReason::from_tag(tag)
    }
}
