/*
    adaptor - Change batch to live list reconciliation

    The core of the crate: policy decides rebuild versus incremental replay,
    the shadow store mirrors key state, and `SortedListAdaptor` drives the
    target list.
*/

pub mod errors;
pub mod policy;
pub mod sorted;

mod shadow;

#[cfg(test)]
pub mod tests;

pub use errors::{AdaptError, AdaptResult};
pub use policy::{choose_strategy, ApplyStrategy, DEFAULT_RESET_THRESHOLD};
pub use sorted::{AdaptorBuilder, AdaptorSettings, SortedListAdaptor};
