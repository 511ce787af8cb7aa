/*
    binding - Observable list targets

    What the adaptor writes into: the `ObservableList` trait with RAII
    notification suppression, an event-recording Vec-backed implementation,
    and a shared handle for pipelines where views hold the same list.
*/

pub mod event;
pub mod shared;
pub mod traits;
pub mod vec_list;

pub use event::ListEvent;
pub use shared::SharedList;
pub use traits::{ObservableList, SuppressScope};
pub use vec_list::VecList;
