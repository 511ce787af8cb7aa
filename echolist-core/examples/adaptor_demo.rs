//! Example walking a list through small edits and a wholesale reset
//!
//! Run with:
//! ```bash
//! cargo run --example adaptor_demo
//! ```

use anyhow::Result;
use echolist_core::logging::{init_logging_with_config, LogConfig};
use echolist_core::{Change, ListEvent, SortReason, SortedChangeSet, SortedListAdaptor, VecList};

fn describe(events: &[ListEvent]) -> String {
    events
        .iter()
        .map(|event| match event {
            ListEvent::Inserted { index } => format!("insert@{index}"),
            ListEvent::Removed { index } => format!("remove@{index}"),
            ListEvent::Moved { from, to } => format!("move {from}->{to}"),
            ListEvent::Cleared => "clear".to_string(),
            ListEvent::Reset => "reset".to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    init_logging_with_config(LogConfig::new("debug"))?;

    let mut adaptor = SortedListAdaptor::new(VecList::new());

    // A fresh subscription starts with an initial load; observers get one reset.
    let load = SortedChangeSet::new(
        SortReason::InitialLoad,
        vec![
            Change::add(1u64, "ant".to_string(), 0),
            Change::add(2, "bee".to_string(), 1),
            Change::add(3, "cat".to_string(), 2),
        ],
        vec![
            (1, "ant".to_string()),
            (2, "bee".to_string()),
            (3, "cat".to_string()),
        ],
    );
    adaptor.adapt(&load)?;
    println!("after load:    {:?}", adaptor.target().as_slice());
    println!("  events:      {}", describe(&adaptor.target_mut().take_events()));

    // A small batch replays as positional edits.
    let churn = SortedChangeSet::new(
        SortReason::DataChanged,
        vec![
            Change::add(4, "auk".to_string(), 1),
            Change::remove(2, "bee".to_string(), 2),
        ],
        vec![
            (1, "ant".to_string()),
            (4, "auk".to_string()),
            (3, "cat".to_string()),
        ],
    );
    adaptor.adapt(&churn)?;
    println!("after churn:   {:?}", adaptor.target().as_slice());
    println!("  events:      {}", describe(&adaptor.target_mut().take_events()));

    // A big batch collapses into a single reset. Upstream drops the old
    // contents and ships a fresh population, so the batch carries removes
    // for the departed keys followed by the new adds.
    let mut changes = vec![
        Change::remove(1, "ant".to_string(), 0),
        Change::remove(4, "auk".to_string(), 0),
        Change::remove(3, "cat".to_string(), 0),
    ];
    let mut items: Vec<(u64, String)> = Vec::new();
    for i in 0..60u64 {
        let key = 100 + i;
        let value = format!("item-{i:02}");
        changes.push(Change::add(key, value.clone(), i as usize));
        items.push((key, value));
    }
    let reload = SortedChangeSet::new(SortReason::Reset, changes, items);
    adaptor.adapt(&reload)?;
    println!("after reload:  {} items", adaptor.target().as_slice().len());
    println!("  events:      {}", describe(&adaptor.target_mut().take_events()));
    println!("  tracked:     {} keys", adaptor.tracked_count());

    Ok(())
}
