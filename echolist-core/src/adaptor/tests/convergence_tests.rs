/*
    convergence_tests.rs - Path independence and shadow fidelity

    The rebuild and incremental paths must land on identical list contents
    for the same batches, and the shadow store must agree with the upstream
    key state no matter which path ran.
*/

use crate::adaptor::{AdaptorSettings, SortedListAdaptor};
use crate::binding::{ListEvent, VecList};
use crate::changeset::{Change, SortReason, SortedChangeSet};

type Batch = SortedChangeSet<u64, &'static str>;

/// A scripted three-batch session: load, churn, reorder
fn scripted_batches() -> Vec<Batch> {
    vec![
        SortedChangeSet::new(
            SortReason::InitialLoad,
            vec![
                Change::add(1, "ant", 0),
                Change::add(2, "bee", 1),
                Change::add(3, "cat", 2),
            ],
            vec![(1, "ant"), (2, "bee"), (3, "cat")],
        ),
        SortedChangeSet::new(
            SortReason::DataChanged,
            vec![
                Change::update(2, "boar", 1, 2),
                Change::add(4, "auk", 1),
                Change::remove(3, "cat", 2),
            ],
            vec![(1, "ant"), (4, "auk"), (2, "boar")],
        ),
        SortedChangeSet::new(
            SortReason::Reorder,
            vec![Change::moved(2, "boar", 2, 0)],
            vec![(2, "boar"), (1, "ant"), (4, "auk")],
        ),
    ]
}

#[test]
fn test_scripted_batches_keep_target_and_sorted_state_aligned() {
    let mut adaptor = SortedListAdaptor::new(VecList::new());
    for batch in scripted_batches() {
        adaptor.adapt(&batch).unwrap();
        let expected: Vec<&str> = batch.sorted_items().iter().map(|(_, v)| *v).collect();
        assert_eq!(adaptor.target().as_slice(), expected.as_slice());
    }
}

#[test]
fn test_incremental_and_rebuild_paths_converge() {
    // Threshold 0 pushes every non-empty data batch down the rebuild path;
    // usize::MAX keeps everything positional.
    let mut editing = SortedListAdaptor::with_settings(
        VecList::new(),
        AdaptorSettings::default().with_reset_threshold(usize::MAX),
    );
    let mut resetting = SortedListAdaptor::with_settings(
        VecList::new(),
        AdaptorSettings::default().with_reset_threshold(0),
    );

    for batch in scripted_batches() {
        editing.adapt(&batch).unwrap();
        resetting.adapt(&batch).unwrap();
    }

    assert_eq!(
        editing.target().as_slice(),
        resetting.target().as_slice()
    );
    assert_eq!(editing.target().as_slice(), &["boar", "ant", "auk"]);
}

#[test]
fn test_shadow_agrees_with_final_key_state() {
    let mut adaptor = SortedListAdaptor::new(VecList::new());
    for batch in scripted_batches() {
        adaptor.adapt(&batch).unwrap();
    }

    assert_eq!(adaptor.tracked_count(), 3);
    assert_eq!(adaptor.tracked_value(&1), Some(&"ant"));
    assert_eq!(adaptor.tracked_value(&2), Some(&"boar"));
    assert_eq!(adaptor.tracked_value(&4), Some(&"auk"));
    assert!(adaptor.tracked_value(&3).is_none());
}

#[test]
fn test_repeated_reset_batch_is_idempotent() {
    let batch = SortedChangeSet::new(
        SortReason::Reset,
        vec![],
        vec![(1u64, "one"), (2, "two")],
    );

    let mut adaptor = SortedListAdaptor::new(VecList::new());
    adaptor.adapt(&batch).unwrap();
    let first = adaptor.target().as_slice().to_vec();
    adaptor.adapt(&batch).unwrap();

    assert_eq!(adaptor.target().as_slice(), first.as_slice());
    assert_eq!(adaptor.target().as_slice(), &["one", "two"]);
}

#[test]
fn test_comparer_change_rebuilds_into_new_order() {
    let mut adaptor = SortedListAdaptor::new(VecList::new());
    adaptor
        .adapt(&SortedChangeSet::new(
            SortReason::InitialLoad,
            vec![Change::add(1u64, "alpha", 0), Change::add(2, "omega", 1)],
            vec![(1, "alpha"), (2, "omega")],
        ))
        .unwrap();
    adaptor.target_mut().take_events();

    // Same keys, opposite order: a comparer swap ships no per-item changes.
    adaptor
        .adapt(&SortedChangeSet::new(
            SortReason::ComparerChanged,
            vec![],
            vec![(2, "omega"), (1, "alpha")],
        ))
        .unwrap();

    assert_eq!(adaptor.target().as_slice(), &["omega", "alpha"]);
    assert_eq!(adaptor.target_mut().take_events(), vec![ListEvent::Reset]);
    assert_eq!(adaptor.tracked_count(), 2);
}

#[test]
fn test_empty_data_batch_is_a_quiet_no_op() {
    let mut adaptor = SortedListAdaptor::new(VecList::new());
    adaptor
        .adapt(&SortedChangeSet::new(
            SortReason::InitialLoad,
            vec![Change::add(1u64, "only", 0)],
            vec![(1, "only")],
        ))
        .unwrap();
    adaptor.target_mut().take_events();

    adaptor
        .adapt(&SortedChangeSet::new(SortReason::DataChanged, vec![], vec![(1, "only")]))
        .unwrap();

    assert_eq!(adaptor.target().as_slice(), &["only"]);
    assert!(adaptor.target().events().is_empty());
}
