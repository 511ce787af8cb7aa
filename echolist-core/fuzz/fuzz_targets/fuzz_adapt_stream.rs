#![no_main]

use echolist_core::{
    AdaptorSettings, Change, SortReason, SortedChangeSet, SortedListAdaptor, VecList,
};
use libfuzzer_sys::fuzz_target;

fn expected_values(mirror: &[(u64, u64)]) -> Vec<u64> {
    mirror.iter().map(|(_, value)| *value).collect()
}

fuzz_target!(|data: &[u8]| {
    // Interpret the input as an op stream against a mirror of upstream
    // state, flushing batches whose indices are valid by construction.
    // Any divergence between the target and the mirror is a finding.
    let Some((&first, rest)) = data.split_first() else {
        return;
    };

    let mut adaptor = SortedListAdaptor::with_settings(
        VecList::new(),
        AdaptorSettings::default().with_reset_threshold((first % 16) as usize),
    );
    let mut mirror: Vec<(u64, u64)> = Vec::new();
    let mut next_key = 1u64;
    let mut pending: Vec<Change<u64, u64>> = Vec::new();

    for chunk in rest.chunks_exact(3) {
        let (kind, a, b) = (chunk[0] % 5, chunk[1] as usize, chunk[2] as usize);
        let len = mirror.len();

        if kind == 4 {
            let reason = if a % 2 == 0 {
                SortReason::DataChanged
            } else {
                SortReason::Reset
            };
            let batch = SortedChangeSet::new(reason, std::mem::take(&mut pending), mirror.clone());
            adaptor.adapt(&batch).expect("in-bounds batch applies");
            assert_eq!(
                adaptor.target().as_slice(),
                expected_values(&mirror).as_slice()
            );
            assert_eq!(adaptor.tracked_count(), mirror.len());
            continue;
        }

        match if len == 0 { 0 } else { kind } {
            0 => {
                let key = next_key;
                next_key += 1;
                let index = a % (len + 1);
                mirror.insert(index, (key, key * 31));
                pending.push(Change::add(key, key * 31, index));
            }
            1 => {
                let previous = a % len;
                let current = b % len;
                let (key, value) = mirror.remove(previous);
                mirror.insert(current, (key, value + 1));
                pending.push(Change::update(key, value + 1, previous, current));
            }
            2 => {
                let previous = a % len;
                let (key, value) = mirror.remove(previous);
                pending.push(Change::remove(key, value, previous));
            }
            _ => {
                let previous = a % len;
                let current = b % len;
                let (key, value) = mirror.remove(previous);
                mirror.insert(current, (key, value));
                pending.push(Change::moved(key, value, previous, current));
            }
        }
    }

    let batch = SortedChangeSet::new(SortReason::DataChanged, pending, mirror.clone());
    adaptor.adapt(&batch).expect("in-bounds batch applies");
    assert_eq!(
        adaptor.target().as_slice(),
        expected_values(&mirror).as_slice()
    );
    assert_eq!(adaptor.tracked_count(), mirror.len());
});
