#![no_main]

use echolist_core::{SortReason, SortedChangeSet};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Tag decoding must reject unknown bytes without panicking.
    if let Some(&first) = data.first() {
        let _ = SortReason::from_tag(first);
        let _ = SortReason::try_from(first);
    }

    // Arbitrary JSON either parses into a batch or errors cleanly.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(batch) = serde_json::from_str::<SortedChangeSet<u64, String>>(text) {
            let _ = batch.sort_reason();
            let _ = batch.len();
            for change in &batch {
                let _ = change.reason();
            }
        }
    }
});
