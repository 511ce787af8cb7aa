/*
    policy.rs - Rebuild-or-edit decision

    One place decides how a batch reaches the target. Structural reasons
    always rebuild; reorders always edit; plain data changes edit up to the
    reset threshold and rebuild past it, on the grounds that one coarse
    reset costs observers less than a long run of positional notifications.
*/

use crate::changeset::SortReason;

/// Default change count above which a data-changed batch becomes a rebuild
pub const DEFAULT_RESET_THRESHOLD: usize = 50;

/// How a batch is applied to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyStrategy {
    /// Clear the target and reload it from the batch's sorted state
    Rebuild,
    /// Replay the batch's changes as individual positional edits
    Incremental,
}

/// Pick the strategy for a batch.
///
/// A count exactly at the threshold still applies incrementally; only
/// counts strictly above it tip into a rebuild.
pub fn choose_strategy(
    reason: SortReason,
    change_count: usize,
    reset_threshold: usize,
) -> ApplyStrategy {
    match reason {
        SortReason::InitialLoad | SortReason::ComparerChanged | SortReason::Reset => {
            ApplyStrategy::Rebuild
        }
        SortReason::DataChanged if change_count > reset_threshold => ApplyStrategy::Rebuild,
        SortReason::DataChanged => ApplyStrategy::Incremental,
        SortReason::Reorder => ApplyStrategy::Incremental,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_reasons_always_rebuild() {
        for reason in [
            SortReason::InitialLoad,
            SortReason::ComparerChanged,
            SortReason::Reset,
        ] {
            assert_eq!(choose_strategy(reason, 0, 50), ApplyStrategy::Rebuild);
            assert_eq!(choose_strategy(reason, 1, 50), ApplyStrategy::Rebuild);
        }
    }

    #[test]
    fn test_reorder_always_incremental() {
        assert_eq!(
            choose_strategy(SortReason::Reorder, 10_000, 50),
            ApplyStrategy::Incremental
        );
    }

    #[test]
    fn test_data_changed_respects_threshold() {
        assert_eq!(
            choose_strategy(SortReason::DataChanged, 49, 50),
            ApplyStrategy::Incremental
        );
        assert_eq!(
            choose_strategy(SortReason::DataChanged, 51, 50),
            ApplyStrategy::Rebuild
        );
    }

    #[test]
    fn test_count_at_threshold_stays_incremental() {
        assert_eq!(
            choose_strategy(SortReason::DataChanged, 50, 50),
            ApplyStrategy::Incremental
        );
    }

    #[test]
    fn test_zero_threshold_rebuilds_any_nonempty_batch() {
        assert_eq!(
            choose_strategy(SortReason::DataChanged, 0, 0),
            ApplyStrategy::Incremental
        );
        assert_eq!(
            choose_strategy(SortReason::DataChanged, 1, 0),
            ApplyStrategy::Rebuild
        );
    }
}
