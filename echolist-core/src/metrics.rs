//! Metric registration for observability

use metrics::describe_counter;

/// Register descriptions for every metric this crate emits.
///
/// Installing a recorder is left to the embedding application; without one,
/// both this call and the emission sites are no-ops.
pub fn init_metrics() {
    // Adaptor metrics
    describe_counter!(
        "adaptor.batches.total",
        "Change batches handed to the adaptor"
    );
    describe_counter!(
        "adaptor.rebuilds.total",
        "Batches applied by clearing and reloading the target"
    );
    describe_counter!(
        "adaptor.edits.applied",
        "Positional edits replayed onto the target"
    );
    describe_counter!(
        "adaptor.contract_violations.total",
        "Changes rejected for addressing an index outside the target"
    );

    // Binding metrics
    describe_counter!(
        "binding.notifications.raised",
        "Notifications delivered by observable lists"
    );
}
