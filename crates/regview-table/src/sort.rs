//! # Row Sorter
//!
//! Orders a flat row list by the framework's ID comparator. The grouper
//! ([`crate::group`]) requires rows sorted this way before it runs.

use regview_core::ControlRow;

use crate::strategy::strategy_for;

/// Sort rows in place by the framework's comparator over each row's
/// normalized control ID.
///
/// The sort is stable: rows with equal IDs keep their relative order.
/// The `&mut` receiver is the contract: callers must not assume the
/// input order survives this call.
///
/// Unknown framework key: the rows are left exactly as given. This is
/// the documented degrade path, not an error.
pub fn sort_rows(rows: &mut [ControlRow], framework_key: &str) {
    let Some(strategy) = strategy_for(framework_key) else {
        tracing::debug!(framework_key, "no strategy registered; row order unchanged");
        return;
    };
    let ordering = strategy.ordering();
    rows.sort_by(|a, b| {
        ordering.compare(
            &strategy.control_id_for_row(a),
            &strategy.control_id_for_row(b),
        )
    });
}
