//! # Grouper
//!
//! Partitions a sorted row list into contiguous named groups, one per
//! framework-specific grouping key. A [`Group`] is a view over a slice
//! of the row array: `start_index` and `count` address the member rows
//! without copying them.
//!
//! ## Precondition
//!
//! Rows sharing a grouping key must be contiguous, which holds after
//! [`crate::sort_rows`]. The grouper does not re-sort: interleaved keys
//! produce one group per contiguous run, not one per key. Callers sort
//! first.
//!
//! ## Descending Order
//!
//! Groups are always derived and sorted ascending; `descending` reverses
//! the finished group list. One mechanism for every framework.

use serde::{Deserialize, Serialize};

use regview_core::ControlRow;

use crate::strategy::strategy_for;

/// A contiguous run of rows sharing a grouping key, rendered as a
/// collapsible section.
///
/// For ascending output over pre-sorted rows, `start_index` values are
/// strictly increasing and `start_index + count` of one group equals the
/// `start_index` of the next: the groups partition the row array with no
/// gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// The grouping key (domain prefix, control ID, or payload field).
    pub key: String,
    /// Display name for the section header.
    pub name: String,
    /// Index of the group's first row in the source array.
    pub start_index: usize,
    /// Number of contiguous member rows.
    pub count: usize,
    /// Collapse state for the rendering layer. Always `false` on a
    /// freshly computed group; groups carry no identity across
    /// recomputation.
    pub is_collapsed: bool,
}

/// Partition pre-sorted rows into named groups ordered by the
/// framework's comparator, reversed when `descending`.
///
/// Unknown framework key: no groups (the caller renders the rows
/// ungrouped). Empty input: no groups.
pub fn group_and_sort(rows: &[ControlRow], descending: bool, framework_key: &str) -> Vec<Group> {
    let Some(strategy) = strategy_for(framework_key) else {
        tracing::debug!(framework_key, "no strategy registered; rows left ungrouped");
        return Vec::new();
    };

    let mut groups: Vec<Group> = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let key = strategy.group_key_for_row(row);
        match groups.last_mut() {
            Some(last) if last.key == key => last.count += 1,
            _ => groups.push(Group {
                key,
                name: String::new(),
                start_index: index,
                count: 1,
                is_collapsed: false,
            }),
        }
    }

    for group in &mut groups {
        let members = &rows[group.start_index..group.start_index + group.count];
        group.name = strategy.group_name(&group.key, members);
    }

    let ordering = strategy.ordering();
    groups.sort_by(|a, b| ordering.compare(&a.key, &b.key));
    if descending {
        groups.reverse();
    }
    groups
}
