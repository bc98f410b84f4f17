//! # regview-table — View-Model Operations for Control-Mapping Tables
//!
//! Turns flat [`ControlRow`] lists into the sorted, grouped, sanitized
//! view models the table components render. Three operations make up the
//! public surface, all dispatching through the per-framework strategy
//! table:
//!
//! - **Sorter** ([`sort_rows`]): orders rows by the framework's ID
//!   comparator, in place.
//! - **Grouper** ([`group_and_sort`]): partitions pre-sorted rows into
//!   contiguous named groups with exact `start_index`/`count` coverage.
//! - **Lookup** ([`build_lookup_map`]): builds the ID-to-title map used
//!   to resolve bare control references.
//!
//! ## Architecture
//!
//! ```text
//! regview-core (types)   -->   regview-table (operations)
//!   Framework, IdOrdering        FrameworkStrategy trait
//!   ControlRow, DomainOption     sort_rows / group_and_sort / lookups
//! ```
//!
//! ## Degradation Policy
//!
//! Every operation takes the framework as a key string. An unknown key is
//! not an error: the sorter leaves the rows untouched, the grouper
//! returns no groups, and the lookup map comes back empty. The degrade
//! path is logged at debug level.

pub mod group;
pub mod sort;
pub mod strategy;

pub use group::{group_and_sort, Group};
pub use sort::sort_rows;
pub use strategy::{strategy_for, strategy_of, FrameworkStrategy};

use std::collections::HashMap;

use regview_core::{ControlRow, DomainOption};

/// Derive the distinct domain selector options for a dataset.
///
/// Options come back sorted by the framework's comparator. Unknown
/// framework key: empty list.
pub fn unique_domains(rows: &[ControlRow], framework_key: &str) -> Vec<DomainOption> {
    match strategy_for(framework_key) {
        Some(s) => s.unique_domains(rows),
        None => {
            tracing::debug!(framework_key, "no strategy registered; no domain options");
            Vec::new()
        }
    }
}

/// Build the control-ID to title lookup map for a dataset.
///
/// The map is built fresh on every call; callers replace (never merge)
/// the previous map when the framework selection changes. Unknown
/// framework key: empty map.
pub fn build_lookup_map(rows: &[ControlRow], framework_key: &str) -> HashMap<String, String> {
    match strategy_for(framework_key) {
        Some(s) => s.lookup_map(rows),
        None => {
            tracing::debug!(framework_key, "no strategy registered; empty lookup map");
            HashMap::new()
        }
    }
}

/// Sort a selector option list by the framework's comparator, returning
/// a new list. The input need not be pre-sorted. Unknown framework key:
/// options returned in their original order.
pub fn sort_control_ids(options: Vec<DomainOption>, framework_key: &str) -> Vec<DomainOption> {
    match strategy_for(framework_key) {
        Some(s) => s.sort_control_ids(options),
        None => {
            tracing::debug!(framework_key, "no strategy registered; options left unsorted");
            options
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regview_core::ControlRow;

    fn nist_rows() -> Vec<ControlRow> {
        vec![
            ControlRow::new("AU-3: Content of Audit Records"),
            ControlRow::new("AC-2: Account Management"),
            ControlRow::new("AC-10: Concurrent Session Control"),
        ]
    }

    #[test]
    fn unique_domains_unknown_framework_is_empty() {
        assert!(unique_domains(&nist_rows(), "NOT_A_REAL_FRAMEWORK").is_empty());
    }

    #[test]
    fn unique_domains_sorted_and_distinct() {
        let domains = unique_domains(&nist_rows(), "NIST_SP_800-53_R4");
        let keys: Vec<_> = domains.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["AC", "AU"]);
    }

    #[test]
    fn lookup_map_unknown_framework_is_empty() {
        assert!(build_lookup_map(&nist_rows(), "NOT_A_REAL_FRAMEWORK").is_empty());
    }

    #[test]
    fn lookup_map_resolves_titles() {
        let map = build_lookup_map(&nist_rows(), "NIST_SP_800-53_R4");
        assert_eq!(map.get("AC-2").map(String::as_str), Some("Account Management"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn sort_control_ids_orders_numerically() {
        let options = vec![
            DomainOption::bare("AC-10"),
            DomainOption::bare("AC-2"),
            DomainOption::bare("AC-9"),
        ];
        let sorted = sort_control_ids(options, "NIST_SP_800-53_R4");
        let keys: Vec<_> = sorted.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["AC-2", "AC-9", "AC-10"]);
    }

    #[test]
    fn sort_control_ids_unknown_framework_keeps_order() {
        let options = vec![DomainOption::bare("B"), DomainOption::bare("A")];
        let sorted = sort_control_ids(options.clone(), "NOT_A_REAL_FRAMEWORK");
        assert_eq!(sorted, options);
    }
}
