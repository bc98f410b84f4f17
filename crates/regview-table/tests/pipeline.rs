//! End-to-end pipeline tests: sort, group, and look up a dataset the way
//! the table components drive the library.

use std::collections::HashMap;

use regview_core::{ControlRow, Framework};
use regview_table::{build_lookup_map, group_and_sort, sort_rows, unique_domains};

const NIST: &str = "NIST_SP_800-53_R4";

fn nist_dataset() -> Vec<ControlRow> {
    vec![
        ControlRow::new("AC-2: Account Mgmt"),
        ControlRow::new("AC-1: Policy"),
        ControlRow::new("AC-10: Access"),
    ]
}

#[test]
fn sort_then_group_single_family() {
    let mut rows = nist_dataset();
    sort_rows(&mut rows, NIST);

    let controls: Vec<_> = rows.iter().map(|r| r.control.as_str()).collect();
    assert_eq!(controls, vec!["AC-1: Policy", "AC-2: Account Mgmt", "AC-10: Access"]);

    let groups = group_and_sort(&rows, false, NIST);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].key, "AC");
    assert_eq!(groups[0].start_index, 0);
    assert_eq!(groups[0].count, 3);
}

#[test]
fn full_view_model_for_a_mixed_dataset() {
    let mut rows = vec![
        ControlRow::new("SC-7: Boundary Protection"),
        ControlRow::new("AC-2: Account Management"),
        ControlRow::new("AU-9: Protection of Audit Information"),
        ControlRow::new("AC-17: Remote Access"),
        ControlRow::new("AU-2: Audit Events"),
    ];
    sort_rows(&mut rows, NIST);
    let groups = group_and_sort(&rows, false, NIST);
    let domains = unique_domains(&rows, NIST);
    let lookup = build_lookup_map(&rows, NIST);

    let group_keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(group_keys, vec!["AC", "AU", "SC"]);

    let covered: usize = groups.iter().map(|g| g.count).sum();
    assert_eq!(covered, rows.len());

    let domain_keys: Vec<_> = domains.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(domain_keys, vec!["AC", "AU", "SC"]);
    assert_eq!(domains[0].text, "AC: Access Control");

    assert_eq!(
        lookup.get("SC-7").map(String::as_str),
        Some("Boundary Protection")
    );
    assert_eq!(lookup.len(), 5);
}

#[test]
fn unknown_framework_degrades_across_the_whole_pipeline() {
    let original = nist_dataset();
    let mut rows = original.clone();

    sort_rows(&mut rows, "NOT_A_REAL_FRAMEWORK");
    assert_eq!(rows, original);

    assert!(group_and_sort(&rows, false, "NOT_A_REAL_FRAMEWORK").is_empty());
    assert!(unique_domains(&rows, "NOT_A_REAL_FRAMEWORK").is_empty());
    assert!(build_lookup_map(&rows, "NOT_A_REAL_FRAMEWORK").is_empty());
}

#[test]
fn alias_key_drives_the_same_pipeline_as_canonical() {
    let mut canonical_rows = nist_dataset();
    let mut alias_rows = nist_dataset();

    sort_rows(&mut canonical_rows, "NIST_SP_800-53_R4");
    sort_rows(&mut alias_rows, "NIST_SP_800-53_Rev4");
    assert_eq!(canonical_rows, alias_rows);

    let canonical_groups = group_and_sort(&canonical_rows, false, "NIST_SP_800-53_R4");
    let alias_groups = group_and_sort(&alias_rows, false, "NIST_SP_800-53_Rev4");
    assert_eq!(canonical_groups, alias_groups);
}

#[test]
fn lookup_map_is_replaced_per_framework_not_merged() {
    // The caller owns the map lifecycle: each framework selection builds
    // a fresh map from that framework's rows.
    let nist_rows = nist_dataset();
    let pci_rows = vec![
        ControlRow::new("1.2: Network security controls"),
        ControlRow::new("1.2.1: Sub a"),
    ];

    let maps: HashMap<Framework, HashMap<String, String>> = [
        (
            Framework::NistSp80053R4,
            build_lookup_map(&nist_rows, "NIST_SP_800-53_R4"),
        ),
        (
            Framework::PciDssV4,
            build_lookup_map(&pci_rows, "PCI_DSS_v4.0"),
        ),
    ]
    .into_iter()
    .collect();

    assert!(maps[&Framework::NistSp80053R4].contains_key("AC-2"));
    assert!(!maps[&Framework::NistSp80053R4].contains_key("1.2"));
    assert!(maps[&Framework::PciDssV4].contains_key("1.2"));
}

#[test]
fn deserialized_payload_flows_through_the_pipeline() {
    let payload = r#"[
        {"control": "AC-10: Concurrent Session Control", "acfID": "ACF-1100"},
        {"control": "AC-2: Account Management", "acfID": "ACF-1052"},
        {"control": "AC-9: Previous Logon Notification"}
    ]"#;
    let mut rows: Vec<ControlRow> = serde_json::from_str(payload).unwrap();

    sort_rows(&mut rows, NIST);
    let controls: Vec<_> = rows.iter().map(|r| r.control.as_str()).collect();
    assert_eq!(
        controls,
        vec![
            "AC-2: Account Management",
            "AC-9: Previous Logon Notification",
            "AC-10: Concurrent Session Control"
        ]
    );

    sort_rows(&mut rows, "ACF");
    let first: Vec<_> = rows.iter().map(|r| r.acf_id.as_deref()).collect();
    assert_eq!(first, vec![None, Some("ACF-1052"), Some("ACF-1100")]);
}
