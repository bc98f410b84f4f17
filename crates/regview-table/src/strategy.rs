//! # Framework Strategy Table
//!
//! One [`FrameworkStrategy`] per [`Framework`] variant, dispatched through
//! [`strategy_of`] (by enum) or [`strategy_for`] (by key string, the
//! degrade-gracefully entry point the sorter and grouper use). Once a
//! caller holds a strategy it never branches on the framework name again.
//!
//! Strategies are stateless unit structs shared as `'static` references:
//! constructed at compile time, never mutated, safe to hand to any number
//! of call sites.
//!
//! ## Per-Framework Shapes
//!
//! | Framework | ID shape | Sort | Group key |
//! |-----------|----------|------|-----------|
//! | NIST SP 800-53 R4 | `AC-2` | alpha-numeric | domain prefix (`AC`) |
//! | CIS Azure 2.0.0 | `1.2.10` | dotted-numeric | full sanitized ID |
//! | PCI DSS v4.0 | `1.2.10` | dotted-numeric | first two segments (`1.2`) |
//! | ISO 27001:2013 | `A.12.4.1` | dotted-alpha | leading segment (`A`) |
//! | SOC 2 Type 2 | `CC1.2` | dotted-alpha | leading segment (`CC1`) |
//! | ACF (virtual) | `ACF-1052` | alpha-numeric | `acfID` field |
//! | MCSB (virtual) | `IM-1` | alpha-numeric | `mcsbID` field |

use std::collections::HashMap;
use std::collections::HashSet;

use regview_core::{
    extract_prefix, sanitize_annotated, sanitize_labeled, ControlRow, DomainOption, Framework,
    IdOrdering,
};

/// Framework-specific parsing, sorting, and grouping behavior.
///
/// Implementations are pure: no method mutates the strategy or its
/// inputs, and the same inputs always produce the same outputs.
pub trait FrameworkStrategy: Send + Sync {
    /// The framework this strategy serves.
    fn framework(&self) -> Framework;

    /// The comparator family used for row and option ordering.
    fn ordering(&self) -> IdOrdering;

    /// The sort identity of a row under this dimension: the sanitized
    /// control ID for regulatory frameworks, the ACF/MCSB field for the
    /// virtual dimensions. Rows missing the relevant field yield an
    /// empty string, which sorts first.
    fn control_id_for_row(&self, row: &ControlRow) -> String {
        sanitize_labeled(&row.control)
    }

    /// Light sanitization for a raw mapping ID arriving outside a row
    /// (filter selections, cross-references). Identity apart from
    /// trimming for most frameworks.
    fn sanitize_control_id(&self, id: &str) -> String {
        id.trim().to_string()
    }

    /// The grouping key of a row. Rows sharing a key must be contiguous
    /// in a sorted dataset; the grouper relies on that.
    fn group_key_for_row(&self, row: &ControlRow) -> String;

    /// Display name for a group. `rows` is the contiguous slice of
    /// member rows, available for frameworks that synthesize the header
    /// from row text.
    fn group_name(&self, key: &str, rows: &[ControlRow]) -> String {
        let _ = rows;
        key.to_string()
    }

    /// The distinct domain selector options for a dataset, sorted by
    /// this framework's comparator.
    fn unique_domains(&self, rows: &[ControlRow]) -> Vec<DomainOption>;

    /// Build the ID-to-title lookup map. Rows without an ID or a title
    /// are skipped.
    fn lookup_map(&self, rows: &[ControlRow]) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for row in rows {
            let id = self.control_id_for_row(row);
            if id.is_empty() {
                continue;
            }
            if let Some(label) = row.label() {
                map.insert(id, label.to_string());
            }
        }
        map
    }

    /// Sort a selector option list with this framework's comparator,
    /// returning a new list. The input need not be pre-sorted.
    fn sort_control_ids(&self, mut options: Vec<DomainOption>) -> Vec<DomainOption> {
        options.sort_by(|a, b| self.ordering().compare(&a.key, &b.key));
        options
    }
}

/// Resolve the strategy for a framework key string.
///
/// Returns `None` for unknown keys; callers degrade to identity behavior
/// rather than failing.
pub fn strategy_for(key: &str) -> Option<&'static dyn FrameworkStrategy> {
    Framework::from_key(key).map(strategy_of)
}

/// Resolve the strategy for a framework variant. Total: every variant
/// has exactly one strategy.
pub fn strategy_of(framework: Framework) -> &'static dyn FrameworkStrategy {
    match framework {
        Framework::NistSp80053R4 => &NistStrategy,
        Framework::CisAzure2 => &CisStrategy,
        Framework::PciDssV4 => &PciStrategy,
        Framework::Iso27001 => &IsoStrategy,
        Framework::Soc2Type2 => &SocStrategy,
        Framework::Acf => &AcfStrategy,
        Framework::Mcsb => &McsbStrategy,
    }
}

// ---------------------------------------------------------------------------
// NIST SP 800-53 R4
// ---------------------------------------------------------------------------

/// Strategy for NIST SP 800-53 R4: hyphenated alpha-numeric IDs grouped
/// by control family.
#[derive(Debug)]
pub struct NistStrategy;

impl FrameworkStrategy for NistStrategy {
    fn framework(&self) -> Framework {
        Framework::NistSp80053R4
    }

    fn ordering(&self) -> IdOrdering {
        IdOrdering::AlphaNumeric
    }

    /// NIST IDs keep their enhancement subsection: `"AC-2 (1): Flow
    /// Enforcement"` yields `"AC-2 (1)"`. The comparator reads the
    /// subsection as a second numeric run, so enhancements sort inside
    /// their base control.
    fn control_id_for_row(&self, row: &ControlRow) -> String {
        match row.control.split_once(':') {
            Some((head, _)) => head.trim().to_string(),
            None => row.control.trim().to_string(),
        }
    }

    fn sanitize_control_id(&self, id: &str) -> String {
        sanitize_annotated(id)
    }

    fn group_key_for_row(&self, row: &ControlRow) -> String {
        extract_prefix(&row.control, Framework::NistSp80053R4).unwrap_or_default()
    }

    fn group_name(&self, key: &str, _rows: &[ControlRow]) -> String {
        match nist_family_title(key) {
            Some(title) => format!("{key}: {title}"),
            None => key.to_string(),
        }
    }

    fn unique_domains(&self, rows: &[ControlRow]) -> Vec<DomainOption> {
        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for row in rows {
            let key = self.group_key_for_row(row);
            if key.is_empty() || !seen.insert(key.clone()) {
                continue;
            }
            let text = self.group_name(&key, &[]);
            options.push(DomainOption {
                key,
                text,
            });
        }
        self.sort_control_ids(options)
    }

    /// NIST lookup maps drop rows whose ID still contains a parenthesis:
    /// enhancement subsections are not referenceable by bare ID, only
    /// base controls are.
    fn lookup_map(&self, rows: &[ControlRow]) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for row in rows {
            let id = self.control_id_for_row(row);
            if id.is_empty() {
                continue;
            }
            if id.contains('(') {
                tracing::debug!(control = %row.control, "skipping enhancement row in lookup map");
                continue;
            }
            if let Some(label) = row.label() {
                map.insert(id, label.to_string());
            }
        }
        map
    }
}

/// Control family titles for NIST SP 800-53 R4 group headers.
fn nist_family_title(key: &str) -> Option<&'static str> {
    let title = match key {
        "AC" => "Access Control",
        "AT" => "Awareness and Training",
        "AU" => "Audit and Accountability",
        "CA" => "Security Assessment and Authorization",
        "CM" => "Configuration Management",
        "CP" => "Contingency Planning",
        "IA" => "Identification and Authentication",
        "IR" => "Incident Response",
        "MA" => "Maintenance",
        "MP" => "Media Protection",
        "PE" => "Physical and Environmental Protection",
        "PL" => "Planning",
        "PM" => "Program Management",
        "PS" => "Personnel Security",
        "RA" => "Risk Assessment",
        "SA" => "System and Services Acquisition",
        "SC" => "System and Communications Protection",
        "SI" => "System and Information Integrity",
        _ => return None,
    };
    Some(title)
}

// ---------------------------------------------------------------------------
// CIS Azure 2.0.0
// ---------------------------------------------------------------------------

/// Strategy for CIS Azure Foundations 2.0.0: dotted-numeric IDs, one
/// group per control ID (contiguous duplicate IDs share a group).
#[derive(Debug)]
pub struct CisStrategy;

impl FrameworkStrategy for CisStrategy {
    fn framework(&self) -> Framework {
        Framework::CisAzure2
    }

    fn ordering(&self) -> IdOrdering {
        IdOrdering::DottedNumeric
    }

    fn group_key_for_row(&self, row: &ControlRow) -> String {
        sanitize_labeled(&row.control)
    }

    fn unique_domains(&self, rows: &[ControlRow]) -> Vec<DomainOption> {
        dotted_prefix_domains(self, rows)
    }
}

// ---------------------------------------------------------------------------
// PCI DSS v4.0
// ---------------------------------------------------------------------------

/// Strategy for PCI DSS v4.0: dotted-numeric IDs grouped by the first
/// two segments, with headers synthesized from the matching requirement
/// row's text.
#[derive(Debug)]
pub struct PciStrategy;

impl FrameworkStrategy for PciStrategy {
    fn framework(&self) -> Framework {
        Framework::PciDssV4
    }

    fn ordering(&self) -> IdOrdering {
        IdOrdering::DottedNumeric
    }

    fn group_key_for_row(&self, row: &ControlRow) -> String {
        let id = sanitize_labeled(&row.control);
        let mut segments = id.split('.');
        match (segments.next(), segments.next()) {
            (Some(a), Some(b)) => format!("{a}.{b}"),
            _ => id,
        }
    }

    /// Header text comes from the group's own requirement row: the
    /// member row whose ID equals the group key, when present.
    fn group_name(&self, key: &str, rows: &[ControlRow]) -> String {
        rows.iter()
            .find(|row| sanitize_labeled(&row.control) == key)
            .and_then(|row| row.label())
            .map(|label| format!("{key}: {label}"))
            .unwrap_or_else(|| key.to_string())
    }

    fn unique_domains(&self, rows: &[ControlRow]) -> Vec<DomainOption> {
        dotted_prefix_domains(self, rows)
    }
}

// ---------------------------------------------------------------------------
// ISO 27001:2013 and SOC 2 Type 2
// ---------------------------------------------------------------------------

/// Strategy for ISO/IEC 27001:2013: dotted IDs with an alphabetic annex
/// prefix, grouped by the leading segment.
#[derive(Debug)]
pub struct IsoStrategy;

impl FrameworkStrategy for IsoStrategy {
    fn framework(&self) -> Framework {
        Framework::Iso27001
    }

    fn ordering(&self) -> IdOrdering {
        IdOrdering::DottedAlpha
    }

    fn group_key_for_row(&self, row: &ControlRow) -> String {
        leading_dotted_segment(&row.control)
    }

    fn unique_domains(&self, rows: &[ControlRow]) -> Vec<DomainOption> {
        dotted_prefix_domains(self, rows)
    }
}

/// Strategy for SOC 2 Type 2: trust-services IDs such as `CC1.2`,
/// grouped by the leading segment.
#[derive(Debug)]
pub struct SocStrategy;

impl FrameworkStrategy for SocStrategy {
    fn framework(&self) -> Framework {
        Framework::Soc2Type2
    }

    fn ordering(&self) -> IdOrdering {
        IdOrdering::DottedAlpha
    }

    fn group_key_for_row(&self, row: &ControlRow) -> String {
        leading_dotted_segment(&row.control)
    }

    fn unique_domains(&self, rows: &[ControlRow]) -> Vec<DomainOption> {
        dotted_prefix_domains(self, rows)
    }
}

// ---------------------------------------------------------------------------
// Virtual dimensions: ACF and MCSB
// ---------------------------------------------------------------------------

/// Virtual strategy sorting and grouping by the row's `acfID` field.
#[derive(Debug)]
pub struct AcfStrategy;

impl FrameworkStrategy for AcfStrategy {
    fn framework(&self) -> Framework {
        Framework::Acf
    }

    fn ordering(&self) -> IdOrdering {
        IdOrdering::AlphaNumeric
    }

    fn control_id_for_row(&self, row: &ControlRow) -> String {
        row.acf_id.clone().unwrap_or_default()
    }

    fn group_key_for_row(&self, row: &ControlRow) -> String {
        self.control_id_for_row(row)
    }

    fn unique_domains(&self, rows: &[ControlRow]) -> Vec<DomainOption> {
        field_domains(self, rows)
    }
}

/// Virtual strategy sorting and grouping by the row's `mcsbID` field.
#[derive(Debug)]
pub struct McsbStrategy;

impl FrameworkStrategy for McsbStrategy {
    fn framework(&self) -> Framework {
        Framework::Mcsb
    }

    fn ordering(&self) -> IdOrdering {
        IdOrdering::AlphaNumeric
    }

    fn control_id_for_row(&self, row: &ControlRow) -> String {
        row.mcsb_id.clone().unwrap_or_default()
    }

    fn group_key_for_row(&self, row: &ControlRow) -> String {
        self.control_id_for_row(row)
    }

    fn unique_domains(&self, rows: &[ControlRow]) -> Vec<DomainOption> {
        field_domains(self, rows)
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn leading_dotted_segment(control: &str) -> String {
    let id = sanitize_labeled(control);
    id.split('.').next().unwrap_or("").to_string()
}

/// Distinct leading-dotted-segment options, sorted.
fn dotted_prefix_domains(
    strategy: &dyn FrameworkStrategy,
    rows: &[ControlRow],
) -> Vec<DomainOption> {
    let mut seen = HashSet::new();
    let mut options = Vec::new();
    for row in rows {
        let key = leading_dotted_segment(&row.control);
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        options.push(DomainOption::bare(key));
    }
    strategy.sort_control_ids(options)
}

/// Distinct field-value options for the virtual dimensions, sorted.
fn field_domains(strategy: &dyn FrameworkStrategy, rows: &[ControlRow]) -> Vec<DomainOption> {
    let mut seen = HashSet::new();
    let mut options = Vec::new();
    for row in rows {
        let key = strategy.control_id_for_row(row);
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        options.push(DomainOption::bare(key));
    }
    strategy.sort_control_ids(options)
}
