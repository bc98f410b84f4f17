//! # Control-ID Comparators
//!
//! Total-order comparison functions for the three ID shapes the supported
//! frameworks use, plus the enum that lets a strategy carry its comparator
//! as plain data.
//!
//! Every comparator in this module:
//!
//! - is a strict total order (reflexive-equal, antisymmetric, transitive),
//! - compares numeric segments numerically, so `AC-10` sorts after `AC-9`
//!   and `1.10` sorts after `1.9`,
//! - treats malformed or missing numeric segments as zero,
//! - never panics and never mutates its inputs.
//!
//! Callers are expected to pass normalized ID tokens (see
//! [`crate::control_id`]); trailing label text is not stripped here.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// The comparator family a framework strategy sorts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdOrdering {
    /// Leading alphabetic run, then numeric runs ascending (`AC-2` style).
    AlphaNumeric,
    /// Leading alphabetic run ascending, numeric runs descending. A
    /// historical variant kept for the alternate-column sort path that
    /// depends on it; no framework strategy uses it for row sorting.
    AlphaNumericDesc,
    /// Dot-separated numeric segments (`1.2.10` style).
    DottedNumeric,
    /// Leading segment compared as text, remaining dot-separated segments
    /// numeric (`A.12.4.1`, `CC1.2` style).
    DottedAlpha,
}

impl IdOrdering {
    /// Compare two ID tokens under this ordering.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Self::AlphaNumeric => cmp_alpha_numeric(a, b),
            Self::AlphaNumericDesc => cmp_alpha_numeric_desc(a, b),
            Self::DottedNumeric => cmp_dotted_numeric(a, b),
            Self::DottedAlpha => cmp_dotted_alpha(a, b),
        }
    }
}

/// Compare hyphenated alpha-numeric IDs: alphabetic prefix first
/// (lexicographic), then numeric runs element-wise.
///
/// `AC-9` sorts before `AC-10`, and `AC-2` before `AC-2 (1)` (the
/// enhancement number is a second numeric run).
pub fn cmp_alpha_numeric(a: &str, b: &str) -> Ordering {
    let (alpha_a, nums_a) = split_alpha_numeric(a);
    let (alpha_b, nums_b) = split_alpha_numeric(b);
    alpha_a.cmp(&alpha_b).then_with(|| nums_a.cmp(&nums_b))
}

/// Variant of [`cmp_alpha_numeric`] with the numeric tie-break reversed.
///
/// The alphabetic prefix still sorts ascending; within a prefix the
/// numeric runs sort descending (`AC-10` before `AC-9`).
pub fn cmp_alpha_numeric_desc(a: &str, b: &str) -> Ordering {
    let (alpha_a, nums_a) = split_alpha_numeric(a);
    let (alpha_b, nums_b) = split_alpha_numeric(b);
    alpha_a.cmp(&alpha_b).then_with(|| nums_b.cmp(&nums_a))
}

/// Compare dot-separated numeric IDs segment by segment.
///
/// Shorter sequences sort before longer ones when all shared segments are
/// equal: `1.2` before `1.2.1`. Segments that fail numeric parse compare
/// as zero.
pub fn cmp_dotted_numeric(a: &str, b: &str) -> Ordering {
    dotted_segments(a).cmp(&dotted_segments(b))
}

/// Compare dotted IDs whose leading segment may contain letters.
///
/// The leading segment compares as text; the remaining segments compare
/// numerically as in [`cmp_dotted_numeric`]. Non-numeric trailing
/// segments compare as zero.
pub fn cmp_dotted_alpha(a: &str, b: &str) -> Ordering {
    let (head_a, rest_a) = dotted_head_and_rest(a);
    let (head_b, rest_b) = dotted_head_and_rest(b);
    head_a.cmp(head_b).then_with(|| rest_a.cmp(&rest_b))
}

/// Split an ID into its leading alphabetic run and the numeric runs that
/// follow. Non-alphanumeric characters act as separators only.
fn split_alpha_numeric(id: &str) -> (&str, Vec<u64>) {
    let alpha_end = id
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(id.len());
    let alpha = &id[..alpha_end];

    let mut nums = Vec::new();
    let mut current: Option<u64> = None;
    for c in id[alpha_end..].chars() {
        match c.to_digit(10) {
            Some(d) => {
                let acc = current.unwrap_or(0);
                current = Some(acc.saturating_mul(10).saturating_add(u64::from(d)));
            }
            None => {
                if let Some(n) = current.take() {
                    nums.push(n);
                }
            }
        }
    }
    if let Some(n) = current {
        nums.push(n);
    }

    (alpha, nums)
}

/// Parse every dot-separated segment as a number, with parse failures
/// mapped to zero.
fn dotted_segments(id: &str) -> Vec<u64> {
    id.split('.').map(numeric_segment).collect()
}

/// Split a dotted ID into its leading segment and the numeric values of
/// the remaining segments.
fn dotted_head_and_rest(id: &str) -> (&str, Vec<u64>) {
    let mut parts = id.split('.');
    let head = parts.next().unwrap_or("");
    let rest = parts.map(numeric_segment).collect();
    (head, rest)
}

fn numeric_segment(s: &str) -> u64 {
    s.trim().parse().unwrap_or(0)
}
