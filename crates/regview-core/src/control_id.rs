//! # Control-ID Normalization
//!
//! Pure string normalizers for raw control identifiers as they arrive
//! from the upstream mapping payloads.
//!
//! Two distinct operations exist because the raw strings carry two
//! distinct annotation styles:
//!
//! - [`sanitize_annotated`] handles mapping entries of the form
//!   `"AC-2 (enhancement)|note"`: parenthesized substrings are removed
//!   and everything from the first pipe onward is dropped.
//! - [`sanitize_labeled`] handles display strings of the form
//!   `"AC-2: Account Management"`: only the leading token before the
//!   first `:` or `(` is kept.
//!
//! The two are not interchangeable. `sanitize_annotated("AC-2: x")`
//! returns `"AC-2: x"` unchanged, which is not an ID token.
//!
//! [`extract_prefix`] derives the coarse domain key (`AC` from `AC-2`,
//! `1` from `1.2.3`) that links the domain selector to the control-ID
//! selector.

use crate::framework::Framework;

/// Normalize an annotated mapping entry into a bare control-ID token.
///
/// Processing order: truncate at the first `|`, remove every
/// parenthesized substring, trim surrounding whitespace. An unclosed
/// `(` drops the remainder of the string.
///
/// ```
/// use regview_core::sanitize_annotated;
///
/// assert_eq!(sanitize_annotated("AC-2 (enh1)|extra"), "AC-2");
/// assert_eq!(sanitize_annotated("AC-2"), "AC-2");
/// assert_eq!(sanitize_annotated(""), "");
/// ```
pub fn sanitize_annotated(raw: &str) -> String {
    let before_pipe = match raw.find('|') {
        Some(idx) => &raw[..idx],
        None => raw,
    };

    let mut out = String::with_capacity(before_pipe.len());
    let mut depth: u32 = 0;
    for c in before_pipe.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }

    out.trim().to_string()
}

/// Extract the leading ID token from a labeled display string.
///
/// Truncates at the first `:` or `(`, whichever comes first, and trims
/// surrounding whitespace.
///
/// ```
/// use regview_core::sanitize_labeled;
///
/// assert_eq!(sanitize_labeled("AC-2: Account Management"), "AC-2");
/// assert_eq!(sanitize_labeled("AC-2 (1): Flow Enforcement"), "AC-2");
/// assert_eq!(sanitize_labeled(""), "");
/// ```
pub fn sanitize_labeled(raw: &str) -> String {
    let end = raw
        .find(|c| c == ':' || c == '(')
        .unwrap_or(raw.len());
    raw[..end].trim().to_string()
}

/// Derive the coarse domain prefix of a control string.
///
/// NIST IDs split at the first `-` (`AC-2` yields `AC`); every other
/// framework splits at the first `.` (`1.2.3` yields `1`). The result is
/// passed through [`sanitize_labeled`] so a missing separator still
/// yields a bare token. Empty input yields `None`.
pub fn extract_prefix(control: &str, framework: Framework) -> Option<String> {
    if control.is_empty() {
        return None;
    }
    let sep = match framework {
        Framework::NistSp80053R4 => '-',
        _ => '.',
    };
    let head = control.split(sep).next().unwrap_or(control);
    Some(sanitize_labeled(head))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotated_strips_parenthetical_and_pipe() {
        assert_eq!(sanitize_annotated("AC-2 (enhancement)"), "AC-2");
        assert_eq!(sanitize_annotated("AC-2|note"), "AC-2");
        assert_eq!(sanitize_annotated("AC-2 (enh1)|extra"), "AC-2");
    }

    #[test]
    fn annotated_passthrough_without_special_characters() {
        assert_eq!(sanitize_annotated("AC-2"), "AC-2");
        assert_eq!(sanitize_annotated("1.2.10"), "1.2.10");
    }

    #[test]
    fn annotated_empty_and_degenerate_inputs() {
        assert_eq!(sanitize_annotated(""), "");
        assert_eq!(sanitize_annotated("(only parens)"), "");
        assert_eq!(sanitize_annotated("|trailing"), "");
        assert_eq!(sanitize_annotated("   "), "");
    }

    #[test]
    fn annotated_unclosed_paren_drops_remainder() {
        assert_eq!(sanitize_annotated("AC-2 (unclosed"), "AC-2");
    }

    #[test]
    fn annotated_multiple_parentheticals() {
        assert_eq!(sanitize_annotated("AC-2 (a) (b)"), "AC-2");
    }

    #[test]
    fn labeled_takes_leading_token() {
        assert_eq!(sanitize_labeled("AC-2: Account Management"), "AC-2");
        assert_eq!(sanitize_labeled("1.2.10: Requirement text"), "1.2.10");
        assert_eq!(sanitize_labeled("AC-2 (1): Enhancement"), "AC-2");
    }

    #[test]
    fn labeled_passthrough_and_empty() {
        assert_eq!(sanitize_labeled("AC-2"), "AC-2");
        assert_eq!(sanitize_labeled(""), "");
        assert_eq!(sanitize_labeled("(x)"), "");
    }

    #[test]
    fn the_two_normalizers_differ_on_labeled_input() {
        // sanitize_annotated is not a substitute for sanitize_labeled.
        assert_eq!(sanitize_annotated("AC-2: Account Management"), "AC-2: Account Management");
        assert_eq!(sanitize_labeled("AC-2: Account Management"), "AC-2");
    }

    #[test]
    fn prefix_nist_splits_on_hyphen() {
        assert_eq!(
            extract_prefix("AC-2: x", Framework::NistSp80053R4),
            Some("AC".to_string())
        );
        assert_eq!(
            extract_prefix("SC-7", Framework::NistSp80053R4),
            Some("SC".to_string())
        );
    }

    #[test]
    fn prefix_dotted_frameworks_split_on_dot() {
        assert_eq!(
            extract_prefix("1.2.3: x", Framework::PciDssV4),
            Some("1".to_string())
        );
        assert_eq!(
            extract_prefix("A.12.4.1", Framework::Iso27001),
            Some("A".to_string())
        );
        assert_eq!(
            extract_prefix("CC1.2", Framework::Soc2Type2),
            Some("CC1".to_string())
        );
    }

    #[test]
    fn prefix_without_separator_yields_bare_token() {
        assert_eq!(
            extract_prefix("AC: Access Control", Framework::NistSp80053R4),
            Some("AC".to_string())
        );
    }

    #[test]
    fn prefix_empty_input_is_none() {
        for f in Framework::all() {
            assert_eq!(extract_prefix("", *f), None);
        }
    }
}
