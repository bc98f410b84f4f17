//! # Framework Registry — Single Source of Truth
//!
//! Defines the [`Framework`] enum covering every regulatory standard the
//! dashboard can display, plus the two virtual dimensions (`ACF`, `MCSB`)
//! used for alternate-column sorting. This is the one definition used by
//! every crate in the workspace; the compiler enforces exhaustive `match`,
//! so adding a framework forces every strategy and every handler to
//! address it.
//!
//! ## Aliases
//!
//! The upstream dashboard referred to the same standard by two literal
//! keys depending on call path (`NIST_SP_800-53_R4` in the table query,
//! `NIST_SP_800-53_Rev4` in the filter query). Alias translation happens
//! here, in [`Framework::from_str`], and nowhere else: the strategy table
//! is keyed by the enum, so an alias can never fan out into a duplicate
//! strategy.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A regulatory framework (or virtual sort dimension) supported by the
/// control-mapping tables.
///
/// The serialized form is the canonical key string, matching what the
/// upstream dashboard sends when the user picks a framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Framework {
    /// NIST SP 800-53 Revision 4. Hyphenated alpha-numeric IDs (`AC-2`).
    NistSp80053R4,
    /// CIS Microsoft Azure Foundations Benchmark 2.0.0. Dotted-numeric
    /// IDs (`1.2.10`).
    CisAzure2,
    /// PCI DSS v4.0. Dotted-numeric IDs (`1.2.10`).
    PciDssV4,
    /// ISO/IEC 27001:2013. Dotted-alpha-numeric IDs (`A.12.4.1`).
    Iso27001,
    /// SOC 2 Type 2. Dotted-alpha-numeric IDs (`CC1.2`).
    Soc2Type2,
    /// Virtual dimension: sort and group by the row's ACF identifier
    /// instead of its regulatory control.
    Acf,
    /// Virtual dimension: sort and group by the row's MCSB identifier
    /// instead of its regulatory control.
    Mcsb,
}

impl Framework {
    /// Return all frameworks in canonical display order.
    pub fn all() -> &'static [Framework] {
        &[
            Self::NistSp80053R4,
            Self::CisAzure2,
            Self::PciDssV4,
            Self::Iso27001,
            Self::Soc2Type2,
            Self::Acf,
            Self::Mcsb,
        ]
    }

    /// Return the regulatory frameworks only (no virtual dimensions).
    ///
    /// This is the set offered by the framework selector; the virtual
    /// dimensions are reachable only through the alternate-column sort.
    pub fn regulatory() -> &'static [Framework] {
        &[
            Self::NistSp80053R4,
            Self::CisAzure2,
            Self::PciDssV4,
            Self::Iso27001,
            Self::Soc2Type2,
        ]
    }

    /// The canonical key string for this framework.
    ///
    /// This is the dispatch key the view-model operations accept, and the
    /// serde representation.
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::NistSp80053R4 => "NIST_SP_800-53_R4",
            Self::CisAzure2 => "CIS_Azure_2.0.0",
            Self::PciDssV4 => "PCI_DSS_v4.0",
            Self::Iso27001 => "ISO 27001:2013",
            Self::Soc2Type2 => "SOC 2 Type 2",
            Self::Acf => "ACF",
            Self::Mcsb => "MCSB",
        }
    }

    /// Human-readable label for selector UIs and export headers.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::NistSp80053R4 => "NIST SP 800-53 R4",
            Self::CisAzure2 => "CIS Azure Foundations 2.0.0",
            Self::PciDssV4 => "PCI DSS v4.0",
            Self::Iso27001 => "ISO 27001:2013",
            Self::Soc2Type2 => "SOC 2 Type 2",
            Self::Acf => "Azure Control Framework",
            Self::Mcsb => "Microsoft Cloud Security Benchmark",
        }
    }

    /// Whether this is a virtual sort dimension rather than a regulatory
    /// standard.
    pub fn is_virtual(&self) -> bool {
        matches!(self, Self::Acf | Self::Mcsb)
    }

    /// Parse a framework key, returning `None` for unknown keys.
    ///
    /// The sorter and grouper use this for their degrade-gracefully
    /// lookup: an unknown key is a no-op, not an error.
    pub fn from_key(key: &str) -> Option<Framework> {
        key.parse().ok()
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for Framework {
    type Err = ValidationError;

    /// Parse a framework from its canonical key or a registered alias.
    ///
    /// Keys are case- and format-sensitive, matching the literal strings
    /// the upstream queries carry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NIST_SP_800-53_R4" | "NIST_SP_800-53_Rev4" => Ok(Self::NistSp80053R4),
            "CIS_Azure_2.0.0" => Ok(Self::CisAzure2),
            "PCI_DSS_v4.0" => Ok(Self::PciDssV4),
            "ISO 27001:2013" => Ok(Self::Iso27001),
            "SOC 2 Type 2" => Ok(Self::Soc2Type2),
            "ACF" => Ok(Self::Acf),
            "MCSB" => Ok(Self::Mcsb),
            other => Err(ValidationError::UnknownFramework(other.to_string())),
        }
    }
}

impl From<Framework> for String {
    fn from(f: Framework) -> String {
        f.as_key().to_string()
    }
}

impl TryFrom<String> for Framework {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
