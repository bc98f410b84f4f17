//! # Flat Row Data Model
//!
//! The display-ready records the view-model operations consume. Rows are
//! produced upstream by flattening the nested mapping trees returned by
//! the resource-graph query; this crate only ever sees the flat form.

use serde::{Deserialize, Serialize};

/// A single display row in a control-mapping table.
///
/// `control` carries either `"<ID>: <Name>"` or a bare `<ID>`. The
/// remaining fields are framework-specific payload and may be absent
/// depending on which table produced the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRow {
    /// The control identifier, optionally followed by `": <name>"`.
    pub control: String,

    /// Control description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Implementation details or guidance text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// ACF identifier, when the row came from the ACF mapping table.
    #[serde(rename = "acfID", default, skip_serializing_if = "Option::is_none")]
    pub acf_id: Option<String>,

    /// MCSB identifier, when the row came from the policy mapping table.
    #[serde(rename = "mcsbID", default, skip_serializing_if = "Option::is_none")]
    pub mcsb_id: Option<String>,
}

impl ControlRow {
    /// Build a row with only the control field set.
    pub fn new(control: impl Into<String>) -> Self {
        Self {
            control: control.into(),
            description: None,
            details: None,
            acf_id: None,
            mcsb_id: None,
        }
    }

    /// The label text after the first `": "`, if any.
    pub fn label(&self) -> Option<&str> {
        self.control
            .split_once(':')
            .map(|(_, rest)| rest.trim())
            .filter(|rest| !rest.is_empty())
    }
}

/// A `{key, text}` option for the domain and control-ID selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainOption {
    /// The selector value, a domain prefix or control ID.
    pub key: String,
    /// The display text, sometimes including a human-readable label.
    pub text: String,
}

impl DomainOption {
    /// Build an option whose display text equals its key.
    pub fn bare(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            text: key.clone(),
            key,
        }
    }
}
