//! # `regview frameworks`
//!
//! Lists the registered framework keys, their display labels, and
//! whether they are virtual sort dimensions.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use regview_core::Framework;

use crate::{emit, OutputFormat};

/// Arguments for `regview frameworks`.
#[derive(Args, Debug)]
pub struct FrameworksArgs {
    /// Output encoding.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameworkEntry {
    key: &'static str,
    label: &'static str,
    is_virtual: bool,
}

/// Run the frameworks subcommand.
pub fn run_frameworks(args: &FrameworksArgs) -> anyhow::Result<u8> {
    let entries: Vec<FrameworkEntry> = Framework::all()
        .iter()
        .map(|f| FrameworkEntry {
            key: f.as_key(),
            label: f.display_label(),
            is_virtual: f.is_virtual(),
        })
        .collect();

    let rendered = match args.format {
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in &entries {
                let marker = if entry.is_virtual { " (virtual)" } else { "" };
                out.push_str(&format!("{}\t{}{}\n", entry.key, entry.label, marker));
            }
            out
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&entries)?;
            out.push('\n');
            out
        }
    };

    emit(args.output.as_deref(), &rendered)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_registered_framework() {
        let out = tempfile::NamedTempFile::new().unwrap();
        let args = FrameworksArgs {
            format: OutputFormat::Text,
            output: Some(out.path().to_path_buf()),
        };

        assert_eq!(run_frameworks(&args).unwrap(), 0);
        let rendered = std::fs::read_to_string(out.path()).unwrap();
        assert_eq!(rendered.lines().count(), Framework::all().len());
        assert!(rendered.contains("NIST_SP_800-53_R4"));
        assert!(rendered.contains("ACF\tAzure Control Framework (virtual)"));
    }
}
