//! # regview-cli — Offline Inspection for Control-Mapping Datasets
//!
//! Provides the `regview` command-line interface over the view-model
//! operations in `regview-table`. Datasets are JSON arrays of flat rows,
//! as exported from the dashboard's table queries.
//!
//! ## Subcommands
//!
//! - `regview sort` — order a dataset by a framework's comparator.
//! - `regview group` — partition a sorted dataset into named groups.
//! - `regview domains` — list the distinct domain selector options.
//! - `regview lookup` — print the control-ID to title map.
//! - `regview frameworks` — list the registered framework keys.
//!
//! Each subcommand prints text by default and JSON with `--format json`;
//! `--output` writes to a file instead of stdout.

pub mod dataset;
pub mod domains;
pub mod frameworks;
pub mod group;
pub mod lookup;
pub mod sort;

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;

/// Output encoding for a subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented text for terminals.
    Text,
    /// Pretty-printed JSON for exports and piping.
    Json,
}

/// Write rendered output to a file, or stdout when no path is given.
pub fn emit(output: Option<&Path>, rendered: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
        }
    }
    Ok(())
}
