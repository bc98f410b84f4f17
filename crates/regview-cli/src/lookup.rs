//! # `regview lookup`
//!
//! Prints the control-ID to title lookup map for a dataset, ordered by
//! the framework's comparator.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use regview_table::{build_lookup_map, strategy_for};

use crate::dataset::load_rows;
use crate::{emit, OutputFormat};

/// Arguments for `regview lookup`.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Path to the dataset JSON (an array of rows).
    pub dataset: PathBuf,

    /// Framework key (see `regview frameworks`).
    #[arg(short, long)]
    pub framework: String,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// One resolved ID/title pair in JSON output.
#[derive(Debug, Serialize)]
struct LookupEntry {
    id: String,
    title: String,
}

/// Run the lookup subcommand.
pub fn run_lookup(args: &LookupArgs) -> anyhow::Result<u8> {
    let rows = load_rows(&args.dataset)?;
    let map = build_lookup_map(&rows, &args.framework);

    // A HashMap has no useful order; present entries in comparator order
    // when the framework is known, alphabetically otherwise.
    let mut entries: Vec<LookupEntry> = map
        .into_iter()
        .map(|(id, title)| LookupEntry { id, title })
        .collect();
    match strategy_for(&args.framework) {
        Some(strategy) => {
            let ordering = strategy.ordering();
            entries.sort_by(|a, b| ordering.compare(&a.id, &b.id));
        }
        None => entries.sort_by(|a, b| a.id.cmp(&b.id)),
    }

    let rendered = render(&entries, args.format)?;
    emit(args.output.as_deref(), &rendered)?;
    Ok(0)
}

fn render(entries: &[LookupEntry], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in entries {
                out.push_str(&format!("{}\t{}\n", entry.id, entry.title));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(entries)?;
            out.push('\n');
            Ok(out)
        }
    }
}
