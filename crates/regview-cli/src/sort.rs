//! # `regview sort`
//!
//! Sorts a dataset by a framework's comparator and prints the rows in
//! their new order.

use std::path::PathBuf;

use clap::Args;

use regview_core::ControlRow;
use regview_table::sort_rows;

use crate::dataset::load_rows;
use crate::{emit, OutputFormat};

/// Arguments for `regview sort`.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Path to the dataset JSON (an array of rows).
    pub dataset: PathBuf,

    /// Framework key to sort by (see `regview frameworks`).
    #[arg(short, long)]
    pub framework: String,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the sort subcommand.
pub fn run_sort(args: &SortArgs) -> anyhow::Result<u8> {
    let mut rows = load_rows(&args.dataset)?;
    sort_rows(&mut rows, &args.framework);
    let rendered = render_rows(&rows, args.format)?;
    emit(args.output.as_deref(), &rendered)?;
    Ok(0)
}

fn render_rows(rows: &[ControlRow], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for row in rows {
                out.push_str(&row.control);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(rows)?;
            out.push('\n');
            Ok(out)
        }
    }
}
