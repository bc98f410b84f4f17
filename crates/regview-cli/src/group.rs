//! # `regview group`
//!
//! Sorts a dataset, partitions it into named groups, and prints either a
//! group summary or a full JSON view-model export (framework, timestamp,
//! groups, and rows).

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use regview_core::ControlRow;
use regview_table::{group_and_sort, sort_rows, Group};

use crate::dataset::load_rows;
use crate::{emit, OutputFormat};

/// Arguments for `regview group`.
#[derive(Args, Debug)]
pub struct GroupArgs {
    /// Path to the dataset JSON (an array of rows).
    pub dataset: PathBuf,

    /// Framework key to group by (see `regview frameworks`).
    #[arg(short, long)]
    pub framework: String,

    /// Reverse the group order.
    #[arg(long)]
    pub descending: bool,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// The JSON export envelope: everything the rendering layer needs to
/// reproduce the grouped table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupExport<'a> {
    framework: &'a str,
    generated_at: String,
    groups: &'a [Group],
    rows: &'a [ControlRow],
}

/// Run the group subcommand.
pub fn run_group(args: &GroupArgs) -> anyhow::Result<u8> {
    let mut rows = load_rows(&args.dataset)?;
    sort_rows(&mut rows, &args.framework);
    let groups = group_and_sort(&rows, args.descending, &args.framework);
    let rendered = render(&args.framework, &groups, &rows, args.format)?;
    emit(args.output.as_deref(), &rendered)?;
    Ok(0)
}

fn render(
    framework: &str,
    groups: &[Group],
    rows: &[ControlRow],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for group in groups {
                out.push_str(&format!("{} ({} rows)\n", group.name, group.count));
                for row in &rows[group.start_index..group.start_index + group.count] {
                    out.push_str(&format!("  {}\n", row.control));
                }
            }
            if groups.is_empty() && !rows.is_empty() {
                out.push_str("(ungrouped)\n");
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let export = GroupExport {
                framework,
                generated_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
                groups,
                rows,
            };
            let mut out = serde_json::to_string_pretty(&export)?;
            out.push('\n');
            Ok(out)
        }
    }
}
