//! # `regview domains`
//!
//! Lists the distinct domain selector options a dataset produces for a
//! framework, in comparator order.

use std::path::PathBuf;

use clap::Args;

use regview_core::DomainOption;
use regview_table::unique_domains;

use crate::dataset::load_rows;
use crate::{emit, OutputFormat};

/// Arguments for `regview domains`.
#[derive(Args, Debug)]
pub struct DomainsArgs {
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

/// Run the domains subcommand.
pub fn run_domains(args: &DomainsArgs) -> anyhow::Result<u8> {
    let rows = load_rows(&args.dataset)?;
    let options = unique_domains(&rows, &args.framework);
    let rendered = render(&options, args.format)?;
    emit(args.output.as_deref(), &rendered)?;
    Ok(0)
}

fn render(options: &[DomainOption], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for option in options {
                if option.key == option.text {
                    out.push_str(&format!("{}\n", option.key));
                } else {
                    out.push_str(&format!("{}\t{}\n", option.key, option.text));
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(options)?;
            out.push('\n');
            Ok(out)
        }
    }
}
