//! # regview CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use regview_cli::domains::{run_domains, DomainsArgs};
use regview_cli::frameworks::{run_frameworks, FrameworksArgs};
use regview_cli::group::{run_group, GroupArgs};
use regview_cli::lookup::{run_lookup, LookupArgs};
use regview_cli::sort::{run_sort, SortArgs};

/// regview — offline sorting, grouping, and inspection of
/// control-mapping datasets.
#[derive(Parser, Debug)]
#[command(name = "regview", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort a dataset by a framework's comparator.
    Sort(SortArgs),

    /// Sort and partition a dataset into named groups.
    Group(GroupArgs),

    /// List the distinct domain selector options for a dataset.
    Domains(DomainsArgs),

    /// Print the control-ID to title lookup map for a dataset.
    Lookup(LookupArgs),

    /// List the registered framework keys.
    Frameworks(FrameworksArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Sort(args) => run_sort(&args),
        Commands::Group(args) => run_group(&args),
        Commands::Domains(args) => run_domains(&args),
        Commands::Lookup(args) => run_lookup(&args),
        Commands::Frameworks(args) => run_frameworks(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
