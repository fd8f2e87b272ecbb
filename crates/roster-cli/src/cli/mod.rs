use std::path::PathBuf;

use clap::Parser;

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `roster` binary.
#[derive(Debug, Parser)]
#[command(
    name = "roster",
    version,
    about = "Aggregate reports over employee CSV files",
    after_help = "Example: roster --files team-a.csv team-b.csv --report performance"
)]
pub struct Cli {
    /// Employee CSV files, read in the order given
    #[arg(long, required = true, num_args = 1.., value_name = "PATH")]
    pub files: Vec<PathBuf>,

    #[arg(long, value_name = "NAME", help = report_help())]
    pub report: String,

    /// Output format: table, json, raw (defaults to config, then table)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Extra TOML config file layered above the discovered ones
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

fn report_help() -> String {
    let reports = roster_reports::entries()
        .iter()
        .map(|entry| format!("{} ({})", entry.name, entry.description))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Report to build: {reports}")
}

impl Cli {
    /// Resolve flags against loaded configuration.
    #[must_use]
    pub fn global_flags(&self, config: &roster_config::RosterConfig) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(config.output.format),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
