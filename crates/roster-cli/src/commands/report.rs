use std::path::PathBuf;

use roster_config::RosterConfig;
use roster_core::responses::ReportResponse;
use roster_ingest::{ParseOptions, RecordParser};
use roster_reports::ReportEntry;

use crate::cli::GlobalFlags;
use crate::output::{output, table_options};

pub fn run(
    entry: &ReportEntry,
    files: &[PathBuf],
    config: &RosterConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let parser = RecordParser::new(ParseOptions {
        delimiter: config.input.delimiter_byte()?,
    });
    let response = build(entry, files, &parser)?;
    output(&response, flags.format, table_options(&config.output))
}

/// Parse every file, then run the selected report over the whole batch.
pub fn build(
    entry: &ReportEntry,
    files: &[PathBuf],
    parser: &RecordParser,
) -> anyhow::Result<ReportResponse> {
    let employees = parser.parse_sources(files)?;
    tracing::info!(
        report = entry.name,
        files = files.len(),
        employees = employees.len(),
        "building report"
    );

    let report = entry.build(&employees);
    Ok(ReportResponse::new(
        entry.name,
        report.headers(),
        report.compute(),
    ))
}
