use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod exit;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("{}", exit::describe(&error));
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let (entry, config) = prepare(&cli)?;
    let flags = cli.global_flags(&config);
    init_tracing(flags.quiet, flags.verbose)?;

    commands::report::run(entry, &cli.files, &config, &flags)
}

/// Resolve the report, then load configuration.
///
/// Unknown report names fail here, before config or any source is read.
fn prepare(
    cli: &cli::Cli,
) -> anyhow::Result<(&'static roster_reports::ReportEntry, roster_config::RosterConfig)> {
    let entry = roster_reports::lookup(&cli.report)?;
    let config = bootstrap::load_config(cli.config.as_deref())?;
    Ok((entry, config))
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ROSTER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
