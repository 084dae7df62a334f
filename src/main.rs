use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Report, strict_failures};

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    let mut reports = Vec::new();

    for input in args.codes() {
        let report = Report::new(input);
        tracing::debug!(
            input,
            valid = report.valid,
            reason = report.reason.as_deref().unwrap_or(""),
            "Validated national code"
        );
        writeln!(stdout, "{}", report.render(args.format, args.explain)?)?;
        reports.push(report);
    }

    let invalid = strict_failures(&reports, args.strict);
    if invalid > 0 {
        tracing::warn!(invalid, "Invalid national codes in strict mode");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
