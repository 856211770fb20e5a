//! vleas - dependency checker CLI tool
//!
//! Scans a build manifest for Maven coordinates and reports which of them
//! have a newer release on Maven Central.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use vleas::cli::{CliArgs, Command};
use vleas::config::Settings;
use vleas::logging;
use vleas::orchestrator::{self, Orchestrator};
use vleas::output::{create_formatter, OutputConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.verbose, args.quiet);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        file = %args.file.display(),
        command = ?args.command,
        "starting"
    );

    match args.command {
        Command::Update => {
            println!("update deps from file: {}", args.file.display());
            orchestrator::update(&args.file)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => check(&args).await,
    }
}

async fn check(args: &CliArgs) -> anyhow::Result<ExitCode> {
    let settings = Settings::resolve(args)?;
    debug!(?settings, "resolved settings");

    let orchestrator = Orchestrator::new(&settings)?.with_progress(args.show_progress());
    let summary = orchestrator.check(&args.file).await?;

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.use_color());
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&summary, &mut stdout)?;
    stdout.flush()?;

    // Partial success: the report is complete but some lookups failed
    if summary.has_failures() {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
