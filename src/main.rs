use clap::Parser;
use env_preflight::config::{self, EnvironmentValidator};
use env_preflight::env_source::ProcessEnv;
use env_preflight::error::Result;
use env_preflight::report_writer::{ReportFormat, ReportWriter};
use std::io;
use std::path::PathBuf;
use std::process;

/// Check that required configuration is present before starting the app
#[derive(Parser, Debug)]
#[command(name = "env-preflight", version)]
struct Cli {
    /// Load variables from this file instead of the default `.env` lookup
    #[arg(long, value_name = "PATH", conflicts_with = "no_dotenv")]
    env_file: Option<PathBuf>,

    /// Skip `.env` loading and only look at the process environment
    #[arg(long)]
    no_dotenv: bool,

    /// Print a per-key report (table, json or csv) instead of the notice
    #[arg(long, value_name = "FORMAT")]
    report: Option<ReportFormat>,
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.no_dotenv {
        config::load_env_file(cli.env_file.as_deref())?;
    }

    let validator = EnvironmentValidator::default();

    match cli.report {
        Some(format) => {
            let report = validator.report(&ProcessEnv);
            ReportWriter::write(&report, format, &mut io::stdout().lock())?;
            validator.validate(&ProcessEnv)
        }
        None => config::validate_env_vars(),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("✗ Configuration error: {e}");
        process::exit(1);
    }
}
