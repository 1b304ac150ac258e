//! oxide-subsql CLI
//!
//! Parses a file written in a small SQL subset and prints the AST or the
//! errors found in it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use oxide_subsql_cli::{run, OutputFormat};

/// An SQL parser in vacuum: parses an SQL subset and prints ASTs.
#[derive(Parser)]
#[command(name = "oxide-subsql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format.
    #[arg(short, long, env = "OXIDE_SUBSQL_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Path of the SQL file to parse.
    input: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match run(&cli.input, cli.format) {
        Ok(outcome) => {
            println!("{}", outcome.report());
            Ok(ExitCode::from(outcome.exit_code()))
        }
        Err(err) => {
            println!("{err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
