//! # modelcheck CLI entry point
//!
//! Parses command-line arguments, installs logging and dispatches to the
//! subcommand handlers.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use modelcheck_cli::check::{CheckSchemaArgs, run_check_schema};
use modelcheck_cli::{exit, run_and_flush};
use modelcheck_cli::validate::{ValidateArgs, run_validate};
use modelcheck_log::{Config, Format};

/// Validate JSON objects against named model schemas.
#[derive(Parser, Debug)]
#[command(name = "modelcheck", version, about, long_about = None)]
struct Cli {
    /// Log filter, e.g. `debug` or `modelcheck_validator=trace`.
    #[arg(long, global = true, env = "MODELCHECK_LOG")]
    log_level: Option<String>,

    /// Log output format: compact, pretty or json.
    #[arg(long, global = true)]
    log_format: Option<Format>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate object files against a model.
    Validate(ValidateArgs),

    /// Report models and rules or types without a registered checker.
    CheckSchema(CheckSchemaArgs),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(exit::ERROR);
        }
    };

    let mut config = Config::from_env();
    if let Some(level) = cli.log_level {
        config.level = level;
    }
    if let Some(format) = cli.log_format {
        config.format = format;
    }
    if let Err(e) = modelcheck_log::init_with(config) {
        eprintln!("modelcheck: {e}");
        return ExitCode::from(exit::ERROR);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Commands::Validate(args) => run_and_flush(&mut out, |out| run_validate(&args, out)),
        Commands::CheckSchema(args) => run_and_flush(&mut out, |out| run_check_schema(&args, out)),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("modelcheck: {e:#}");
            ExitCode::from(exit::ERROR)
        }
    }
}
