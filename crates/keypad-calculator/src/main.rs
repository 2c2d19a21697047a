//! keypad-calc: four-function keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc                      # Interactive terminal keypad
//! keypad-calc tui --no-keypad      # Display only
//! keypad-calc eval 12 + 30 =       # Prints 42
//! keypad-calc eval --trace '6/0='  # Display after every key
//! keypad-calc config               # Effective configuration as JSON
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use keypad_calculator::{
    logging::{self, LogTarget},
    runner::{self, EvalOptions},
    Cli, CliConfig, CliResult, Commands,
};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.build_config()?;

    let target = match cli.command {
        Some(Commands::Eval(_) | Commands::Config) => LogTarget::Stderr,
        Some(Commands::Tui(_)) | None => LogTarget::FileOnly,
    };
    if logging::init(&config, target)? {
        debug!(?config, "configuration loaded");
    }

    match cli.command {
        Some(Commands::Eval(args)) => {
            let events = runner::parse_keys(&args.keys)?;
            let options = EvalOptions {
                trace: args.trace,
                json: args.json,
            };
            runner::run_keys(&events, options, &mut io::stdout().lock())?;
            Ok(())
        }
        Some(Commands::Config) => {
            println!("{}", config.to_json()?);
            Ok(())
        }
        Some(Commands::Tui(_)) | None => run_tui(&config),
    }
}

#[cfg(feature = "tui")]
fn run_tui(config: &CliConfig) -> CliResult<()> {
    keypad_calculator::tui::run(config)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_tui(_config: &CliConfig) -> CliResult<()> {
    Err(keypad_calculator::CliError::invalid_argument(
        "terminal UI not enabled. Rebuild with --features tui",
    ))
}
