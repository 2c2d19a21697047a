//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{CliConfig, ColorChoice, Verbosity};
use crate::error::CliResult;

/// keypad-calc: four-function keypad calculator
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// YAML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive terminal keypad
    Tui(TuiArgs),

    /// Feed key presses to a fresh calculator and print the display
    ///
    /// Each argument is a single button label or a compact run such as
    /// `12+3=`. Put options before the keys.
    Eval(EvalArgs),

    /// Show the effective configuration
    Config,
}

/// Arguments for the tui command
#[derive(Parser, Debug, Default)]
pub struct TuiArgs {
    /// Hide the keypad and show only the display
    #[arg(long)]
    pub no_keypad: bool,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Keys to press, e.g. `5 + 3 =` or `5+3=`
    #[arg(required = true, allow_hyphen_values = true, num_args = 1..)]
    pub keys: Vec<String>,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorArg {
    /// Auto-detect terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

impl Cli {
    /// Builds the effective configuration: config file first, then flags
    pub fn build_config(&self) -> CliResult<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        if self.quiet {
            config.verbosity = Verbosity::Quiet;
        } else if self.verbose > 0 {
            config.verbosity = Verbosity::from_count(self.verbose);
        }
        if let Some(color) = self.color {
            config.color = color.into();
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        if let Some(Commands::Tui(args)) = &self.command {
            if args.no_keypad {
                config.show_keypad = false;
            }
        }

        Ok(config)
    }
}
