//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured verbosity. The terminal UI owns the
//! screen, so it only logs when a log file is configured.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, unless a log file is configured
    Stderr,
    /// Only the configured log file; nothing if none is set
    FileOnly,
}

/// Builds the filter from `RUST_LOG`, falling back to the verbosity level
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_filter()))
}

/// Installs the global subscriber
///
/// Returns `Ok(false)` when logging stays disabled.
pub fn init(config: &CliConfig, target: LogTarget) -> CliResult<bool> {
    let (writer, ansi) = match (&config.log_file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        (None, LogTarget::Stderr) => (
            BoxMakeWriter::new(std::io::stderr),
            config.color.should_color(),
        ),
        (None, LogTarget::FileOnly) => return Ok(false),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::config(format!("cannot install logger: {e}")))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_only_without_file_is_disabled() {
        let config = CliConfig::new();
        assert!(!init(&config, LogTarget::FileOnly).unwrap());
    }

    #[test]
    fn test_env_filter_from_verbosity() {
        let config = CliConfig::new().with_verbosity(crate::config::Verbosity::Debug);
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(env_filter(&config).to_string(), "debug");
        }
    }
}
