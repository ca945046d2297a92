//! Logging setup.
//!
//! Events go to stderr and, optionally, to a log file that is truncated at
//! the start of every run. `RUST_LOG` takes precedence over the verbosity
//! flags.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Logging options shared by all commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Log debug events.
    pub verbose: bool,
    /// Only log warnings and errors.
    pub quiet: bool,
    /// Also write events to this file.
    pub log_file: Option<PathBuf>,
}

impl LogOptions {
    /// Directive used when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Installs the global subscriber.
///
/// # Errors
/// Fails if the log file cannot be created or a subscriber is already set.
pub fn init(options: &LogOptions) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.default_directive()));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file_layer = match &options.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
