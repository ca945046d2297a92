//! CLI argument definitions for the wavgen command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

use wavgen_cli::config::DEFAULT_CONFIG_FILE;

/// wavgen - band-limited test tone generator
#[derive(Parser)]
#[command(name = "wavgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug events
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also write log events to this file (truncated on every run)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the configured tones to a WAV file
    Generate {
        /// Path to the config file (text or JSON)
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Output file (overrides the config)
        #[arg(short, long)]
        output: Option<String>,

        /// Dither seed (overrides the config)
        #[arg(long)]
        seed: Option<u32>,

        /// Disable dither
        #[arg(long)]
        no_dither: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Resolve a config file and print the settings without rendering
    Check {
        /// Path to the config file (text or JSON)
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the BLAKE3 hash of a WAV file's sample data
    Hash {
        /// Path to the WAV file
        file: String,
    },
}
