//! wavgen CLI - Command-line interface for band-limited test tone generation
//!
//! This binary reads a generator config, renders the requested tones and
//! writes them as a mono WAV file.

mod cli_args;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::{error, info, warn};

use cli_args::{Cli, Commands};
use wavgen_cli::commands::{self, exit_codes};
use wavgen_cli::logging::{self, LogOptions};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_options = LogOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        log_file: cli.log_file.as_ref().map(PathBuf::from),
    };
    if let Err(e) = logging::init(&log_options) {
        eprintln!("{}: {:#}", "error".red(), e);
        return ExitCode::from(exit_codes::GENERATION_ERROR);
    }
    info!("wavgen {} initialized", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Generate {
            config,
            output,
            seed,
            no_dither,
            json,
        } => commands::generate::run(&commands::generate::GenerateOptions {
            config_path: PathBuf::from(config),
            output,
            seed,
            no_dither,
            json,
        }),
        Commands::Check { config, json } => commands::check::run(Path::new(&config), json),
        Commands::Hash { file } => commands::hash::run(Path::new(&file)),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{}: {:#}", "error".red(), e);
            exit_codes::CONFIG_ERROR
        }
    };

    if code == exit_codes::SUCCESS {
        info!("generator terminated normally with exit code: {}", code);
    } else {
        warn!("generator terminated abnormally with exit code: {}", code);
    }
    ExitCode::from(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["wavgen", "generate"]).unwrap();
        match cli.command {
            Commands::Generate {
                config,
                output,
                seed,
                no_dither,
                json,
            } => {
                assert_eq!(config, "config.cfg");
                assert_eq!(output, None);
                assert_eq!(seed, None);
                assert!(!no_dither);
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_cli_parses_generate_with_overrides() {
        let cli = Cli::try_parse_from([
            "wavgen",
            "generate",
            "-c",
            "tones.cfg",
            "-o",
            "out.wav",
            "--seed",
            "9",
            "--no-dither",
            "--json",
            "--log-file",
            "wavgen.log",
            "-v",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                config,
                output,
                seed,
                no_dither,
                json,
            } => {
                assert_eq!(config, "tones.cfg");
                assert_eq!(output.as_deref(), Some("out.wav"));
                assert_eq!(seed, Some(9));
                assert!(no_dither);
                assert!(json);
            }
            _ => panic!("expected generate command"),
        }
        assert!(cli.verbose);
        assert_eq!(cli.log_file.as_deref(), Some("wavgen.log"));
    }

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from(["wavgen", "check", "--config", "a.json", "--json"]).unwrap();
        match cli.command {
            Commands::Check { config, json } => {
                assert_eq!(config, "a.json");
                assert!(json);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_cli_parses_hash() {
        let cli = Cli::try_parse_from(["wavgen", "hash", "tone.wav"]).unwrap();
        match cli.command {
            Commands::Hash { file } => assert_eq!(file, "tone.wav"),
            _ => panic!("expected hash command"),
        }
    }

    #[test]
    fn test_cli_rejects_verbose_with_quiet() {
        assert!(Cli::try_parse_from(["wavgen", "-v", "-q", "generate"]).is_err());
    }

    #[test]
    fn test_cli_rejects_negative_seed() {
        assert!(Cli::try_parse_from(["wavgen", "generate", "--seed", "-1"]).is_err());
    }
}
