//! Check command implementation
//!
//! Resolves a config file and reports the settings a render would use,
//! without writing anything.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tracing::warn;
use wavgen_core::wav_format;

use super::exit_codes;
use super::json_output::{
    config_warnings_to_json, error_codes, print_json, CheckOutput, JsonError,
};
use crate::config::{load_config, ConfigWarning, GeneratorConfig};

/// Run the check command
///
/// # Returns
/// Exit code: 0 if the settings can be rendered, 1 otherwise
pub fn run(config_path: &Path, json_output: bool) -> Result<u8> {
    let display_path = config_path.display().to_string();

    let loaded = match load_config(config_path) {
        Ok(loaded) => loaded,
        Err(e) if json_output => {
            let err = JsonError::new(error_codes::CONFIG_LOAD, format!("{:#}", e)).with_file(display_path);
            print_json(&CheckOutput {
                success: false,
                errors: vec![err],
                warnings: Vec::new(),
                config: None,
            })?;
            return Ok(exit_codes::CONFIG_ERROR);
        }
        Err(e) => return Err(e),
    };

    for warning in &loaded.warnings {
        warn!("{}: {}", display_path, warning);
    }

    let errors = render_errors(&loaded.config);
    let success = errors.is_empty();

    if json_output {
        print_json(&CheckOutput {
            success,
            errors,
            warnings: config_warnings_to_json(&loaded.warnings),
            config: Some(loaded.config),
        })?;
    } else {
        print_human(&display_path, &loaded.config, &loaded.warnings, &errors);
    }

    Ok(if success {
        exit_codes::SUCCESS
    } else {
        exit_codes::CONFIG_ERROR
    })
}

/// Problems that would stop a render of `config`.
fn render_errors(config: &GeneratorConfig) -> Vec<JsonError> {
    let mut errors = Vec::new();
    let request = config.request();
    let request_ok = match request.validate() {
        Ok(()) => true,
        Err(e) => {
            errors.push(JsonError::from(&e));
            false
        }
    };
    match config.encoding() {
        Ok(encoding) if request_ok => {
            if let Err(e) = wav_format(&request, encoding) {
                errors.push(JsonError::from(&e));
            }
        }
        Ok(_) => {}
        Err(e) => errors.push(JsonError::from(&e)),
    }
    errors
}

fn print_human(
    path: &str,
    config: &GeneratorConfig,
    warnings: &[ConfigWarning],
    errors: &[JsonError],
) {
    println!("{} {}", "Checking:".cyan().bold(), path);
    println!();
    for line in config.summary_lines() {
        println!("  {}", line);
    }

    if !warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in warnings {
            println!("  {} {}", "!".yellow(), warning);
        }
    }

    if !errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for err in errors {
            println!("  {} [{}]: {}", "x".red(), err.code.red(), err.message);
        }
        println!("\n{} {} error(s)", "FAILED".red().bold(), errors.len());
    } else {
        println!("\n{}", "OK".green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_renders() {
        assert!(render_errors(&GeneratorConfig::default()).is_empty());
    }

    #[test]
    fn test_unrenderable_config_is_reported() {
        let config = GeneratorConfig {
            frequencies: Vec::new(),
            bits_per_sample: 12,
            ..GeneratorConfig::default()
        };
        let codes: Vec<_> = render_errors(&config).into_iter().map(|e| e.code).collect();
        assert_eq!(codes, vec!["WAVGEN_001", "WAVGEN_006"]);
    }

    #[test]
    fn test_byte_rate_overflow_is_reported() {
        let config = GeneratorConfig {
            sample_rate: 1_000_000_000,
            bits_per_sample: 64,
            sample_format: wavgen_core::SampleFormat::FloatingPoint,
            ..GeneratorConfig::default()
        };
        let codes: Vec<_> = render_errors(&config).into_iter().map(|e| e.code).collect();
        assert_eq!(codes, vec!["WAVGEN_003"]);
    }
}
