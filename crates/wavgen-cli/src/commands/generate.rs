//! Generate command implementation
//!
//! Renders the configured tones and writes them to a WAV file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use tracing::{debug, error, info, warn};
use wavgen_core::{render_wav, Dither, SampleFormat, WavResult};

use super::exit_codes;
use super::json_output::{
    config_warnings_to_json, error_codes, print_json, GenerateOutput, GenerateResult, JsonError,
    JsonWarning,
};
use crate::config::{load_config, GeneratorConfig, DEFAULT_CONFIG_FILE};

/// Options for the generate command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Config file to read
    pub config_path: PathBuf,
    /// Output path, replacing the configured one
    pub output: Option<String>,
    /// Dither seed, replacing the configured one
    pub seed: Option<u32>,
    /// Disable dither regardless of the config
    pub no_dither: bool,
    /// Print a machine-readable report instead of coloured text
    pub json: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            output: None,
            seed: None,
            no_dither: false,
            json: false,
        }
    }
}

impl GenerateOptions {
    /// Applies the command-line overrides to a loaded config.
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(output) = &self.output {
            config.output_file = output.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.no_dither {
            config.dither = false;
        }
    }
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 config error, 2 generation error
///
/// # Errors
/// Returns an error if the config file cannot be loaded (human output only)
/// or the JSON report cannot be printed.
pub fn run(options: &GenerateOptions) -> Result<u8> {
    let start = Instant::now();
    let config_path = options.config_path.display().to_string();

    let loaded = match load_config(&options.config_path) {
        Ok(loaded) => loaded,
        Err(e) if options.json => {
            let err = JsonError::new(error_codes::CONFIG_LOAD, format!("{:#}", e)).with_file(config_path);
            print_json(&GenerateOutput::failure(vec![err], Vec::new()))?;
            return Ok(exit_codes::CONFIG_ERROR);
        }
        Err(e) => return Err(e),
    };

    let mut config = loaded.config;
    options.apply(&mut config);

    for warning in &loaded.warnings {
        warn!("{}: {}", config_path, warning);
    }
    for line in config.summary_lines() {
        info!("{}", line);
    }

    let warnings = config_warnings_to_json(&loaded.warnings);

    let rendered = config
        .encoding()
        .and_then(|encoding| render_wav(&config.request(), encoding, config.dither()));
    let result = match rendered {
        Ok(result) => result,
        Err(e) => {
            error!(code = e.code(), "{}", e);
            report_failure(options.json, JsonError::from(&e), warnings)?;
            return Ok(if e.is_config_error() {
                exit_codes::CONFIG_ERROR
            } else {
                exit_codes::GENERATION_ERROR
            });
        }
    };

    if let Err(e) = fs::write(&config.output_file, &result.wav_data) {
        let message = format!(
            "unable to open file '{}' for writing: {}",
            config.output_file, e
        );
        error!("{}", message);
        let err = JsonError::new(error_codes::WRITE_OUTPUT, message).with_file(&config.output_file);
        report_failure(options.json, err, warnings)?;
        return Ok(exit_codes::GENERATION_ERROR);
    }
    debug!(
        pcm_hash = %result.pcm_hash,
        "wrote {} bytes to '{}'",
        result.wav_data.len(),
        config.output_file
    );

    let duration_ms = start.elapsed().as_millis() as u64;
    if options.json {
        let result = generate_result(&config, &result, duration_ms);
        print_json(&GenerateOutput::success(result, warnings))?;
    } else {
        print_summary(&config, &result, duration_ms);
    }

    Ok(exit_codes::SUCCESS)
}

fn report_failure(json: bool, err: JsonError, warnings: Vec<JsonWarning>) -> Result<()> {
    if json {
        print_json(&GenerateOutput::failure(vec![err], warnings))
    } else {
        eprintln!("{}: {}", "error".red(), err.message);
        Ok(())
    }
}

fn applied_dither_seed(config: &GeneratorConfig) -> Option<u32> {
    match (config.sample_format, config.dither()) {
        (SampleFormat::Integer, Dither::Triangular { seed }) => Some(seed),
        _ => None,
    }
}

fn generate_result(config: &GeneratorConfig, result: &WavResult, duration_ms: u64) -> GenerateResult {
    GenerateResult {
        output_file: config.output_file.clone(),
        sample_rate: result.sample_rate(),
        bits_per_sample: result.format.bits_per_sample,
        sample_format: result.format.sample_format.to_string(),
        num_samples: result.num_samples,
        duration_seconds: result.duration_seconds(),
        data_bytes: result.data_len(),
        pcm_hash: result.pcm_hash.clone(),
        dither_seed: applied_dither_seed(config),
        duration_ms,
    }
}

fn print_summary(config: &GeneratorConfig, result: &WavResult, duration_ms: u64) {
    println!("{} {}", "Generated:".green().bold(), config.output_file);
    println!(
        "  {} {} x {} wave ({})",
        "Tones:".dimmed(),
        config.frequencies.len(),
        config.wave_type,
        config
            .frequencies
            .iter()
            .map(|f| format!("{:.1}Hz", f))
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "  {} {} samples, {:.2}s at {}Hz",
        "Length:".dimmed(),
        result.num_samples,
        result.duration_seconds(),
        result.sample_rate()
    );
    println!(
        "  {} {}-bit {}",
        "Format:".dimmed(),
        result.format.bits_per_sample,
        result.format.sample_format
    );
    if let Some(seed) = applied_dither_seed(config) {
        println!("  {} seed {}", "Dither:".dimmed(), seed);
    }
    println!("  {} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);
    println!("{} {}ms", "Done in".dimmed(), duration_ms);
}
