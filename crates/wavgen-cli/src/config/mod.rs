//! Generator configuration.
//!
//! Settings come from a `key = value` text file (or a JSON file with the same
//! field names). Parsing never fails on bad values: each problem becomes a
//! [`ConfigWarning`] and the affected setting keeps its default.

mod parser;


use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use wavgen_core::wav::HEADER_LEN;
use wavgen_core::{Dither, EncodingSpec, SampleFormat, SynthResult, SynthesisRequest, WaveType};

pub use parser::{parse_config_json, parse_config_str, RawSettings};

/// Config file read when none is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "config.cfg";

/// Output file written when the config does not name one.
pub const DEFAULT_OUTPUT_FILE: &str = "file.wav";

/// Longest accepted output file name, exclusive.
pub const NAME_MAX: usize = 255;

/// Tone used when the config provides no usable frequency.
pub const FALLBACK_FREQUENCY: f64 = 440.0;

/// A recoverable problem found while reading a config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigWarning {
    /// 1-based line number, when the problem maps to a line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl ConfigWarning {
    pub fn new(line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Fully resolved generator settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorConfig {
    pub frequencies: Vec<f64>,
    pub wave_type: WaveType,
    /// Length in seconds.
    pub duration: f64,
    /// Peak level in dBFS.
    pub amplitude: f64,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub sample_format: SampleFormat,
    pub dither: bool,
    pub output_file: String,
    /// Seed for the dither noise stream.
    pub seed: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            frequencies: vec![FALLBACK_FREQUENCY],
            wave_type: WaveType::Sine,
            duration: 4.0,
            amplitude: -1.0,
            sample_rate: 48_000,
            bits_per_sample: 24,
            sample_format: SampleFormat::Integer,
            dither: true,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            seed: 1,
        }
    }
}

impl GeneratorConfig {
    /// The synthesis request described by these settings.
    pub fn request(&self) -> SynthesisRequest {
        SynthesisRequest {
            frequencies: self.frequencies.clone(),
            wave_type: self.wave_type,
            sample_rate: self.sample_rate,
            duration_seconds: self.duration,
            target_level_db: self.amplitude,
        }
    }

    pub fn encoding(&self) -> SynthResult<EncodingSpec> {
        EncodingSpec::new(self.bits_per_sample, self.sample_format)
    }

    pub fn dither(&self) -> Dither {
        if self.dither {
            Dither::Triangular { seed: self.seed }
        } else {
            Dither::Off
        }
    }

    /// Expected size of the WAV file in KiB.
    pub fn estimated_size_kb(&self) -> f64 {
        let data = self.sample_rate as f64 * self.duration * (self.bits_per_sample as f64 / 8.0);
        (data + HEADER_LEN as f64) / 1024.0
    }

    /// Human-readable description of the render, one line per setting.
    pub fn summary_lines(&self) -> Vec<String> {
        let tones = self
            .frequencies
            .iter()
            .map(|f| format!("{:.1}Hz", f))
            .collect::<Vec<_>>()
            .join(", ");
        let dither = match (self.sample_format, self.dither) {
            (SampleFormat::FloatingPoint, _) => "(ignored)",
            (_, true) => "Yes",
            (_, false) => "No",
        };

        vec![
            format!(
                "Generating {} {} wave(s)...",
                self.frequencies.len(),
                self.wave_type
            ),
            format!("Frequencies:   {}", tones),
            format!(
                "Length:        {:.2}s ({:.2}KB)",
                self.duration,
                self.estimated_size_kb()
            ),
            format!("Sample Peak:   {:+.2}dBFS", self.amplitude),
            format!("Sample Rate:   {}Hz", self.sample_rate),
            format!("Sample Format: {}", self.sample_format),
            format!("Bit Depth:     {}-bit", self.bits_per_sample),
            format!("Dither:        {}", dither),
            format!("Output File:   '{}'", self.output_file),
        ]
    }
}

/// A resolved config together with everything that was wrong with its source.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: GeneratorConfig,
    pub warnings: Vec<ConfigWarning>,
}

/// Loads a config file.
///
/// A missing file yields the default configuration plus a warning. Files
/// ending in `.json` are read as JSON, anything else as `key = value` text.
///
/// # Errors
/// Fails if the file exists but cannot be read, or if a JSON file is not
/// valid JSON.
pub fn load_config(path: &Path) -> Result<LoadedConfig> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(LoadedConfig {
                config: GeneratorConfig::default(),
                warnings: vec![ConfigWarning::new(
                    None,
                    format!(
                        "unable to read config file '{}': {} (using defaults)",
                        path.display(),
                        e
                    ),
                )],
            });
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read config file: {}", path.display()))
        }
    };

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        parse_config_json(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    } else {
        Ok(parse_config_str(&text))
    }
}
