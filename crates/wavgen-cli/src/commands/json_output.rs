//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `generate` and `check`, so scripts
//! can consume results without scraping coloured text.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wavgen_core::SynthError;

use crate::config::{ConfigWarning, GeneratorConfig};

/// Error codes for CLI operations.
///
/// Synthesis errors pass through their own `WAVGEN_XXX` codes.
pub mod error_codes {
    /// Config file could not be read or parsed
    pub const CONFIG_LOAD: &str = "CLI_001";
    /// Output file could not be written
    pub const WRITE_OUTPUT: &str = "CLI_002";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// Recoverable config problem
    pub const CONFIG: &str = "CLI_W001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "WAVGEN_004")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&SynthError> for JsonError {
    fn from(err: &SynthError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Line number in the config file (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl From<&ConfigWarning> for JsonWarning {
    fn from(warning: &ConfigWarning) -> Self {
        Self {
            code: warning_codes::CONFIG.to_string(),
            message: warning.message.clone(),
            line: warning.line,
        }
    }
}

/// Converts config warnings for JSON output.
pub fn config_warnings_to_json(warnings: &[ConfigWarning]) -> Vec<JsonWarning> {
    warnings.iter().map(JsonWarning::from).collect()
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    /// Whether the WAV file was written
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Generation details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

/// Details of a written WAV file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResult {
    pub output_file: String,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub sample_format: String,
    pub num_samples: usize,
    pub duration_seconds: f64,
    /// Size of the sample data in bytes
    pub data_bytes: usize,
    /// BLAKE3 hash of the sample data
    pub pcm_hash: String,
    /// Dither seed, if dither was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dither_seed: Option<u32>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(result: GenerateResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

/// JSON output for the `check` command.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// Whether the resolved settings can be rendered
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Resolved settings (when the config could be loaded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<GeneratorConfig>,
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}
