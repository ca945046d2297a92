//! Text and JSON config parsing.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;
use wavgen_core::{EncodingSpec, SampleFormat, WaveType, MAX_LEVEL_DB};

use super::{ConfigWarning, GeneratorConfig, LoadedConfig, FALLBACK_FREQUENCY, NAME_MAX};

/// Settings as written in the source, before cross-field checks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSettings {
    pub frequencies: Option<Vec<f64>>,
    pub wave_type: Option<WaveType>,
    pub duration: Option<f64>,
    pub amplitude: Option<f64>,
    pub sample_rate: Option<u32>,
    pub bits_per_sample: Option<u16>,
    pub sample_format: Option<SampleFormat>,
    pub dither: Option<bool>,
    pub output_file: Option<String>,
    pub seed: Option<u32>,
    /// Line each key was last set on (text configs only).
    #[serde(skip)]
    lines: BTreeMap<&'static str, usize>,
}

impl RawSettings {
    fn line_of(&self, key: &str) -> Option<usize> {
        self.lines.get(key).copied()
    }

    /// Applies the resolution rules and produces the final config.
    pub fn resolve(self, warnings: &mut Vec<ConfigWarning>) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();

        if let Some(freqs) = &self.frequencies {
            let line = self.line_of("frequencies");
            let mut tones = Vec::with_capacity(freqs.len());
            for &freq in freqs {
                if freq.is_finite() && freq > 0.0 {
                    tones.push(freq);
                } else {
                    warnings.push(ConfigWarning::new(
                        line,
                        format!(
                            "found illegal tone {}: every tone must be a positive number > 0.0Hz (ignoring)",
                            freq
                        ),
                    ));
                }
            }
            if tones.is_empty() {
                warnings.push(ConfigWarning::new(
                    line,
                    format!("no usable tones (using {:.1}Hz)", FALLBACK_FREQUENCY),
                ));
                tones.push(FALLBACK_FREQUENCY);
            }
            config.frequencies = tones;
        }

        if let Some(wave_type) = self.wave_type {
            config.wave_type = wave_type;
        }

        if let Some(duration) = self.duration {
            if duration.is_finite() && duration > 0.0 {
                config.duration = duration;
            } else {
                warnings.push(ConfigWarning::new(
                    self.line_of("duration"),
                    format!("duration must be a positive number of seconds, got {} (using default value)", duration),
                ));
            }
        }

        if let Some(amplitude) = self.amplitude {
            if amplitude > MAX_LEVEL_DB {
                warnings.push(ConfigWarning::new(
                    self.line_of("amplitude"),
                    format!(
                        "amplitude {:+.2}dBFS exceeds the maximum (clamping to {:+.2}dBFS)",
                        amplitude, MAX_LEVEL_DB
                    ),
                ));
                config.amplitude = MAX_LEVEL_DB;
            } else {
                config.amplitude = amplitude;
            }
        }

        if let Some(sample_rate) = self.sample_rate {
            let highest = config.frequencies.iter().copied().fold(0.0, f64::max);
            let nyquist_limit = (highest * 2.0) as u64;
            if u64::from(sample_rate) <= nyquist_limit {
                warnings.push(ConfigWarning::new(
                    self.line_of("sample_rate"),
                    format!(
                        "sample rate must be at least > {}Hz (ignoring)",
                        nyquist_limit
                    ),
                ));
            } else {
                config.sample_rate = sample_rate;
            }
        }

        let bits = self.bits_per_sample.unwrap_or(config.bits_per_sample);
        let format = self.sample_format.unwrap_or(config.sample_format);
        match EncodingSpec::new(bits, format) {
            Ok(spec) => {
                config.bits_per_sample = spec.bits_per_sample;
                config.sample_format = spec.sample_format;
            }
            Err(e) => {
                let line = self
                    .line_of("sample_format")
                    .or_else(|| self.line_of("bits_per_sample"));
                warnings.push(ConfigWarning::new(
                    line,
                    format!("{} (using default value)", e),
                ));
                config.bits_per_sample = 32;
                config.sample_format = SampleFormat::Integer;
            }
        }

        if let Some(dither) = self.dither {
            config.dither = dither;
        }

        if let Some(stem) = &self.output_file {
            let line = self.line_of("output_file");
            let stem = strip_quotes(stem.trim());
            let name = format!("{}.wav", stem);
            if stem.is_empty() {
                warnings.push(ConfigWarning::new(
                    line,
                    "output file name is empty (using default value)",
                ));
            } else if name.len() >= NAME_MAX {
                warnings.push(ConfigWarning::new(
                    line,
                    format!(
                        "filename is longer than {} bytes (using default value)",
                        NAME_MAX
                    ),
                ));
            } else {
                config.output_file = name;
            }
        }

        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        config
    }
}

/// Parses a `key = value` config.
///
/// Text after `;` is a comment. Blank lines and lines starting with `#` are
/// skipped. Later settings override earlier ones.
pub fn parse_config_str(text: &str) -> LoadedConfig {
    let mut warnings = Vec::new();
    let mut raw = RawSettings::default();

    for (index, source_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = source_line
            .split(';')
            .next()
            .unwrap_or_default()
            .trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            warnings.push(ConfigWarning::new(
                Some(line_no),
                "unable to parse line: incorrect formatting",
            ));
            continue;
        };
        let key = key.trim();
        let value = strip_quotes(value.trim());

        let result = match key {
            "frequencies" => {
                parse_frequencies(value, line_no, &mut warnings).map(|f| raw.frequencies = Some(f))
            }
            "wave_type" => parse_name(value, "wave type").map(|v| raw.wave_type = Some(v)),
            "duration" => parse_float(value).map(|v| raw.duration = Some(v)),
            "amplitude" => parse_float(value).map(|v| raw.amplitude = Some(v)),
            "sample_rate" => parse_unsigned(value).map(|v| raw.sample_rate = Some(v)),
            "bits_per_sample" => parse_unsigned(value).map(|v| raw.bits_per_sample = Some(v)),
            "sample_format" => {
                parse_name(value, "sample format").map(|v| raw.sample_format = Some(v))
            }
            "dither" => parse_bool(value).map(|v| raw.dither = Some(v)),
            "output_file" => {
                raw.output_file = Some(value.to_string());
                Ok(())
            }
            "seed" => parse_unsigned(value).map(|v| raw.seed = Some(v)),
            _ => Err(format!("unknown setting '{}' (ignoring)", key)),
        };

        match result {
            Ok(()) => {
                if let Some(key) = known_key(key) {
                    raw.lines.insert(key, line_no);
                }
            }
            Err(message) => warnings.push(ConfigWarning::new(Some(line_no), message)),
        }
    }

    let config = raw.resolve(&mut warnings);
    LoadedConfig { config, warnings }
}

/// Parses a JSON config with the same field names as the text format.
///
/// # Errors
/// Fails on malformed JSON, unknown fields or values of the wrong type.
pub fn parse_config_json(text: &str) -> serde_json::Result<LoadedConfig> {
    let raw: RawSettings = serde_json::from_str(text)?;
    let mut warnings = Vec::new();
    let config = raw.resolve(&mut warnings);
    Ok(LoadedConfig { config, warnings })
}

fn known_key(key: &str) -> Option<&'static str> {
    const KEYS: [&str; 10] = [
        "frequencies",
        "wave_type",
        "duration",
        "amplitude",
        "sample_rate",
        "bits_per_sample",
        "sample_format",
        "dither",
        "output_file",
        "seed",
    ];
    KEYS.iter().copied().find(|k| *k == key)
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Tones separated by commas and/or spaces. Unparseable entries are
/// reported and skipped.
fn parse_frequencies(
    value: &str,
    line_no: usize,
    warnings: &mut Vec<ConfigWarning>,
) -> Result<Vec<f64>, String> {
    let mut tones = Vec::new();
    for token in value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match parse_float(token) {
            Ok(freq) => tones.push(freq),
            Err(message) => warnings.push(ConfigWarning::new(Some(line_no), message)),
        }
    }
    Ok(tones)
}

fn parse_float(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(n) if !n.is_nan() => Ok(n),
        _ => Err(format!(
            "unable to parse a floating-point number from '{}'",
            value
        )),
    }
}

fn parse_unsigned<T: FromStr>(value: &str) -> Result<T, String> {
    value
        .parse::<T>()
        .map_err(|_| format!("unable to parse an unsigned number from '{}'", value))
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(format!("unable to parse a boolean value from '{}'", value)),
    }
}

fn parse_name<T: FromStr>(value: &str, what: &str) -> Result<T, String> {
    value
        .parse::<T>()
        .map_err(|_| format!("unrecognized {}: '{}'", what, value))
}
