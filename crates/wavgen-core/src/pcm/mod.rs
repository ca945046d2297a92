//! PCM sample encoding.
//!
//! Floating-point samples are quantized into integer PCM (8/16/24/32-bit) or
//! stored as IEEE floats (32/64-bit). The encoder writes each element in host
//! byte order; [`to_little_endian`] then brings the buffer into the
//! little-endian layout the WAV container requires.

mod encoder;
mod endian;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

// Re-export public API
pub use encoder::{encode, max_int, quantize};
pub use endian::{swap_sample_bytes, to_little_endian};

/// Sample encoding family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SampleFormat {
    /// Integer PCM (WAV format tag 1).
    #[default]
    #[serde(rename = "integer")]
    Integer,
    /// IEEE floating-point PCM (WAV format tag 3).
    #[serde(rename = "floating-point")]
    FloatingPoint,
}

impl SampleFormat {
    /// Name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleFormat::Integer => "integer",
            SampleFormat::FloatingPoint => "floating-point",
        }
    }

    /// WAV `audioFormat` tag.
    pub fn format_tag(&self) -> u16 {
        match self {
            SampleFormat::Integer => 1,
            SampleFormat::FloatingPoint => 3,
        }
    }

    /// Bit depths this format supports.
    pub fn supported_bits(&self) -> &'static [u16] {
        match self {
            SampleFormat::Integer => &[8, 16, 24, 32],
            SampleFormat::FloatingPoint => &[32, 64],
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleFormat {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" => Ok(SampleFormat::Integer),
            "floating-point" => Ok(SampleFormat::FloatingPoint),
            _ => Err(SynthError::invalid_param(
                "sample_format",
                format!("unrecognized sample format: '{}'", s),
            )),
        }
    }
}

/// Bit depth and sample format of the encoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingSpec {
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Sample format.
    pub sample_format: SampleFormat,
}

impl EncodingSpec {
    /// Creates a validated encoding spec.
    pub fn new(bits_per_sample: u16, sample_format: SampleFormat) -> SynthResult<Self> {
        let spec = Self {
            bits_per_sample,
            sample_format,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Integer PCM at `bits_per_sample`.
    pub fn integer(bits_per_sample: u16) -> SynthResult<Self> {
        Self::new(bits_per_sample, SampleFormat::Integer)
    }

    /// Floating-point PCM at `bits_per_sample`.
    pub fn float(bits_per_sample: u16) -> SynthResult<Self> {
        Self::new(bits_per_sample, SampleFormat::FloatingPoint)
    }

    /// Checks that the bit depth is valid for the format.
    pub fn validate(&self) -> SynthResult<()> {
        if self.sample_format.supported_bits().contains(&self.bits_per_sample) {
            Ok(())
        } else {
            Err(SynthError::UnsupportedEncoding {
                bits: self.bits_per_sample,
                format: self.sample_format.as_str(),
            })
        }
    }

    /// Bytes per encoded sample.
    pub fn bytes_per_sample(&self) -> usize {
        usize::from(self.bits_per_sample / 8)
    }
}

impl Default for EncodingSpec {
    fn default() -> Self {
        Self {
            bits_per_sample: 24,
            sample_format: SampleFormat::Integer,
        }
    }
}

/// Encoded sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudio {
    /// Sample bytes, `sample_count * bytes_per_sample` long.
    pub bytes: Vec<u8>,
    /// Number of samples.
    pub sample_count: usize,
    /// Width of one sample in bytes.
    pub bytes_per_sample: usize,
}

impl EncodedAudio {
    /// Length of the sample data in bytes.
    pub fn data_len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the bytes of sample `index`.
    pub fn sample_bytes(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(self.bytes_per_sample)?;
        self.bytes.get(start..start + self.bytes_per_sample)
    }

    /// BLAKE3 hash of the sample data.
    pub fn pcm_hash(&self) -> String {
        blake3::hash(&self.bytes).to_hex().to_string()
    }
}
