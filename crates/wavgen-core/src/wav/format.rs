//! WAV file format parameters.

use crate::pcm::{EncodingSpec, SampleFormat};

/// Size of the canonical header in bytes.
pub const HEADER_LEN: usize = 44;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (always 1).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Integer or floating-point samples.
    pub sample_format: SampleFormat,
}

impl WavFormat {
    /// Creates a mono WAV format for an encoding.
    pub fn mono(sample_rate: u32, encoding: EncodingSpec) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: encoding.bits_per_sample,
            sample_format: encoding.sample_format,
        }
    }

    /// The encoding this format describes.
    pub fn encoding(&self) -> EncodingSpec {
        EncodingSpec {
            bits_per_sample: self.bits_per_sample,
            sample_format: self.sample_format,
        }
    }

    /// Calculates bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    ///
    /// # Returns
    /// The byte rate, or None if it does not fit the 32-bit header field
    pub fn byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(u32::from(self.block_align()))
    }
}
