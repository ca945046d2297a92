//! WAV file generation result type.

use std::io;

use crate::pcm::EncodedAudio;

use super::format::WavFormat;
use super::writer::write_wav_to_vec;

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Format written to the header.
    pub format: WavFormat,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Wraps little-endian encoded audio in a WAV container.
    pub fn from_encoded(audio: &EncodedAudio, format: WavFormat) -> io::Result<Self> {
        let wav_data = write_wav_to_vec(&format, &audio.bytes)?;

        Ok(Self {
            wav_data,
            pcm_hash: audio.pcm_hash(),
            format,
            num_samples: audio.sample_count,
        })
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    /// Size of the sample data in bytes.
    pub fn data_len(&self) -> usize {
        self.wav_data.len().saturating_sub(super::HEADER_LEN)
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.format.sample_rate as f64
    }
}
