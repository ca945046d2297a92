//! Synthesis request parameters.

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};
use crate::synthesis::WaveType;

/// Highest accepted target level in dBFS.
pub const MAX_LEVEL_DB: f64 = 6.0;

/// What to synthesize: a set of tones sharing one waveform family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Fundamental frequencies in Hz, in order.
    pub frequencies: Vec<f64>,
    /// Waveform family used for every tone.
    pub wave_type: WaveType,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Length of the rendered audio in seconds.
    pub duration_seconds: f64,
    /// Peak level of the mixed signal in dBFS.
    pub target_level_db: f64,
}

impl SynthesisRequest {
    /// Creates a request for a single tone at 0 dBFS.
    pub fn tone(wave_type: WaveType, frequency: f64, sample_rate: u32, duration_seconds: f64) -> Self {
        Self {
            frequencies: vec![frequency],
            wave_type,
            sample_rate,
            duration_seconds,
            target_level_db: 0.0,
        }
    }

    /// Sets the target peak level.
    pub fn with_level(mut self, target_level_db: f64) -> Self {
        self.target_level_db = target_level_db;
        self
    }

    /// Adds another tone.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequencies.push(frequency);
        self
    }

    /// Number of samples this request renders.
    pub fn sample_count(&self) -> usize {
        sample_count(self.sample_rate, self.duration_seconds)
    }

    /// Nyquist limit of the request's sample rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    /// Checks the request invariants.
    ///
    /// Tones at or above Nyquist are accepted; they render as silence.
    pub fn validate(&self) -> SynthResult<()> {
        if self.frequencies.is_empty() {
            return Err(SynthError::NoFrequencies);
        }
        if let Some(&freq) = self
            .frequencies
            .iter()
            .find(|f| !(f.is_finite() && **f > 0.0))
        {
            return Err(SynthError::InvalidFrequency { freq });
        }
        if self.sample_rate == 0 {
            return Err(SynthError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !(self.duration_seconds.is_finite() && self.duration_seconds > 0.0) {
            return Err(SynthError::InvalidDuration {
                duration: self.duration_seconds,
            });
        }
        if self.target_level_db.is_nan() || self.target_level_db > MAX_LEVEL_DB {
            return Err(SynthError::InvalidLevel {
                level_db: self.target_level_db,
                max_db: MAX_LEVEL_DB,
            });
        }
        Ok(())
    }
}

/// Number of samples for a duration: `round(sample_rate * duration)`.
pub fn sample_count(sample_rate: u32, duration_seconds: f64) -> usize {
    let count = (sample_rate as f64 * duration_seconds).round();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}
