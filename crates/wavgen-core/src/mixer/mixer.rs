//! Tone mixer for summing several tones into one buffer.

use super::processing::{allocate_buffer, normalize_to_level};
use super::SampleBuffer;
use crate::error::SynthResult;
use crate::request::SynthesisRequest;
use crate::synthesis::{HarmonicSynth, Synthesizer};

/// Sums tones into a single buffer.
#[derive(Debug)]
pub struct ToneMixer {
    /// Sample rate in Hz.
    sample_rate: u32,
    /// Accumulated samples.
    buffer: SampleBuffer,
    /// Partials rendered so far, across all tones.
    partials: usize,
}

impl ToneMixer {
    /// Creates a mixer with a zeroed buffer.
    ///
    /// # Arguments
    /// * `num_samples` - Number of output samples
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn new(num_samples: usize, sample_rate: u32) -> SynthResult<Self> {
        Ok(Self {
            sample_rate,
            buffer: allocate_buffer(num_samples)?,
            partials: 0,
        })
    }

    /// Renders a tone into the mix. Tones are not normalized individually.
    pub fn add_tone(&mut self, tone: &HarmonicSynth) -> usize {
        let rendered = tone.render_into(&mut self.buffer, self.sample_rate);
        self.partials += rendered;
        rendered
    }

    /// Total partials rendered so far.
    pub fn partials(&self) -> usize {
        self.partials
    }

    /// Number of samples in the mix.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the mix holds no samples.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Borrows the current (unnormalized) mix.
    pub fn samples(&self) -> &[f64] {
        &self.buffer
    }

    /// Normalizes the mix to `target_level_db` and hands over the buffer.
    pub fn finish(mut self, target_level_db: f64) -> SampleBuffer {
        normalize_to_level(&mut self.buffer, target_level_db);
        self.buffer
    }
}

/// Renders every tone of `request` and peak-normalizes the result.
///
/// A mix with no audible partial (every tone at or above Nyquist) stays
/// silent instead of failing.
pub fn mix(request: &SynthesisRequest) -> SynthResult<SampleBuffer> {
    let mut mixer = ToneMixer::new(request.sample_count(), request.sample_rate)?;
    for &frequency in &request.frequencies {
        mixer.add_tone(&HarmonicSynth::new(request.wave_type, frequency));
    }
    Ok(mixer.finish(request.target_level_db))
}
